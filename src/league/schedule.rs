use crate::error::{Error, Result};

/// Enumerates the single round-robin pairing set for a roster of `count`
/// players: each index paired once with every later index. The order is
/// display order only.
pub fn pairings(count: usize) -> Result<Vec<(usize, usize)>> {
    if count < 2 {
        return Err(Error::InsufficientPlayers);
    }

    let mut pairs = Vec::with_capacity(count * (count - 1) / 2);
    for i in 0..count {
        for j in (i + 1)..count {
            pairs.push((i, j));
        }
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_players_yield_six_pairs() {
        let pairs = pairings(4).unwrap();
        assert_eq!(
            pairs,
            vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]
        );
    }

    #[test]
    fn test_pair_count_formula() {
        for n in 2..=10 {
            let pairs = pairings(n).unwrap();
            assert_eq!(pairs.len(), n * (n - 1) / 2);
        }
    }

    #[test]
    fn test_each_unordered_pair_once() {
        let pairs = pairings(6).unwrap();
        for (index, &(a, b)) in pairs.iter().enumerate() {
            assert!(a < b);
            for &(c, d) in &pairs[index + 1..] {
                assert_ne!((a, b), (c, d));
                assert_ne!((a, b), (d, c));
            }
        }
    }

    #[test]
    fn test_small_rosters_rejected() {
        assert!(matches!(pairings(0), Err(Error::InsufficientPlayers)));
        assert!(matches!(pairings(1), Err(Error::InsufficientPlayers)));
    }
}
