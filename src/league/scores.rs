use crate::error::{Error, Result};

/// Plausibility thresholds for a completed set.
///
/// The defaults encode the standard format: a set ends at 6 games with a
/// margin of two, or at 7 games after a tiebreak (7-5 or 7-6). Extended
/// scores like 8-6 are rejected on purpose; leagues that record them can
/// widen the thresholds.
#[derive(Debug, Clone, Copy)]
pub struct ScoreRules {
    pub max_sets: usize,
    pub set_games: u32,
    pub tiebreak_games: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            max_sets: 3,
            set_games: 6,
            tiebreak_games: 7,
        }
    }
}

/// The validated outcome of one match, sides in submission order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOutcome {
    pub sets_a: u32,
    pub sets_b: u32,
    pub grid: Vec<(u32, u32)>,
}

impl MatchOutcome {
    #[must_use]
    pub fn winner_is_a(&self) -> bool {
        self.sets_a > self.sets_b
    }
}

/// Validates a raw set-score grid and tallies sets won per side.
///
/// Entries are checked in submission order: shape, tie, then
/// plausibility. Pure and deterministic; nothing is persisted here, so a
/// failed grid never touches stored state.
pub fn validate_grid(raw: &[Vec<i64>], rules: &ScoreRules) -> Result<MatchOutcome> {
    if raw.is_empty() {
        return Err(Error::InvalidGrid);
    }
    if raw.len() > rules.max_sets {
        return Err(Error::TooManySets(rules.max_sets));
    }

    let mut grid = Vec::with_capacity(raw.len());
    let mut sets_a = 0u32;
    let mut sets_b = 0u32;

    for (index, entry) in raw.iter().enumerate() {
        let (a, b) = match entry.as_slice() {
            [a, b] => match (u32::try_from(*a), u32::try_from(*b)) {
                (Ok(a), Ok(b)) => (a, b),
                _ => return Err(Error::MalformedSet(index + 1)),
            },
            _ => return Err(Error::MalformedSet(index + 1)),
        };

        if a == b {
            return Err(Error::TiedSet(a, b));
        }

        let winner = a.max(b);
        let diff = winner - a.min(b);
        let plausible = (winner == rules.set_games && diff >= 2)
            || (winner == rules.tiebreak_games && (1..=2).contains(&diff));
        if !plausible {
            return Err(Error::ImplausibleSetScore(a, b));
        }

        if a > b {
            sets_a += 1;
        } else {
            sets_b += 1;
        }
        grid.push((a, b));
    }

    if sets_a == sets_b {
        return Err(Error::DrawNotAllowed);
    }

    Ok(MatchOutcome {
        sets_a,
        sets_b,
        grid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(entries: &[[i64; 2]]) -> Vec<Vec<i64>> {
        entries.iter().map(|e| e.to_vec()).collect()
    }

    #[test]
    fn test_straight_sets_win() {
        let outcome = validate_grid(&grid(&[[6, 0], [6, 4]]), &ScoreRules::default()).unwrap();
        assert_eq!(outcome.sets_a, 2);
        assert_eq!(outcome.sets_b, 0);
        assert!(outcome.winner_is_a());
        assert_eq!(outcome.grid, vec![(6, 0), (6, 4)]);
    }

    #[test]
    fn test_three_set_match() {
        let outcome =
            validate_grid(&grid(&[[6, 2], [3, 6], [7, 5]]), &ScoreRules::default()).unwrap();
        assert_eq!(outcome.sets_a, 2);
        assert_eq!(outcome.sets_b, 1);
    }

    #[test]
    fn test_empty_grid_rejected() {
        let err = validate_grid(&[], &ScoreRules::default()).unwrap_err();
        assert!(matches!(err, Error::InvalidGrid));
    }

    #[test]
    fn test_four_sets_rejected() {
        let err = validate_grid(
            &grid(&[[6, 0], [0, 6], [6, 0], [0, 6]]),
            &ScoreRules::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::TooManySets(3)));
    }

    #[test]
    fn test_malformed_entries_rejected() {
        let err = validate_grid(&[vec![6]], &ScoreRules::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedSet(1)));

        let err = validate_grid(&[vec![6, 0], vec![-1, 6]], &ScoreRules::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedSet(2)));

        let err = validate_grid(&[vec![6, 0, 3]], &ScoreRules::default()).unwrap_err();
        assert!(matches!(err, Error::MalformedSet(1)));
    }

    #[test]
    fn test_tie_rejected_before_plausibility() {
        // 6-6 would also fail the plausibility rule; the tie check wins.
        let err = validate_grid(&grid(&[[6, 6]]), &ScoreRules::default()).unwrap_err();
        assert!(matches!(err, Error::TiedSet(6, 6)));
    }

    #[test]
    fn test_implausible_scores_rejected() {
        for entry in [[8, 6], [6, 5], [9, 7], [7, 0], [7, 3], [5, 0], [1, 0]] {
            let err = validate_grid(&grid(&[entry]), &ScoreRules::default()).unwrap_err();
            assert!(
                matches!(err, Error::ImplausibleSetScore(a, b) if a == entry[0] as u32 && b == entry[1] as u32),
                "expected {entry:?} to be implausible"
            );
        }
    }

    #[test]
    fn test_tiebreak_scores_accepted() {
        for entry in [[7, 5], [7, 6], [5, 7], [6, 7]] {
            validate_grid(&grid(&[entry]), &ScoreRules::default())
                .unwrap_or_else(|e| panic!("expected {entry:?} to be valid, got {e}"));
        }
    }

    #[test]
    fn test_drawn_match_rejected() {
        let err = validate_grid(&grid(&[[6, 0], [0, 6]]), &ScoreRules::default()).unwrap_err();
        assert!(matches!(err, Error::DrawNotAllowed));
    }

    #[test]
    fn test_set_tally_covers_every_set() {
        let grids = [
            grid(&[[6, 0]]),
            grid(&[[6, 3], [4, 6], [7, 6]]),
            grid(&[[0, 6], [6, 7]]),
            grid(&[[7, 5], [6, 4]]),
        ];
        for raw in grids {
            let outcome = validate_grid(&raw, &ScoreRules::default()).unwrap();
            assert_eq!((outcome.sets_a + outcome.sets_b) as usize, raw.len());
            assert_ne!(outcome.sets_a, outcome.sets_b);
        }
    }

    #[test]
    fn test_widened_rules_accept_extended_sets() {
        let rules = ScoreRules {
            set_games: 8,
            ..ScoreRules::default()
        };
        let outcome = validate_grid(&grid(&[[8, 6]]), &rules).unwrap();
        assert_eq!(outcome.sets_a, 1);
    }
}
