use crate::types::Player;

/// Points a win was worth before set scoring existed. Only the legacy
/// reversal path uses this.
const LEGACY_WIN_POINTS: u32 = 3;

/// Credits one fixture's result to both players' cumulative stats.
/// One point per set won, under the current scoring rule.
pub fn apply(a: &mut Player, b: &mut Player, sets_a: u32, sets_b: u32) {
    a.played += 1;
    a.sets_won += sets_a;
    a.sets_lost += sets_b;
    a.points += sets_a;

    b.played += 1;
    b.sets_won += sets_b;
    b.sets_lost += sets_a;
    b.points += sets_b;
}

/// Exact inverse of [`apply`], using the set counts stored on the fixture
/// at the time it was recorded. The stored counts matter: the validation
/// rules may have changed between submissions, so recomputing from the
/// grid could un-credit a different amount than was credited.
///
/// Decrements saturate at zero so malformed historic data can never push
/// a stat negative.
pub fn reverse(a: &mut Player, b: &mut Player, prior_sets_a: u32, prior_sets_b: u32) {
    a.played = a.played.saturating_sub(1);
    a.sets_won = a.sets_won.saturating_sub(prior_sets_a);
    a.sets_lost = a.sets_lost.saturating_sub(prior_sets_b);
    a.points = a.points.saturating_sub(prior_sets_a);

    b.played = b.played.saturating_sub(1);
    b.sets_won = b.sets_won.saturating_sub(prior_sets_b);
    b.sets_lost = b.sets_lost.saturating_sub(prior_sets_a);
    b.points = b.points.saturating_sub(prior_sets_b);
}

/// Reversal for rows recorded before set scoring existed: only a winner
/// flag was stored, and a win was worth three points. One-time
/// compatibility path for pre-migration data.
pub fn reverse_legacy(winner: &mut Player, loser: &mut Player) {
    winner.played = winner.played.saturating_sub(1);
    winner.points = winner.points.saturating_sub(LEGACY_WIN_POINTS);
    loser.played = loser.played.saturating_sub(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn player(name: &str) -> Player {
        Player {
            id: format!("player-{name}"),
            division_id: "division-1".to_string(),
            name: name.to_string(),
            played: 0,
            sets_won: 0,
            sets_lost: 0,
            points: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_apply_credits_both_sides() {
        let mut a = player("a");
        let mut b = player("b");

        apply(&mut a, &mut b, 2, 1);

        assert_eq!((a.played, a.sets_won, a.sets_lost, a.points), (1, 2, 1, 2));
        assert_eq!((b.played, b.sets_won, b.sets_lost, b.points), (1, 1, 2, 1));
    }

    #[test]
    fn test_reverse_undoes_apply() {
        let mut a = player("a");
        let mut b = player("b");

        apply(&mut a, &mut b, 2, 0);
        apply(&mut a, &mut b, 1, 2);
        reverse(&mut a, &mut b, 1, 2);

        assert_eq!((a.played, a.sets_won, a.sets_lost, a.points), (1, 2, 0, 2));
        assert_eq!((b.played, b.sets_won, b.sets_lost, b.points), (1, 0, 2, 0));
    }

    #[test]
    fn test_correction_matches_single_recording() {
        let mut a = player("a");
        let mut b = player("b");
        apply(&mut a, &mut b, 2, 1);
        reverse(&mut a, &mut b, 2, 1);
        apply(&mut a, &mut b, 0, 2);

        let mut a2 = player("a");
        let mut b2 = player("b");
        apply(&mut a2, &mut b2, 0, 2);

        assert_eq!((a.played, a.sets_won, a.sets_lost, a.points), (1, 0, 2, 0));
        assert_eq!(a.points, a2.points);
        assert_eq!(b.points, b2.points);
        assert_eq!(a.sets_won, a2.sets_won);
        assert_eq!(b.sets_lost, b2.sets_lost);
    }

    #[test]
    fn test_reverse_clamps_at_zero() {
        let mut a = player("a");
        let mut b = player("b");
        b.sets_won = 1;

        reverse(&mut a, &mut b, 2, 1);

        assert_eq!((a.played, a.sets_won, a.sets_lost, a.points), (0, 0, 0, 0));
        assert_eq!((b.played, b.sets_won, b.sets_lost, b.points), (0, 0, 0, 0));
    }

    #[test]
    fn test_legacy_reverse_uses_three_point_win() {
        let mut winner = player("w");
        let mut loser = player("l");
        winner.played = 1;
        winner.points = 3;
        loser.played = 1;

        reverse_legacy(&mut winner, &mut loser);

        assert_eq!((winner.played, winner.points), (0, 0));
        assert_eq!(loser.played, 0);
    }

    #[test]
    fn test_legacy_reverse_clamps_at_zero() {
        let mut winner = player("w");
        let mut loser = player("l");
        winner.points = 1;

        reverse_legacy(&mut winner, &mut loser);

        assert_eq!((winner.played, winner.points), (0, 0));
        assert_eq!(loser.played, 0);
    }
}
