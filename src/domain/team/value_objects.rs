use serde::Serialize;

/// Accumulated league statistics of a team
///
/// # Invariants
/// - Counters only ever grow, through [`TeamStats::with_result`]
/// - A result that would overflow any counter is refused as a whole
/// - Goal difference is derived, never stored
///
/// # Example
/// ```
/// use league_roster::domain::team::value_objects::TeamStats;
///
/// let stats = TeamStats::default().with_result(3, 1, 3).unwrap();
/// assert_eq!(stats.goal_difference(), 2);
///
/// assert!(stats.with_result(u32::MAX, 0, 3).is_none());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TeamStats {
    points: u32,
    goals_for: u32,
    goals_against: u32,
}

impl TeamStats {
    /// Running totals after one more match result
    ///
    /// Returns `None` when any counter would overflow; `self` is never
    /// modified, so callers can check every side before committing.
    pub fn with_result(&self, goals_scored: u32, goals_conceded: u32, points_earned: u32) -> Option<Self> {
        Some(Self {
            points: self.points.checked_add(points_earned)?,
            goals_for: self.goals_for.checked_add(goals_scored)?,
            goals_against: self.goals_against.checked_add(goals_conceded)?,
        })
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn goals_for(&self) -> u32 {
        self.goals_for
    }

    pub fn goals_against(&self) -> u32 {
        self.goals_against
    }

    pub fn goal_difference(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_stats_are_zero() {
        let stats = TeamStats::default();

        assert_eq!(stats.points(), 0);
        assert_eq!(stats.goals_for(), 0);
        assert_eq!(stats.goals_against(), 0);
        assert_eq!(stats.goal_difference(), 0);
    }

    #[test]
    fn results_accumulate() {
        let stats = TeamStats::default()
            .with_result(2, 0, 3)
            .and_then(|s| s.with_result(1, 1, 1))
            .and_then(|s| s.with_result(0, 4, 0))
            .unwrap();

        assert_eq!(stats.points(), 4);
        assert_eq!(stats.goals_for(), 3);
        assert_eq!(stats.goals_against(), 5);
        assert_eq!(stats.goal_difference(), -2);
    }

    #[test]
    fn overflowing_result_is_refused() {
        let near_limit = TeamStats::default().with_result(0, u32::MAX - 1, 0).unwrap();

        assert!(near_limit.with_result(0, 2, 0).is_none());
        assert!(near_limit.with_result(7, 1, 3).is_some());
        assert_eq!(near_limit.goals_against(), u32::MAX - 1);
    }
}
