// Ordering of teams in the league table.
use std::cmp::Ordering;

use crate::domain::team::TeamSnapshot;

type CmpFunc = fn(&TeamSnapshot, &TeamSnapshot) -> Ordering;

// Higher is better for both criteria.
fn compare_points(a: &TeamSnapshot, b: &TeamSnapshot) -> Ordering {
    b.stats.points.cmp(&a.stats.points)
}

fn compare_goal_difference(a: &TeamSnapshot, b: &TeamSnapshot) -> Ordering {
    b.stats.goal_difference.cmp(&a.stats.goal_difference)
}

// Deliberately no goals-scored key: remaining ties keep insertion order.
const CRITERIA: [CmpFunc; 2] = [compare_points, compare_goal_difference];

fn compare(a: &TeamSnapshot, b: &TeamSnapshot) -> Ordering {
    CRITERIA
        .iter()
        .map(|criterion| criterion(a, b))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Sorts team snapshots into table order
///
/// `sort_by` is stable, so teams level on points and goal difference stay
/// in the order they were added to the league.
pub fn rank(mut teams: Vec<TeamSnapshot>) -> Vec<TeamSnapshot> {
    teams.sort_by(compare);
    teams
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::Team;

    fn snapshot(name: &str, scored: u32, conceded: u32, points: u32) -> TeamSnapshot {
        let mut team = Team::new(name);
        team.update_stats(scored, conceded, points).unwrap();
        team.snapshot()
    }

    fn names(table: &[TeamSnapshot]) -> Vec<&str> {
        table.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn points_then_goal_difference() {
        let table = rank(vec![
            snapshot("C", 1, 1, 1),
            snapshot("B", 1, 2, 3),
            snapshot("A", 3, 1, 3),
        ]);

        assert_eq!(names(&table), vec!["A", "B", "C"]);
    }

    #[test]
    fn full_ties_keep_insertion_order() {
        // same points and goal difference, different goals scored
        let table = rank(vec![
            snapshot("First", 1, 0, 3),
            snapshot("Second", 4, 3, 3),
            snapshot("Third", 2, 1, 3),
        ]);

        assert_eq!(names(&table), vec!["First", "Second", "Third"]);
    }

    #[test]
    fn empty_table() {
        assert!(rank(Vec::new()).is_empty());
    }
}
