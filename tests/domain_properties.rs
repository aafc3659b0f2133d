//! Property checks for the league model
//!
//! Exercises the aggregate through its public API only: clamping, rating,
//! card accumulation, roster round trips, match results and the table.

use league_roster::domain::errors::DomainError;
use league_roster::domain::league::League;
use league_roster::domain::player::{CardKind, Player, Position, Skill};
use league_roster::domain::team::Team;

fn league_of(names: &[&str]) -> League {
    let mut league = League::new("Test League");
    for name in names {
        league.add_team(Team::new(*name));
    }
    league
}

fn table(league: &League) -> Vec<(String, u32, i64)> {
    league
        .standings()
        .into_iter()
        .map(|t| (t.name, t.stats.points, t.stats.goal_difference))
        .collect()
}

#[test]
fn clamp_stays_in_range_and_is_idempotent() {
    for raw in -1000..=1000 {
        let once = Skill::new(raw);
        assert!((1..=10).contains(&once.value()));
        assert_eq!(Skill::new(i32::from(once.value())), once);
    }
}

#[test]
fn rating_tracks_skills_through_updates() {
    let mut player = Player::new("Tester", Position::Defender, 1, 1, 1);
    for (pace, shooting, passing) in [(3, 9, 4), (10, 10, 10), (0, 50, 5), (2, 3, 3)] {
        player.update_stats(pace, shooting, passing);
        let skills = player.skills();
        let sum = f64::from(skills.pace.value())
            + f64::from(skills.shooting.value())
            + f64::from(skills.passing.value());
        assert_eq!(f64::from(player.overall_rating()), (sum / 3.0).round());
    }
}

#[test]
fn yellow_cards_carry_into_reds() {
    let mut player = Player::new("Hothead", Position::Midfielder, 5, 5, 5);
    for _ in 0..5 {
        player.add_card(CardKind::Yellow);
    }

    assert_eq!(player.yellow_cards(), 1);
    assert_eq!(player.red_cards(), 2);
}

#[test]
fn add_then_remove_player_round_trips() {
    let mut team = Team::new("Roster FC");
    for (i, name) in ["One", "Two", "Three"].iter().enumerate() {
        team.add_player(Player::new(*name, Position::Forward, 5, 5, 5).with_jersey_number(i as u32));
    }
    let before = team.snapshot().players;

    team.add_player(Player::new("Trialist", Position::Goalkeeper, 4, 2, 6));
    team.remove_player("Trialist").unwrap();

    assert_eq!(team.snapshot().players, before);
}

#[test]
fn home_win_three_one() {
    let mut league = league_of(&["A", "B"]);
    league.record_match("A", "B", 3, 1).unwrap();

    let a = league.get_team("A").unwrap();
    let b = league.get_team("B").unwrap();
    assert_eq!((a.points(), a.goals_for(), a.goals_against()), (3, 3, 1));
    assert_eq!((b.points(), b.goals_for(), b.goals_against()), (0, 1, 3));
    assert_eq!(league.matches().len(), 1);
}

#[test]
fn two_two_draw() {
    let mut league = league_of(&["A", "B"]);
    league.record_match("A", "B", 2, 2).unwrap();

    for name in ["A", "B"] {
        let team = league.get_team(name).unwrap();
        assert_eq!((team.points(), team.goals_for(), team.goals_against()), (1, 2, 2));
    }
}

#[test]
fn unknown_team_leaves_everything_unchanged() {
    let mut league = league_of(&["A", "B"]);
    league.record_match("A", "B", 1, 0).unwrap();
    let before = table(&league);

    let result = league.record_match("A", "Missing", 5, 0);

    assert_eq!(result, Err(DomainError::TeamNotFound("Missing".to_string())));
    assert_eq!(table(&league), before);
    assert_eq!(league.matches().len(), 1);
}

#[test]
fn result_past_counter_limit_is_refused_whole() {
    let mut league = league_of(&["A", "B", "C"]);
    league.record_match("C", "B", u32::MAX, 0).unwrap();
    let before = table(&league);

    let result = league.record_match("A", "B", 1, 0);

    assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
    assert_eq!(table(&league), before);
    let a = league.get_team("A").unwrap();
    assert_eq!((a.points(), a.goals_for(), a.goals_against()), (0, 0, 0));
    assert_eq!(league.get_team("B").unwrap().goals_against(), u32::MAX);
    assert_eq!(league.matches().len(), 1);
}

#[test]
fn standings_points_then_goal_difference_then_insertion() {
    // A: 3 pts gd +2, B: 3 pts gd -1, C: 1 pt gd 0, D padding
    let mut league = league_of(&["C", "B", "A", "D"]);
    league.record_match("A", "D", 2, 0).unwrap();
    league.record_match("B", "D", 3, 1).unwrap();
    league.record_match("D", "B", 3, 0).unwrap();
    league.record_match("C", "D", 1, 1).unwrap();

    let rows = table(&league);
    let position = |name: &str| rows.iter().position(|r| r.0 == name).unwrap();

    assert_eq!(rows[position("A")], ("A".to_string(), 3, 2));
    assert_eq!(rows[position("B")], ("B".to_string(), 3, -1));
    assert_eq!(rows[position("C")], ("C".to_string(), 1, 0));
    assert!(position("A") < position("B"));
    assert!(position("B") < position("C"));
}

#[test]
fn full_ties_keep_insertion_order() {
    let mut league = league_of(&["Late", "Early", "Middle"]);
    league.record_match("Late", "Early", 1, 1).unwrap();

    let names: Vec<String> = table(&league).into_iter().map(|r| r.0).collect();
    assert_eq!(names, vec!["Late", "Early", "Middle"]);
}

#[test]
fn failed_removals_leave_collections_unchanged() {
    let mut league = league_of(&["A", "B", "C"]);
    league
        .get_team_mut("B")
        .unwrap()
        .add_player(Player::new("Only", Position::Defender, 6, 6, 6));

    assert_eq!(
        league.remove_team("Z").unwrap_err(),
        DomainError::TeamNotFound("Z".to_string())
    );
    let names: Vec<&str> = league.teams().iter().map(Team::name).collect();
    assert_eq!(names, vec!["A", "B", "C"]);

    let team = league.get_team_mut("B").unwrap();
    assert!(team.remove_player("Nobody").unwrap_err().is_not_found());
    assert_eq!(team.len(), 1);
}
