use serde::Serialize;

use super::events::TeamEvent;
use super::value_objects::TeamStats;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::player::{Player, PlayerSnapshot};

/// Team aggregate
///
/// Owns an ordered roster of players. Players are looked up by name and
/// the first match wins when names collide.
///
/// # Invariants
/// - Roster order is insertion order
/// - Statistics change only through [`Team::update_stats`], which is only
///   reachable from `League::record_match`
/// - Failed removals leave the roster untouched
///
/// # Example
/// ```
/// use league_roster::domain::player::{Player, Position};
/// use league_roster::domain::team::Team;
///
/// let mut team = Team::new("Arsenal").with_city("London");
/// team.add_player(Player::new("Bukayo Saka", Position::Forward, 9, 8, 8));
///
/// assert_eq!(team.len(), 1);
/// assert!(team.get_player("Bukayo Saka").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    name: String,
    city: String,
    stadium: String,
    players: Vec<Player>,
    stats: TeamStats,
}

impl Team {
    pub const DEFAULT_CITY: &'static str = "Unknown";
    pub const DEFAULT_STADIUM: &'static str = "Unknown";

    /// Creates an empty team with unknown city and stadium
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            city: Self::DEFAULT_CITY.to_string(),
            stadium: Self::DEFAULT_STADIUM.to_string(),
            players: Vec::new(),
            stats: TeamStats::default(),
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_stadium(mut self, stadium: impl Into<String>) -> Self {
        self.stadium = stadium.into();
        self
    }

    /// Appends a player to the end of the roster
    pub fn add_player(&mut self, player: Player) -> TeamEvent {
        let event = TeamEvent::PlayerAdded {
            team: self.name.clone(),
            player: player.name().to_string(),
        };
        self.players.push(player);
        event
    }

    /// Removes the first player with the given name
    ///
    /// # Returns
    /// * `Ok(TeamEvent::PlayerRemoved)` - Player was removed
    /// * `Err(DomainError::PlayerNotFound)` - No player matched; roster unchanged
    pub fn remove_player(&mut self, name: &str) -> DomainResult<TeamEvent> {
        let index = self
            .position_of(name)
            .ok_or_else(|| DomainError::PlayerNotFound(name.to_string()))?;

        let removed = self.players.remove(index);

        Ok(TeamEvent::PlayerRemoved {
            team: self.name.clone(),
            player: removed.name().to_string(),
        })
    }

    pub fn get_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn get_player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name() == name)
    }

    /// Adds one match result to the team's totals
    ///
    /// # Returns
    /// * `Err(DomainError::InvalidArgument)` - A counter would overflow; stats unchanged
    pub(crate) fn update_stats(
        &mut self,
        goals_scored: u32,
        goals_conceded: u32,
        points_earned: u32,
    ) -> DomainResult<()> {
        self.stats = self.stats_after(goals_scored, goals_conceded, points_earned)?;
        Ok(())
    }

    /// Totals the team would have after one more result, without applying them
    pub(crate) fn stats_after(
        &self,
        goals_scored: u32,
        goals_conceded: u32,
        points_earned: u32,
    ) -> DomainResult<TeamStats> {
        self.stats
            .with_result(goals_scored, goals_conceded, points_earned)
            .ok_or_else(|| {
                DomainError::InvalidArgument(format!("{} statistics would overflow", self.name))
            })
    }

    /// Installs totals previously produced by [`Team::stats_after`]
    pub(crate) fn commit_stats(&mut self, stats: TeamStats) {
        self.stats = stats;
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| p.name() == name)
    }

    // ===== Getters =====

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn stadium(&self) -> &str {
        &self.stadium
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn stats(&self) -> TeamStats {
        self.stats
    }

    pub fn points(&self) -> u32 {
        self.stats.points()
    }

    pub fn goals_for(&self) -> u32 {
        self.stats.goals_for()
    }

    pub fn goals_against(&self) -> u32 {
        self.stats.goals_against()
    }

    pub fn goal_difference(&self) -> i64 {
        self.stats.goal_difference()
    }

    /// Mean overall rating of the roster, `None` when nobody is signed
    pub fn average_rating(&self) -> Option<f64> {
        if self.players.is_empty() {
            return None;
        }
        let total: u32 = self
            .players
            .iter()
            .map(|p| u32::from(p.overall_rating()))
            .sum();
        Some(f64::from(total) / self.players.len() as f64)
    }

    pub fn snapshot(&self) -> TeamSnapshot {
        TeamSnapshot::from(self)
    }
}

/// Serializable view of a team and its roster
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSnapshot {
    pub name: String,
    pub city: String,
    pub stadium: String,
    pub players: Vec<PlayerSnapshot>,
    pub average_rating: Option<f64>,
    pub stats: TeamStatsSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamStatsSnapshot {
    pub points: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
}

impl From<&Team> for TeamSnapshot {
    fn from(team: &Team) -> Self {
        Self {
            name: team.name().to_string(),
            city: team.city().to_string(),
            stadium: team.stadium().to_string(),
            players: team.players().iter().map(PlayerSnapshot::from).collect(),
            average_rating: team.average_rating(),
            stats: TeamStatsSnapshot {
                points: team.points(),
                goals_for: team.goals_for(),
                goals_against: team.goals_against(),
                goal_difference: team.goal_difference(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::player::Position;

    fn roster() -> Team {
        let mut team = Team::new("Arsenal")
            .with_city("London")
            .with_stadium("Emirates Stadium");
        team.add_player(Player::new("David Raya", Position::Goalkeeper, 5, 2, 7));
        team.add_player(Player::new("William Saliba", Position::Defender, 7, 3, 7));
        team.add_player(Player::new("Bukayo Saka", Position::Forward, 9, 8, 8));
        team
    }

    fn names(team: &Team) -> Vec<&str> {
        team.players().iter().map(Player::name).collect()
    }

    #[test]
    fn new_team_uses_defaults() {
        let team = Team::new("Brentford");

        assert_eq!(team.name(), "Brentford");
        assert_eq!(team.city(), "Unknown");
        assert_eq!(team.stadium(), "Unknown");
        assert!(team.is_empty());
        assert_eq!(team.stats(), TeamStats::default());
    }

    #[test]
    fn add_player_preserves_insertion_order() {
        let team = roster();
        assert_eq!(names(&team), vec!["David Raya", "William Saliba", "Bukayo Saka"]);
    }

    #[test]
    fn add_player_generates_event() {
        let mut team = Team::new("Arsenal");
        let event = team.add_player(Player::new("Ben White", Position::Defender, 6, 4, 6));

        assert_eq!(
            event,
            TeamEvent::PlayerAdded {
                team: "Arsenal".to_string(),
                player: "Ben White".to_string(),
            }
        );
    }

    #[test]
    fn add_then_remove_restores_roster() {
        let mut team = roster();
        let before = team.players().to_vec();

        team.add_player(Player::new("Kai Havertz", Position::Forward, 7, 7, 7));
        team.remove_player("Kai Havertz").unwrap();

        assert_eq!(team.players(), before.as_slice());
    }

    #[test]
    fn remove_missing_player_leaves_roster_unchanged() {
        let mut team = roster();
        let before = team.players().to_vec();

        let result = team.remove_player("Thierry Henry");

        assert_eq!(
            result,
            Err(DomainError::PlayerNotFound("Thierry Henry".to_string()))
        );
        assert_eq!(team.players(), before.as_slice());
    }

    #[test]
    fn remove_takes_first_match_on_duplicate_names() {
        let mut team = Team::new("Twins FC");
        team.add_player(Player::new("Smith", Position::Forward, 9, 9, 9));
        team.add_player(Player::new("Smith", Position::Defender, 2, 2, 2));

        team.remove_player("Smith").unwrap();

        assert_eq!(team.len(), 1);
        assert_eq!(team.players()[0].position(), Position::Defender);
    }

    #[test]
    fn get_player_returns_none_when_absent() {
        let team = roster();

        assert!(team.get_player("Bukayo Saka").is_some());
        assert!(team.get_player("bukayo saka").is_none());
    }

    #[test]
    fn get_player_mut_edits_in_place() {
        let mut team = roster();
        team.get_player_mut("William Saliba")
            .unwrap()
            .set_injury_status(true);

        assert!(team.get_player("William Saliba").unwrap().is_injured());
    }

    #[test]
    fn update_stats_accumulates() {
        let mut team = roster();
        team.update_stats(3, 1, 3).unwrap();
        team.update_stats(0, 2, 0).unwrap();

        assert_eq!(team.points(), 3);
        assert_eq!(team.goals_for(), 3);
        assert_eq!(team.goals_against(), 3);
        assert_eq!(team.goal_difference(), 0);
    }

    #[test]
    fn average_rating_over_roster() {
        // ratings 5, 6, 8
        let team = roster();
        let average = team.average_rating().unwrap();
        assert!((average - 19.0 / 3.0).abs() < f64::EPSILON);

        assert_eq!(Team::new("Empty").average_rating(), None);
    }

    #[test]
    fn snapshot_includes_players_and_stats() {
        let mut team = roster();
        team.update_stats(2, 5, 0).unwrap();
        let snapshot = team.snapshot();

        assert_eq!(snapshot.name, "Arsenal");
        assert_eq!(snapshot.city, "London");
        assert_eq!(snapshot.stadium, "Emirates Stadium");
        assert_eq!(snapshot.players.len(), 3);
        assert_eq!(snapshot.players[2].name, "Bukayo Saka");
        assert_eq!(snapshot.stats.goal_difference, -3);
        assert!(snapshot.average_rating.is_some());
        assert_eq!(Team::new("Empty").snapshot().average_rating, None);
    }

    #[test]
    fn overflowing_update_leaves_stats_unchanged() {
        let mut team = Team::new("Goal Machine");
        team.update_stats(u32::MAX, 0, 3).unwrap();
        let before = team.stats();

        let result = team.update_stats(1, 0, 3);

        assert!(matches!(result, Err(DomainError::InvalidArgument(_))));
        assert_eq!(team.stats(), before);
    }
}
