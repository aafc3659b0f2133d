use serde::Serialize;
use uuid::Uuid;

use super::events::LeagueEvent;
use super::match_record::MatchRecord;
use super::standings;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::team::{Team, TeamSnapshot};

/// League aggregate root
///
/// Owns an ordered list of teams and an append-only log of recorded
/// matches. All lookups go top-down by team name.
///
/// # Invariants
/// - Team statistics change only through [`League::record_match`]
/// - `record_match` is all-or-nothing: both teams are updated and the
///   result logged, or nothing changes
/// - Team order is insertion order and breaks full ties in the standings
///
/// # Example
/// ```
/// use league_roster::domain::league::League;
/// use league_roster::domain::team::Team;
///
/// let mut league = League::new("Premier League").with_country("England");
/// league.add_team(Team::new("Arsenal"));
/// league.add_team(Team::new("Chelsea"));
///
/// league.record_match("Arsenal", "Chelsea", 3, 1).expect("both teams exist");
///
/// let table = league.standings();
/// assert_eq!(table[0].name, "Arsenal");
/// assert_eq!(table[0].stats.points, 3);
/// ```
#[derive(Debug, Clone)]
pub struct League {
    id: Uuid,
    name: String,
    country: String,
    teams: Vec<Team>,
    matches: Vec<MatchRecord>,
}

impl League {
    pub const DEFAULT_COUNTRY: &'static str = "Unknown";

    /// Creates an empty league in an unknown country
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            country: Self::DEFAULT_COUNTRY.to_string(),
            teams: Vec::new(),
            matches: Vec::new(),
        }
    }

    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Appends a team to the league
    pub fn add_team(&mut self, team: Team) -> LeagueEvent {
        let event = LeagueEvent::TeamAdded {
            league_id: self.id,
            team: team.name().to_string(),
        };
        self.teams.push(team);
        event
    }

    /// Removes the first team with the given name
    ///
    /// # Returns
    /// * `Ok(LeagueEvent::TeamRemoved)` - Team and its roster were dropped
    /// * `Err(DomainError::TeamNotFound)` - No team matched; league unchanged
    pub fn remove_team(&mut self, name: &str) -> DomainResult<LeagueEvent> {
        let index = self.index_of(name)?;
        let removed = self.teams.remove(index);

        Ok(LeagueEvent::TeamRemoved {
            league_id: self.id,
            team: removed.name().to_string(),
        })
    }

    pub fn get_team(&self, name: &str) -> Option<&Team> {
        self.teams.iter().find(|t| t.name() == name)
    }

    pub fn get_team_mut(&mut self, name: &str) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.name() == name)
    }

    /// Applies a match result to both teams and logs it
    ///
    /// # Business Rules
    /// - Both teams must exist before anything is mutated
    /// - A team cannot play itself
    /// - Win earns 3 points, draw 1 point each, loss 0
    ///
    /// # Returns
    /// * `Ok(LeagueEvent::MatchRecorded)` - Carries the appended log entry
    /// * `Err(DomainError::TeamNotFound)` - Either name is unknown
    /// * `Err(DomainError::InvalidArgument)` - Home and away are the same team,
    ///   or a team's totals would overflow
    pub fn record_match(
        &mut self,
        home_team: &str,
        away_team: &str,
        home_goals: u32,
        away_goals: u32,
    ) -> DomainResult<LeagueEvent> {
        let home = self.index_of(home_team)?;
        let away = self.index_of(away_team)?;
        if home == away {
            return Err(DomainError::InvalidArgument(format!(
                "{} cannot play against itself",
                home_team
            )));
        }

        let record = MatchRecord::new(home_team, away_team, home_goals, away_goals);

        // Away totals are checked before the home side is touched, so a
        // refusal on either side leaves both teams as they were.
        let away_stats =
            self.teams[away].stats_after(away_goals, home_goals, record.away_outcome().points())?;
        self.teams[home].update_stats(home_goals, away_goals, record.home_outcome().points())?;
        self.teams[away].commit_stats(away_stats);
        self.matches.push(record.clone());

        Ok(LeagueEvent::MatchRecorded {
            league_id: self.id,
            record,
        })
    }

    /// All teams in table order: points, then goal difference, then
    /// insertion order
    pub fn standings(&self) -> Vec<TeamSnapshot> {
        standings::rank(self.teams.iter().map(TeamSnapshot::from).collect())
    }

    /// Logged matches in which the named team played, oldest first
    pub fn matches_for_team<'a>(&'a self, team: &'a str) -> impl Iterator<Item = &'a MatchRecord> {
        self.matches.iter().filter(move |m| m.involves(team))
    }

    fn index_of(&self, name: &str) -> DomainResult<usize> {
        self.teams
            .iter()
            .position(|t| t.name() == name)
            .ok_or_else(|| DomainError::TeamNotFound(name.to_string()))
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn matches(&self) -> &[MatchRecord] {
        &self.matches
    }

    pub fn snapshot(&self) -> LeagueSnapshot {
        LeagueSnapshot::from(self)
    }
}

/// Serializable view of a league, everything a view needs to redraw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeagueSnapshot {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub teams: Vec<TeamSnapshot>,
    pub matches: Vec<MatchRecord>,
    pub standings: Vec<TeamSnapshot>,
}

impl From<&League> for LeagueSnapshot {
    fn from(league: &League) -> Self {
        Self {
            id: league.id(),
            name: league.name().to_string(),
            country: league.country().to_string(),
            teams: league.teams().iter().map(TeamSnapshot::from).collect(),
            matches: league.matches().to_vec(),
            standings: league.standings(),
        }
    }
}
