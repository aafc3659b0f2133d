use std::sync::Arc;

use tokio::sync::Mutex;
use uuid::Uuid;

use super::events::LeagueEvent;
use super::league::{League, LeagueSnapshot};
use super::match_record::MatchRecord;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::player::Player;
use crate::domain::team::{Team, TeamEvent, TeamSnapshot};

/// Cloneable handle to a league shared between callers
///
/// Each method holds the lock for its whole body, so every operation is
/// atomic with respect to the others. Clones point at the same league.
#[derive(Debug, Clone)]
pub struct SharedLeague {
    id: Uuid,
    inner: Arc<Mutex<League>>,
}

impl SharedLeague {
    pub fn new(league: League) -> Self {
        Self {
            id: league.id(),
            inner: Arc::new(Mutex::new(league)),
        }
    }

    /// League id, readable without taking the lock
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub async fn name(&self) -> String {
        self.inner.lock().await.name().to_string()
    }

    /// Runs `op` and renders the league before the lock is released, so
    /// the returned view reflects exactly this change
    async fn apply<T>(
        &self,
        op: impl FnOnce(&mut League) -> DomainResult<T>,
    ) -> DomainResult<(T, LeagueSnapshot)> {
        let mut league = self.inner.lock().await;
        let outcome = op(&mut league)?;
        Ok((outcome, league.snapshot()))
    }

    pub async fn add_team(&self, team: Team) -> (LeagueEvent, LeagueSnapshot) {
        let mut league = self.inner.lock().await;
        let event = league.add_team(team);
        (event, league.snapshot())
    }

    pub async fn remove_team(&self, name: &str) -> DomainResult<(LeagueEvent, LeagueSnapshot)> {
        self.apply(|league| league.remove_team(name)).await
    }

    pub async fn team(&self, name: &str) -> DomainResult<TeamSnapshot> {
        self.inner
            .lock()
            .await
            .get_team(name)
            .map(Team::snapshot)
            .ok_or_else(|| DomainError::TeamNotFound(name.to_string()))
    }

    /// Logged matches of one team, oldest first
    pub async fn team_matches(&self, name: &str) -> DomainResult<Vec<MatchRecord>> {
        let league = self.inner.lock().await;
        if league.get_team(name).is_none() {
            return Err(DomainError::TeamNotFound(name.to_string()));
        }
        Ok(league.matches_for_team(name).cloned().collect())
    }

    pub async fn add_player(
        &self,
        team: &str,
        player: Player,
    ) -> DomainResult<(TeamEvent, LeagueSnapshot)> {
        self.apply(|league| {
            let team = league
                .get_team_mut(team)
                .ok_or_else(|| DomainError::TeamNotFound(team.to_string()))?;
            Ok(team.add_player(player))
        })
        .await
    }

    pub async fn remove_player(
        &self,
        team: &str,
        player: &str,
    ) -> DomainResult<(TeamEvent, LeagueSnapshot)> {
        self.apply(|league| {
            league
                .get_team_mut(team)
                .ok_or_else(|| DomainError::TeamNotFound(team.to_string()))?
                .remove_player(player)
        })
        .await
    }

    /// Runs `edit` against one player while holding the lock
    pub async fn edit_player<T>(
        &self,
        team: &str,
        player: &str,
        edit: impl FnOnce(&mut Player) -> T,
    ) -> DomainResult<(T, LeagueSnapshot)> {
        self.apply(|league| {
            let player = league
                .get_team_mut(team)
                .ok_or_else(|| DomainError::TeamNotFound(team.to_string()))?
                .get_player_mut(player)
                .ok_or_else(|| DomainError::PlayerNotFound(player.to_string()))?;
            Ok(edit(player))
        })
        .await
    }

    pub async fn record_match(
        &self,
        home_team: &str,
        away_team: &str,
        home_goals: u32,
        away_goals: u32,
    ) -> DomainResult<(LeagueEvent, LeagueSnapshot)> {
        self.apply(|league| league.record_match(home_team, away_team, home_goals, away_goals))
            .await
    }

    pub async fn standings(&self) -> Vec<TeamSnapshot> {
        self.inner.lock().await.standings()
    }

    pub async fn snapshot(&self) -> LeagueSnapshot {
        self.inner.lock().await.snapshot()
    }
}
