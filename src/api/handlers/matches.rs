use serde::Deserialize;
use uuid::Uuid;

use super::load_league;
use crate::api::errors::ApiError;
use crate::domain::league::{LeagueEvent, LeagueSnapshot, MatchRecord};
use crate::domain::repositories::LeagueRepository;

/// Request body for recording a final score
#[derive(Debug, Clone, Deserialize)]
pub struct RecordMatchRequest {
    pub home_team: String,
    pub away_team: String,
    pub home_goals: u32,
    pub away_goals: u32,
}

/// Record a result, update the table, and append to the match log
pub async fn record_match<R>(
    repo: &R,
    league_id: Uuid,
    req: RecordMatchRequest,
) -> Result<LeagueSnapshot, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    let league = load_league(repo, league_id).await?;

    let (event, view) = league
        .record_match(&req.home_team, &req.away_team, req.home_goals, req.away_goals)
        .await
        .map_err(|e| {
            tracing::warn!(
                league_id = %league_id,
                home = %req.home_team,
                away = %req.away_team,
                error = %e,
                "Match result rejected"
            );
            ApiError::from(e)
        })?;

    if let LeagueEvent::MatchRecorded { record, .. } = &event {
        tracing::info!(
            league_id = %league_id,
            match_id = %record.id,
            home = %record.home_team,
            away = %record.away_team,
            home_goals = record.home_goals,
            away_goals = record.away_goals,
            "Match recorded"
        );
    }

    Ok(view)
}

/// Get the logged matches of one team, oldest first
pub async fn get_team_matches<R>(
    repo: &R,
    league_id: Uuid,
    team: &str,
) -> Result<Vec<MatchRecord>, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    let league = load_league(repo, league_id).await?;
    tracing::debug!(league_id = %league_id, team, "Team match log lookup");

    Ok(league.team_matches(team).await?)
}
