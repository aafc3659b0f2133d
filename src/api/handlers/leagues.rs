use serde::Deserialize;
use uuid::Uuid;

use super::{load_league, require_name};
use crate::api::errors::ApiError;
use crate::domain::league::{League, LeagueSnapshot};
use crate::domain::repositories::LeagueRepository;
use crate::domain::team::TeamSnapshot;

/// Request body for creating a league
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLeagueRequest {
    pub name: String,
    pub country: Option<String>,
}

/// Create a new, empty league
pub async fn create_league<R>(repo: &R, req: CreateLeagueRequest) -> Result<LeagueSnapshot, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    require_name("League name", &req.name)?;

    let mut league = League::new(req.name);
    if let Some(country) = req.country {
        league = league.with_country(country);
    }

    let id = repo.insert(league).await?;
    tracing::info!(league_id = %id, "League created");

    get_league(repo, id).await
}

/// Get the full snapshot of a league
pub async fn get_league<R>(repo: &R, id: Uuid) -> Result<LeagueSnapshot, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    Ok(load_league(repo, id).await?.snapshot().await)
}

/// Get every league in the session, ordered by name
pub async fn list_leagues<R>(repo: &R) -> Result<Vec<LeagueSnapshot>, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    let mut snapshots = Vec::new();
    for handle in repo.list().await? {
        snapshots.push(handle.snapshot().await);
    }
    Ok(snapshots)
}

/// Delete a league together with its teams and match log
pub async fn delete_league<R>(repo: &R, id: Uuid) -> Result<(), ApiError>
where
    R: LeagueRepository + ?Sized,
{
    repo.delete(id).await.map_err(|e| {
        tracing::warn!(league_id = %id, error = %e, "League delete rejected");
        ApiError::from(e)
    })?;

    tracing::info!(league_id = %id, "League deleted");
    Ok(())
}

/// Get the league table
pub async fn get_standings<R>(repo: &R, id: Uuid) -> Result<Vec<TeamSnapshot>, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    Ok(load_league(repo, id).await?.standings().await)
}
