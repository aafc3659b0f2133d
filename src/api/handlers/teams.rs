use serde::Deserialize;
use uuid::Uuid;

use super::{load_league, require_name};
use crate::api::errors::ApiError;
use crate::domain::league::LeagueSnapshot;
use crate::domain::repositories::LeagueRepository;
use crate::domain::team::{Team, TeamSnapshot};

/// Request body for creating a team
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamRequest {
    pub name: String,
    pub city: Option<String>,
    pub stadium: Option<String>,
}

impl From<CreateTeamRequest> for Team {
    fn from(req: CreateTeamRequest) -> Self {
        let mut team = Team::new(req.name);
        if let Some(city) = req.city {
            team = team.with_city(city);
        }
        if let Some(stadium) = req.stadium {
            team = team.with_stadium(stadium);
        }
        team
    }
}

/// Add a new team to a league
pub async fn create_team<R>(
    repo: &R,
    league_id: Uuid,
    req: CreateTeamRequest,
) -> Result<LeagueSnapshot, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    require_name("Team name", &req.name)?;
    let league = load_league(repo, league_id).await?;

    let (event, view) = league.add_team(Team::from(req)).await;
    tracing::info!(league_id = %league_id, event = ?event, "Team added");

    Ok(view)
}

/// Get a single team and its roster
pub async fn get_team<R>(repo: &R, league_id: Uuid, name: &str) -> Result<TeamSnapshot, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    let league = load_league(repo, league_id).await?;
    tracing::debug!(league_id = %league_id, team = name, "Team lookup");

    Ok(league.team(name).await?)
}

/// Remove a team and its roster from a league
pub async fn remove_team<R>(repo: &R, league_id: Uuid, name: &str) -> Result<LeagueSnapshot, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    let league = load_league(repo, league_id).await?;

    let (event, view) = league.remove_team(name).await.map_err(|e| {
        tracing::warn!(league_id = %league_id, team = name, error = %e, "Team removal rejected");
        ApiError::from(e)
    })?;
    tracing::info!(league_id = %league_id, event = ?event, "Team removed");

    Ok(view)
}
