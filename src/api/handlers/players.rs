use serde::Deserialize;
use uuid::Uuid;

use super::{load_league, require_name};
use crate::api::errors::ApiError;
use crate::domain::league::LeagueSnapshot;
use crate::domain::player::{CardKind, Player, Position};
use crate::domain::repositories::LeagueRepository;

/// Request body for signing a player to a team
#[derive(Debug, Clone, Deserialize)]
pub struct AddPlayerRequest {
    pub name: String,
    pub position: Position,
    pub pace: i32,
    pub shooting: i32,
    pub passing: i32,
    pub age: Option<u32>,
    pub nationality: Option<String>,
    pub jersey_number: Option<u32>,
}

impl From<AddPlayerRequest> for Player {
    fn from(req: AddPlayerRequest) -> Self {
        let mut player = Player::new(req.name, req.position, req.pace, req.shooting, req.passing);
        if let Some(age) = req.age {
            player = player.with_age(age);
        }
        if let Some(nationality) = req.nationality {
            player = player.with_nationality(nationality);
        }
        if let Some(jersey_number) = req.jersey_number {
            player = player.with_jersey_number(jersey_number);
        }
        player
    }
}

/// Request body for overwriting a player's skills
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateStatsRequest {
    pub pace: i32,
    pub shooting: i32,
    pub passing: i32,
}

/// Request body for the edit-player form
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileRequest {
    pub position: Position,
    pub age: u32,
    pub nationality: String,
    pub jersey_number: u32,
}

/// Request body for issuing a card; the kind arrives as raw text
#[derive(Debug, Clone, Deserialize)]
pub struct AddCardRequest {
    pub kind: String,
}

/// Add a player to a team's roster
pub async fn add_player<R>(
    repo: &R,
    league_id: Uuid,
    team: &str,
    req: AddPlayerRequest,
) -> Result<LeagueSnapshot, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    require_name("Player name", &req.name)?;
    let league = load_league(repo, league_id).await?;

    let (event, view) = league
        .add_player(team, Player::from(req))
        .await
        .map_err(|e| {
            tracing::warn!(league_id = %league_id, team, error = %e, "Player signing rejected");
            ApiError::from(e)
        })?;
    tracing::info!(league_id = %league_id, event = ?event, "Player added");

    Ok(view)
}

/// Remove a player from a team's roster
pub async fn remove_player<R>(
    repo: &R,
    league_id: Uuid,
    team: &str,
    player: &str,
) -> Result<LeagueSnapshot, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    let league = load_league(repo, league_id).await?;

    let (event, view) = league.remove_player(team, player).await.map_err(|e| {
        tracing::warn!(league_id = %league_id, team, player, error = %e, "Player removal rejected");
        ApiError::from(e)
    })?;
    tracing::info!(league_id = %league_id, event = ?event, "Player removed");

    Ok(view)
}

/// Overwrite pace, shooting and passing together
pub async fn update_player_stats<R>(
    repo: &R,
    league_id: Uuid,
    team: &str,
    player: &str,
    req: UpdateStatsRequest,
) -> Result<LeagueSnapshot, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    let league = load_league(repo, league_id).await?;

    let (rating, view) = league
        .edit_player(team, player, |p| {
            p.update_stats(req.pace, req.shooting, req.passing);
            p.overall_rating()
        })
        .await
        .map_err(|e| {
            tracing::warn!(league_id = %league_id, team, player, error = %e, "Stats update rejected");
            ApiError::from(e)
        })?;
    tracing::info!(league_id = %league_id, team, player, rating, "Player stats updated");

    Ok(view)
}

/// Replace position, age, nationality and jersey number
pub async fn update_player_profile<R>(
    repo: &R,
    league_id: Uuid,
    team: &str,
    player: &str,
    req: UpdateProfileRequest,
) -> Result<LeagueSnapshot, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    let league = load_league(repo, league_id).await?;

    let ((), view) = league
        .edit_player(team, player, |p| {
            p.update_profile(req.position, req.age, req.nationality, req.jersey_number)
        })
        .await
        .map_err(|e| {
            tracing::warn!(league_id = %league_id, team, player, error = %e, "Profile update rejected");
            ApiError::from(e)
        })?;
    tracing::info!(league_id = %league_id, team, player, "Player profile updated");

    Ok(view)
}

/// Mark a player injured or fit
pub async fn set_player_injury<R>(
    repo: &R,
    league_id: Uuid,
    team: &str,
    player: &str,
    is_injured: bool,
) -> Result<LeagueSnapshot, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    let league = load_league(repo, league_id).await?;

    let ((), view) = league
        .edit_player(team, player, |p| p.set_injury_status(is_injured))
        .await
        .map_err(|e| {
            tracing::warn!(league_id = %league_id, team, player, error = %e, "Injury update rejected");
            ApiError::from(e)
        })?;
    tracing::info!(league_id = %league_id, team, player, is_injured, "Injury status set");

    Ok(view)
}

/// Show a yellow or red card to a player
pub async fn add_player_card<R>(
    repo: &R,
    league_id: Uuid,
    team: &str,
    player: &str,
    req: AddCardRequest,
) -> Result<LeagueSnapshot, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    let kind = req.kind.parse::<CardKind>().map_err(|e| {
        tracing::warn!(kind = %req.kind, "Card rejected");
        ApiError::from(e)
    })?;
    let league = load_league(repo, league_id).await?;

    let ((yellow_cards, red_cards), view) = league
        .edit_player(team, player, |p| {
            p.add_card(kind);
            (p.yellow_cards(), p.red_cards())
        })
        .await
        .map_err(|e| {
            tracing::warn!(league_id = %league_id, team, player, error = %e, "Card rejected");
            ApiError::from(e)
        })?;
    tracing::info!(
        league_id = %league_id,
        team,
        player,
        card = %kind,
        yellow_cards,
        red_cards,
        "Card recorded"
    );

    Ok(view)
}
