// Request handlers: one user action, one call, one refreshed view

pub mod leagues;
pub mod matches;
pub mod players;
pub mod teams;

use uuid::Uuid;

use crate::api::errors::ApiError;
use crate::domain::league::SharedLeague;
use crate::domain::repositories::LeagueRepository;

/// Resolves a league handle or fails with Not Found
pub(crate) async fn load_league<R>(repo: &R, id: Uuid) -> Result<SharedLeague, ApiError>
where
    R: LeagueRepository + ?Sized,
{
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("League not found: {}", id)))
}

/// Rejects blank names before they reach the domain
pub(crate) fn require_name(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::bad_request(format!("{} cannot be empty", field)));
    }
    Ok(())
}
