use thiserror::Error;
use uuid::Uuid;

/// Errors raised by the league/team/player aggregates
///
/// Every failure is local and recoverable: operations that return one of
/// these leave the aggregate exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("League not found: {0}")]
    LeagueNotFound(Uuid),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl DomainError {
    /// Returns true for any lookup/removal miss, regardless of entity kind
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DomainError::TeamNotFound(_)
                | DomainError::PlayerNotFound(_)
                | DomainError::LeagueNotFound(_)
        )
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
