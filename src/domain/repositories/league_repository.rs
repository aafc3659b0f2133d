use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::DomainResult;
use crate::domain::league::{League, SharedLeague};

/// Repository trait for League aggregates
///
/// Holds the leagues of a running session and hands out shared handles,
/// so the presentation layer never keeps a league in ambient global state.
#[async_trait]
pub trait LeagueRepository: Send + Sync {
    /// Store a new league and return its id
    async fn insert(&self, league: League) -> DomainResult<Uuid>;

    /// Find a league handle by its ID
    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<SharedLeague>>;

    /// All stored leagues, ordered by name
    async fn list(&self) -> DomainResult<Vec<SharedLeague>>;

    /// Delete a league by ID
    async fn delete(&self, id: Uuid) -> DomainResult<()>;
}
