use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::league::{League, SharedLeague};
use crate::domain::repositories::LeagueRepository;

/// In-memory implementation of LeagueRepository
///
/// Leagues live for the lifetime of the process. Nothing is written to
/// disk.
#[derive(Debug, Default)]
pub struct InMemoryLeagueRepository {
    leagues: RwLock<HashMap<Uuid, SharedLeague>>,
}

impl InMemoryLeagueRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeagueRepository for InMemoryLeagueRepository {
    async fn insert(&self, league: League) -> DomainResult<Uuid> {
        let handle = SharedLeague::new(league);
        let id = handle.id();
        self.leagues.write().await.insert(id, handle);

        tracing::debug!(league_id = %id, "League stored");
        Ok(id)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<SharedLeague>> {
        Ok(self.leagues.read().await.get(&id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<SharedLeague>> {
        let handles: Vec<SharedLeague> = self.leagues.read().await.values().cloned().collect();

        let mut named = Vec::with_capacity(handles.len());
        for handle in handles {
            named.push((handle.name().await, handle));
        }
        named.sort_by(|a, b| a.0.cmp(&b.0));

        Ok(named.into_iter().map(|(_, handle)| handle).collect())
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.leagues
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::LeagueNotFound(id))
    }
}
