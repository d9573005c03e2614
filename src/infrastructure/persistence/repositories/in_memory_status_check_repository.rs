use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::{RepositoryError, StatusCheckRepository};
use crate::domain::StatusCheck;

/// Process-local store used when no database is configured, and in tests.
#[derive(Default)]
pub struct InMemoryStatusCheckRepository {
    checks: RwLock<Vec<StatusCheck>>,
}

impl InMemoryStatusCheckRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StatusCheckRepository for InMemoryStatusCheckRepository {
    async fn insert(&self, check: &StatusCheck) -> Result<(), RepositoryError> {
        self.checks.write().await.push(check.clone());
        Ok(())
    }

    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<StatusCheck>, RepositoryError> {
        let checks = self.checks.read().await;
        Ok(checks
            .iter()
            .skip(usize::try_from(skip).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .cloned()
            .collect())
    }
}
