use async_trait::async_trait;

use crate::domain::StatusCheck;

use super::RepositoryError;

#[async_trait]
pub trait StatusCheckRepository: Send + Sync {
    async fn insert(&self, check: &StatusCheck) -> Result<(), RepositoryError>;

    /// Records in insertion order, after skipping `skip` and returning at most `limit`.
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<StatusCheck>, RepositoryError>;
}
