use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{RepositoryError, StatusCheckRepository};
use crate::domain::{StatusCheck, StatusCheckId};

pub struct PgStatusCheckRepository {
    pool: PgPool,
}

impl PgStatusCheckRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct StatusCheckRow {
    id: Uuid,
    client_name: String,
    recorded_at: DateTime<Utc>,
}

impl From<StatusCheckRow> for StatusCheck {
    fn from(row: StatusCheckRow) -> Self {
        Self {
            id: StatusCheckId::from_uuid(row.id),
            client_name: row.client_name,
            timestamp: row.recorded_at,
        }
    }
}

#[async_trait]
impl StatusCheckRepository for PgStatusCheckRepository {
    #[instrument(skip(self, check), fields(status_check_id = %check.id.as_uuid()))]
    async fn insert(&self, check: &StatusCheck) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO status_checks (id, client_name, recorded_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(check.id.as_uuid())
        .bind(&check.client_name)
        .bind(check.timestamp)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list(&self, skip: u64, limit: u64) -> Result<Vec<StatusCheck>, RepositoryError> {
        let rows = sqlx::query_as::<_, StatusCheckRow>(
            r#"
            SELECT id, client_name, recorded_at
            FROM status_checks
            ORDER BY seq ASC
            OFFSET $1
            LIMIT $2
            "#,
        )
        .bind(i64::try_from(skip).unwrap_or(i64::MAX))
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))?;

        Ok(rows.into_iter().map(StatusCheck::from).collect())
    }
}
