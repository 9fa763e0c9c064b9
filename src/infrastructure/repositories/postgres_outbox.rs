use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::notification::{
    DeliveryChannel, JobId, JobStatus, NotificationDelivery, NotificationJob, OutboxRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresOutboxRepository {
    pool: PgPool,
}

impl PostgresOutboxRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct JobRow {
    id: i64,
    article_id: i64,
    status: String,
    enqueued_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl TryFrom<JobRow> for NotificationJob {
    type Error = DomainError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        Ok(NotificationJob {
            id: JobId(row.id),
            article_id: ArticleId::new(row.article_id)?,
            status: JobStatus::parse(&row.status)?,
            enqueued_at: row.enqueued_at,
            completed_at: row.completed_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct DeliveryRow {
    job_id: i64,
    article_id: i64,
    channel: String,
    recipient: Option<String>,
    succeeded: bool,
    error: Option<String>,
    attempted_at: DateTime<Utc>,
}

impl TryFrom<DeliveryRow> for NotificationDelivery {
    type Error = DomainError;

    fn try_from(row: DeliveryRow) -> Result<Self, Self::Error> {
        Ok(NotificationDelivery {
            job_id: JobId(row.job_id),
            article_id: ArticleId::new(row.article_id)?,
            channel: DeliveryChannel::parse(&row.channel)?,
            recipient: row.recipient,
            succeeded: row.succeeded,
            error: row.error,
            attempted_at: row.attempted_at,
        })
    }
}

#[async_trait]
impl OutboxRepository for PostgresOutboxRepository {
    async fn claim_pending(&self, limit: u32) -> DomainResult<Vec<NotificationJob>> {
        // A job is claimed by at most one dispatcher.
        let rows = sqlx::query_as::<_, JobRow>(
            "UPDATE notification_jobs SET status = 'running'
             WHERE id IN (
                 SELECT id FROM notification_jobs
                 WHERE status = 'pending'
                 ORDER BY id
                 LIMIT $1
                 FOR UPDATE SKIP LOCKED
             )
             RETURNING id, article_id, status, enqueued_at, completed_at",
        )
        .bind(i64::from(limit))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut jobs = rows
            .into_iter()
            .map(NotificationJob::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        jobs.sort_by_key(|job| job.id);
        Ok(jobs)
    }

    async fn record_delivery(&self, delivery: NotificationDelivery) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO notification_deliveries
                (job_id, article_id, channel, recipient, succeeded, error, attempted_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(delivery.job_id.0)
        .bind(i64::from(delivery.article_id))
        .bind(delivery.channel.as_str())
        .bind(delivery.recipient)
        .bind(delivery.succeeded)
        .bind(delivery.error)
        .bind(delivery.attempted_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn mark_completed(&self, job_id: JobId, at: DateTime<Utc>) -> DomainResult<()> {
        sqlx::query(
            "UPDATE notification_jobs SET status = 'completed', completed_at = $2 WHERE id = $1",
        )
        .bind(job_id.0)
        .bind(at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn deliveries_for(&self, job_id: JobId) -> DomainResult<Vec<NotificationDelivery>> {
        let rows = sqlx::query_as::<_, DeliveryRow>(
            "SELECT job_id, article_id, channel, recipient, succeeded, error, attempted_at
             FROM notification_deliveries
             WHERE job_id = $1
             ORDER BY id",
        )
        .bind(job_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(NotificationDelivery::try_from).collect()
    }

    async fn requeue_running(&self) -> DomainResult<u64> {
        let result =
            sqlx::query("UPDATE notification_jobs SET status = 'pending' WHERE status = 'running'")
                .execute(&self.pool)
                .await
                .map_err(map_sqlx)?;
        Ok(result.rows_affected())
    }
}
