use crate::domain::errors::DomainResult;
use crate::domain::notification::entity::{NotificationDelivery, NotificationJob};
use crate::domain::notification::value_objects::JobId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Jobs are inserted by `ArticleWriteRepository::record_review` inside the
/// approval transaction; this trait covers the dispatcher side.
#[async_trait]
pub trait OutboxRepository: Send + Sync {
    /// Moves up to `limit` pending jobs to running, oldest first, and returns them.
    async fn claim_pending(&self, limit: u32) -> DomainResult<Vec<NotificationJob>>;

    async fn record_delivery(&self, delivery: NotificationDelivery) -> DomainResult<()>;

    async fn mark_completed(&self, job_id: JobId, at: DateTime<Utc>) -> DomainResult<()>;

    /// Deliveries already recorded for a job, so a reclaimed job skips them.
    async fn deliveries_for(&self, job_id: JobId) -> DomainResult<Vec<NotificationDelivery>>;

    /// Returns every running job to pending. Only safe while no dispatcher
    /// is mid-batch, i.e. at startup.
    async fn requeue_running(&self) -> DomainResult<u64>;
}
