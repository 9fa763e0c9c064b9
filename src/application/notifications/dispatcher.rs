// src/application/notifications/dispatcher.rs
use std::{collections::HashSet, sync::Arc};

use tokio::sync::Notify;

use super::message::ArticleAnnouncement;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{
            notifier::{EmailSender, SocialPoster},
            time::Clock,
        },
    },
    domain::{
        article::ArticleReadRepository,
        notification::{DeliveryChannel, NotificationDelivery, NotificationJob, OutboxRepository},
        publisher::PublisherRepository,
        subscription::SubscriptionRepository,
        user::{User, UserRepository},
    },
};

const CLAIM_BATCH: u32 = 16;

/// Wakes the dispatcher. A wake with no waiter is remembered until the next wait.
#[derive(Clone, Default)]
pub struct DispatchSignal(Arc<Notify>);

impl DispatchSignal {
    pub fn wake(&self) {
        self.0.notify_one();
    }

    pub async fn notified(&self) {
        self.0.notified().await;
    }
}

/// Drains the notification outbox. Each job is attempted exactly once per
/// channel; failures are recorded and logged, never retried.
pub struct NotificationDispatcher {
    outbox: Arc<dyn OutboxRepository>,
    articles: Arc<dyn ArticleReadRepository>,
    users: Arc<dyn UserRepository>,
    publishers: Arc<dyn PublisherRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
    email: Option<Arc<dyn EmailSender>>,
    social: Option<Arc<dyn SocialPoster>>,
    clock: Arc<dyn Clock>,
    site_url: String,
    signal: DispatchSignal,
}

impl NotificationDispatcher {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        outbox: Arc<dyn OutboxRepository>,
        articles: Arc<dyn ArticleReadRepository>,
        users: Arc<dyn UserRepository>,
        publishers: Arc<dyn PublisherRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        email: Option<Arc<dyn EmailSender>>,
        social: Option<Arc<dyn SocialPoster>>,
        clock: Arc<dyn Clock>,
        site_url: impl Into<String>,
    ) -> Self {
        Self {
            outbox,
            articles,
            users,
            publishers,
            subscriptions,
            email,
            social,
            clock,
            site_url: site_url.into(),
            signal: DispatchSignal::default(),
        }
    }

    pub fn signal(&self) -> DispatchSignal {
        self.signal.clone()
    }

    /// Puts jobs left running by an interrupted process back in the queue.
    /// Call once before the first `run_pending`.
    pub async fn recover(&self) -> ApplicationResult<u64> {
        let requeued = self.outbox.requeue_running().await?;
        if requeued > 0 {
            tracing::warn!(jobs = requeued, "requeued interrupted notification jobs");
        }
        Ok(requeued)
    }

    /// Processes every pending job and returns how many were handled.
    pub async fn run_pending(&self) -> ApplicationResult<usize> {
        let mut handled = 0;
        loop {
            let jobs = self.outbox.claim_pending(CLAIM_BATCH).await?;
            if jobs.is_empty() {
                return Ok(handled);
            }
            for job in jobs {
                if let Err(err) = self.process(&job).await {
                    tracing::error!(job_id = %job.id, error = %err, "notification job failed");
                }
                // Left running on failure; `recover` requeues it on the next start.
                if let Err(err) = self.outbox.mark_completed(job.id, self.clock.now()).await {
                    tracing::error!(
                        job_id = %job.id,
                        error = %err,
                        "failed to complete notification job"
                    );
                }
                handled += 1;
            }
        }
    }

    async fn process(&self, job: &NotificationJob) -> ApplicationResult<()> {
        let Some(article) = self.articles.find_by_id(job.article_id).await? else {
            tracing::warn!(
                article_id = %job.article_id,
                "article removed before notifications were sent"
            );
            return Ok(());
        };

        let author = self
            .users
            .find_by_id(article.author_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article author not found"))?;
        let publisher_name = match article.publisher_id {
            Some(id) => self
                .publishers
                .find_by_id(id)
                .await?
                .map(|p| p.name.to_string()),
            None => None,
        };

        let announcement = ArticleAnnouncement::new(
            &self.site_url,
            article.id.into(),
            article.title.as_str(),
            article.body.as_str(),
            author.display_name(),
            publisher_name,
        );

        let audience = self
            .subscriptions
            .audience_for(article.author_id, article.publisher_id)
            .await?;
        tracing::info!(
            article_id = %article.id,
            subscribers = audience.len(),
            "sending notifications for approved article"
        );

        let prior = self.outbox.deliveries_for(job.id).await?;
        let emailed: HashSet<&str> = prior
            .iter()
            .filter(|d| d.channel == DeliveryChannel::Email)
            .filter_map(|d| d.recipient.as_deref())
            .collect();
        let posted = prior.iter().any(|d| d.channel == DeliveryChannel::Social);

        self.send_emails(job, &announcement, &audience, &emailed).await;
        if !posted {
            self.post_social(job, &announcement).await;
        }
        Ok(())
    }

    async fn send_emails(
        &self,
        job: &NotificationJob,
        announcement: &ArticleAnnouncement,
        audience: &[User],
        already_sent: &HashSet<&str>,
    ) {
        let Some(sender) = &self.email else {
            if !audience.is_empty() {
                tracing::warn!("email delivery is not configured; skipping subscribers");
            }
            return;
        };

        for reader in audience {
            let Some(email) = &reader.email else {
                tracing::debug!(user_id = %reader.id, "subscriber has no email address");
                continue;
            };
            let recipient = email.to_string();
            if already_sent.contains(recipient.as_str()) {
                continue;
            }
            let message = announcement.email_to(recipient.clone());
            let delivery = match sender.send(&message).await {
                Ok(()) => NotificationDelivery::succeeded(
                    job,
                    DeliveryChannel::Email,
                    Some(recipient),
                    self.clock.now(),
                ),
                Err(err) => {
                    tracing::warn!(user_id = %reader.id, error = %err, "email delivery failed");
                    NotificationDelivery::failed(
                        job,
                        DeliveryChannel::Email,
                        Some(recipient),
                        err.to_string(),
                        self.clock.now(),
                    )
                }
            };
            self.record(delivery).await;
        }
    }

    async fn post_social(&self, job: &NotificationJob, announcement: &ArticleAnnouncement) {
        let Some(poster) = &self.social else {
            tracing::warn!("social posting is not configured; skipping");
            return;
        };

        let delivery = match poster.post(&announcement.social_text()).await {
            Ok(()) => {
                NotificationDelivery::succeeded(job, DeliveryChannel::Social, None, self.clock.now())
            }
            Err(err) => {
                tracing::warn!(article_id = %job.article_id, error = %err, "social post failed");
                NotificationDelivery::failed(
                    job,
                    DeliveryChannel::Social,
                    None,
                    err.to_string(),
                    self.clock.now(),
                )
            }
        };
        self.record(delivery).await;
    }

    async fn record(&self, delivery: NotificationDelivery) {
        if let Err(err) = self.outbox.record_delivery(delivery).await {
            tracing::error!(error = %err, "failed to record notification delivery");
        }
    }
}
