use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::subscription::entity::{Subscription, SubscriptionTarget};
use crate::domain::user::{User, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Returns the stored subscription and whether it was created by this call.
    /// Subscribing twice yields the original row.
    async fn subscribe(
        &self,
        reader: UserId,
        target: SubscriptionTarget,
        at: DateTime<Utc>,
    ) -> DomainResult<(Subscription, bool)>;

    /// Returns whether a subscription existed.
    async fn unsubscribe(&self, reader: UserId, target: SubscriptionTarget) -> DomainResult<bool>;

    /// Publisher subscriptions first, then journalists, each by creation time.
    async fn list_for_reader(&self, reader: UserId) -> DomainResult<Vec<Subscription>>;

    /// Active readers subscribed to `author` or to `publisher`, each once,
    /// ordered by user id.
    async fn audience_for(
        &self,
        author: UserId,
        publisher: Option<PublisherId>,
    ) -> DomainResult<Vec<User>>;
}
