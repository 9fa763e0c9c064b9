use super::SubscriptionCommandService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedUser, SubscribeOutcome},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        publisher::PublisherId,
        subscription::SubscriptionTarget,
        user::UserId,
    },
};

/// Raw target as it arrives from the path.
#[derive(Debug, Clone, Copy)]
pub enum SubscriptionTargetRef {
    Publisher(i64),
    Journalist(i64),
}

impl SubscriptionCommandService {
    pub async fn subscribe(
        &self,
        actor: &AuthenticatedUser,
        target: SubscriptionTargetRef,
    ) -> ApplicationResult<SubscribeOutcome> {
        ensure_capability(actor, "subscriptions", "manage")?;
        let target = self.resolve_target(target).await?;
        let (subscription, created) = self
            .subscription_repo
            .subscribe(actor.id, target, self.clock.now())
            .await?;
        if created {
            tracing::info!(
                reader_id = %actor.id,
                target = target.kind(),
                target_id = target.target_id(),
                "subscribed"
            );
        }
        Ok(SubscribeOutcome {
            subscription: subscription.into(),
            created,
        })
    }

    /// Removing a subscription that does not exist is not an error.
    pub async fn unsubscribe(
        &self,
        actor: &AuthenticatedUser,
        target: SubscriptionTargetRef,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "subscriptions", "manage")?;
        let target = self.resolve_target(target).await?;
        self.subscription_repo.unsubscribe(actor.id, target).await?;
        Ok(())
    }

    async fn resolve_target(
        &self,
        target: SubscriptionTargetRef,
    ) -> ApplicationResult<SubscriptionTarget> {
        match target {
            SubscriptionTargetRef::Publisher(raw) => {
                let id = PublisherId::new(raw)
                    .map_err(|_| ApplicationError::not_found("publisher not found"))?;
                self.publisher_repo
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;
                Ok(SubscriptionTarget::Publisher(id))
            }
            SubscriptionTargetRef::Journalist(raw) => {
                let id = UserId::new(raw)
                    .map_err(|_| ApplicationError::not_found("journalist not found"))?;
                match self.user_repo.find_by_id(id).await? {
                    Some(user) if user.is_journalist() => Ok(SubscriptionTarget::Journalist(id)),
                    _ => Err(ApplicationError::not_found("journalist not found")),
                }
            }
        }
    }
}
