use std::sync::Arc;

use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedUser, SubscriptionDto, SubscriptionListDto},
        error::ApplicationResult,
    },
    domain::subscription::{SubscriptionRepository, SubscriptionTarget},
};

pub struct SubscriptionQueryService {
    subscription_repo: Arc<dyn SubscriptionRepository>,
}

impl SubscriptionQueryService {
    pub fn new(subscription_repo: Arc<dyn SubscriptionRepository>) -> Self {
        Self { subscription_repo }
    }

    pub async fn list_subscriptions(
        &self,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<SubscriptionListDto> {
        ensure_capability(actor, "subscriptions", "manage")?;
        let (publishers, journalists): (Vec<_>, Vec<_>) = self
            .subscription_repo
            .list_for_reader(actor.id)
            .await?
            .into_iter()
            .partition(|s| matches!(s.target, SubscriptionTarget::Publisher(_)));
        Ok(SubscriptionListDto {
            publishers: publishers.into_iter().map(SubscriptionDto::from).collect(),
            journalists: journalists.into_iter().map(SubscriptionDto::from).collect(),
        })
    }
}
