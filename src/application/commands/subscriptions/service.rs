use std::sync::Arc;

use crate::{
    application::ports::time::Clock,
    domain::{
        publisher::PublisherRepository, subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

pub struct SubscriptionCommandService {
    pub(super) subscription_repo: Arc<dyn SubscriptionRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) user_repo: Arc<dyn UserRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl SubscriptionCommandService {
    pub fn new(
        subscription_repo: Arc<dyn SubscriptionRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        user_repo: Arc<dyn UserRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            subscription_repo,
            publisher_repo,
            user_repo,
            clock,
        }
    }
}
