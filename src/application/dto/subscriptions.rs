use crate::domain::subscription::Subscription;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionDto {
    /// `publisher` or `journalist`.
    pub target_type: String,
    pub target_id: i64,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Subscription> for SubscriptionDto {
    fn from(subscription: Subscription) -> Self {
        Self {
            target_type: subscription.target.kind().to_string(),
            target_id: subscription.target.target_id(),
            created_at: subscription.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubscriptionListDto {
    pub publishers: Vec<SubscriptionDto>,
    pub journalists: Vec<SubscriptionDto>,
}

/// Result of a subscribe call; `created` is false when it already existed.
#[derive(Debug, Clone)]
pub struct SubscribeOutcome {
    pub subscription: SubscriptionDto,
    pub created: bool,
}
