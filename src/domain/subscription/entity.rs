use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// What a reader follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubscriptionTarget {
    Publisher(PublisherId),
    Journalist(UserId),
}

impl SubscriptionTarget {
    pub fn kind(&self) -> &'static str {
        match self {
            SubscriptionTarget::Publisher(_) => "publisher",
            SubscriptionTarget::Journalist(_) => "journalist",
        }
    }

    pub fn target_id(&self) -> i64 {
        match self {
            SubscriptionTarget::Publisher(id) => id.0,
            SubscriptionTarget::Journalist(id) => id.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Subscription {
    pub reader_id: UserId,
    pub target: SubscriptionTarget,
    pub created_at: DateTime<Utc>,
}
