use crate::domain::publisher::value_objects::{PublisherId, PublisherName};
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Publisher {
    pub id: PublisherId,
    pub name: PublisherName,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewPublisher {
    pub name: PublisherName,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Staff attached to a publisher, each list ordered by user id.
#[derive(Debug, Clone, Default)]
pub struct PublisherMembers {
    pub editors: Vec<UserId>,
    pub journalists: Vec<UserId>,
}

impl PublisherMembers {
    pub fn has_journalist(&self, user_id: UserId) -> bool {
        self.journalists.contains(&user_id)
    }
}
