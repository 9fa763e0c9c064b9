use crate::domain::publisher::{Publisher, PublisherMembers};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublisherDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Publisher> for PublisherDto {
    fn from(publisher: Publisher) -> Self {
        Self {
            id: publisher.id.into(),
            name: publisher.name.into(),
            description: publisher.description,
            created_at: publisher.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublisherDetailDto {
    #[serde(flatten)]
    pub publisher: PublisherDto,
    pub editor_ids: Vec<i64>,
    pub journalist_ids: Vec<i64>,
}

impl PublisherDetailDto {
    pub fn from_parts(publisher: Publisher, members: PublisherMembers) -> Self {
        Self {
            publisher: publisher.into(),
            editor_ids: members.editors.into_iter().map(Into::into).collect(),
            journalist_ids: members.journalists.into_iter().map(Into::into).collect(),
        }
    }
}
