use crate::domain::newsletter::Newsletter;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NewsletterDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub author_id: i64,
    #[serde(default)]
    pub publisher_id: Option<i64>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
}

impl From<Newsletter> for NewsletterDto {
    fn from(newsletter: Newsletter) -> Self {
        Self {
            id: newsletter.id.0,
            title: newsletter.title.into(),
            body: newsletter.body.into(),
            author_id: newsletter.author_id.into(),
            publisher_id: newsletter.publisher_id.map(Into::into),
            created_at: newsletter.created_at,
        }
    }
}
