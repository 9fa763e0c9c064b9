use crate::domain::article::{Article, ArticleStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: i64,
    pub title: String,
    pub body: String,
    pub status: ArticleStatus,
    pub author_id: i64,
    #[serde(default)]
    pub publisher_id: Option<i64>,
    #[serde(default)]
    pub reviewed_by: Option<i64>,
    #[serde(default, with = "serde_time::option")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into(),
            body: article.body.into(),
            status: article.status,
            author_id: article.author_id.into(),
            publisher_id: article.publisher_id.map(Into::into),
            reviewed_by: article.reviewed_by.map(Into::into),
            reviewed_at: article.reviewed_at,
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}
