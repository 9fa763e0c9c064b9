use crate::domain::article::{ArticleBody, ArticleTitle};
use crate::domain::errors::DomainResult;
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NewsletterId(pub i64);

impl fmt::Display for NewsletterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Newsletters share the article field limits but skip review entirely.
#[derive(Debug, Clone)]
pub struct Newsletter {
    pub id: NewsletterId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewNewsletter {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub created_at: DateTime<Utc>,
}

impl NewNewsletter {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        author_id: UserId,
        publisher_id: Option<PublisherId>,
        created_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            title: ArticleTitle::new(title)?,
            body: ArticleBody::new(body)?,
            author_id,
            publisher_id,
            created_at,
        })
    }
}
