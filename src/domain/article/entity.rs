// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleStatus, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub status: ArticleStatus,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub reviewed_by: Option<UserId>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    pub fn is_approved(&self) -> bool {
        self.status == ArticleStatus::Approved
    }

    /// Pending -> Approved. Any other starting state is a conflict.
    pub fn approve(&mut self, editor: UserId, now: DateTime<Utc>) -> DomainResult<ArticleReview> {
        self.review(ArticleStatus::Approved, editor, now)
    }

    /// Pending -> Rejected. Any other starting state is a conflict.
    pub fn reject(&mut self, editor: UserId, now: DateTime<Utc>) -> DomainResult<ArticleReview> {
        self.review(ArticleStatus::Rejected, editor, now)
    }

    fn review(
        &mut self,
        outcome: ArticleStatus,
        editor: UserId,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleReview> {
        if self.status.is_terminal() {
            return Err(DomainError::Conflict(format!(
                "article {} has already been {}",
                self.id, self.status
            )));
        }
        let review = ArticleReview {
            id: self.id,
            status: outcome,
            reviewed_by: editor,
            reviewed_at: now,
            original_updated_at: self.updated_at,
        };
        self.status = outcome;
        self.reviewed_by = Some(editor);
        self.reviewed_at = Some(now);
        self.updated_at = now;
        Ok(review)
    }

    /// Content can only change while the article awaits review.
    pub fn set_content(
        &mut self,
        title: Option<ArticleTitle>,
        body: Option<ArticleBody>,
        now: DateTime<Utc>,
    ) -> DomainResult<ArticleContentUpdate> {
        if self.status.is_terminal() {
            return Err(DomainError::Conflict(format!(
                "article {} is {} and can no longer be edited",
                self.id, self.status
            )));
        }
        let update = ArticleContentUpdate {
            id: self.id,
            title: title.clone(),
            body: body.clone(),
            original_updated_at: self.updated_at,
            updated_at: now,
        };
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(body) = body {
            self.body = body;
        }
        self.updated_at = now;
        Ok(update)
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub body: ArticleBody,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub created_at: DateTime<Utc>,
}

/// Persisted change of title and/or body, guarded by `original_updated_at`.
#[derive(Debug, Clone)]
pub struct ArticleContentUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub body: Option<ArticleBody>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Persisted outcome of an editor's decision, guarded by `original_updated_at`.
#[derive(Debug, Clone)]
pub struct ArticleReview {
    pub id: ArticleId,
    pub status: ArticleStatus,
    pub reviewed_by: UserId,
    pub reviewed_at: DateTime<Utc>,
    pub original_updated_at: DateTime<Utc>,
}
