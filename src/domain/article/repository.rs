use crate::domain::article::entity::{Article, ArticleContentUpdate, ArticleReview, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::notification::NewNotificationJob;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Which approved articles to list. Every feed is ordered newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArticleFeed {
    /// All approved articles, optionally filtered by a case-insensitive
    /// substring of title or body.
    Approved { search: Option<String> },
    /// Articles whose author or publisher the reader subscribes to, each once.
    Subscribed(UserId),
    Publisher(PublisherId),
    Journalist(UserId),
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    async fn update_content(&self, update: ArticleContentUpdate) -> DomainResult<Article>;

    async fn delete(&self, id: ArticleId) -> DomainResult<()>;

    /// Persists the review and, when given, the outbox job in one transaction.
    /// Fails with a conflict when the stored row no longer matches
    /// `review.original_updated_at` or is no longer pending.
    async fn record_review(
        &self,
        review: ArticleReview,
        job: Option<NewNotificationJob>,
    ) -> DomainResult<Article>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    async fn list_feed(&self, feed: ArticleFeed, page: PageRequest) -> DomainResult<Page<Article>>;

    /// Every article by `author`, any status, newest first.
    async fn list_by_author(&self, author: UserId, page: PageRequest)
    -> DomainResult<Page<Article>>;

    /// The review queue, oldest first.
    async fn list_pending(&self, page: PageRequest) -> DomainResult<Page<Article>>;
}
