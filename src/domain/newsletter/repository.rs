use crate::domain::errors::DomainResult;
use crate::domain::newsletter::entity::{NewNewsletter, Newsletter, NewsletterId};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait NewsletterRepository: Send + Sync {
    async fn insert(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter>;

    /// Fails with `NotFound` when no such newsletter exists.
    async fn delete(&self, id: NewsletterId) -> DomainResult<()>;

    /// Newest first.
    async fn list(&self, page: PageRequest) -> DomainResult<Page<Newsletter>>;

    /// Newsletters whose author or publisher the reader subscribes to, each once.
    async fn list_subscribed(
        &self,
        reader: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<Newsletter>>;
}
