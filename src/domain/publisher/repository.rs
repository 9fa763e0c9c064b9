use crate::domain::errors::DomainResult;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::publisher::entity::{NewPublisher, Publisher, PublisherMembers};
use crate::domain::publisher::value_objects::{MembershipKind, PublisherId};
use crate::domain::user::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait PublisherRepository: Send + Sync {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher>;

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>>;

    /// Publishers ordered by name.
    async fn list(&self, page: PageRequest) -> DomainResult<Page<Publisher>>;

    /// Idempotent: adding an existing member is a no-op.
    async fn add_member(
        &self,
        publisher_id: PublisherId,
        user_id: UserId,
        kind: MembershipKind,
    ) -> DomainResult<()>;

    async fn members(&self, publisher_id: PublisherId) -> DomainResult<PublisherMembers>;
}
