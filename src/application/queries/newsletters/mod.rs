use std::sync::Arc;

use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedUser, NewsletterDto, PaginatedResult},
        error::ApplicationResult,
    },
    domain::{newsletter::NewsletterRepository, pagination::PageRequest},
};

pub struct NewsletterQueryService {
    newsletter_repo: Arc<dyn NewsletterRepository>,
}

impl NewsletterQueryService {
    pub fn new(newsletter_repo: Arc<dyn NewsletterRepository>) -> Self {
        Self { newsletter_repo }
    }

    pub async fn list_newsletters(
        &self,
        actor: &AuthenticatedUser,
        page: PageRequest,
    ) -> ApplicationResult<PaginatedResult<NewsletterDto>> {
        ensure_capability(actor, "newsletters", "view")?;
        let page = self.newsletter_repo.list(page).await?;
        Ok(PaginatedResult::from_page(page))
    }

    pub async fn list_subscribed(
        &self,
        actor: &AuthenticatedUser,
        page: PageRequest,
    ) -> ApplicationResult<PaginatedResult<NewsletterDto>> {
        ensure_capability(actor, "subscriptions", "manage")?;
        let page = self.newsletter_repo.list_subscribed(actor.id, page).await?;
        Ok(PaginatedResult::from_page(page))
    }
}
