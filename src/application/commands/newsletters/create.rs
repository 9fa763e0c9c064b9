use super::NewsletterCommandService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedUser, NewsletterDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{newsletter::NewNewsletter, publisher::PublisherId},
};

pub struct CreateNewsletterCommand {
    pub title: String,
    pub body: String,
    pub publisher_id: Option<i64>,
}

impl NewsletterCommandService {
    pub async fn create_newsletter(
        &self,
        actor: &AuthenticatedUser,
        command: CreateNewsletterCommand,
    ) -> ApplicationResult<NewsletterDto> {
        ensure_capability(actor, "newsletters", "create")?;

        let publisher_id = match command.publisher_id {
            Some(raw) => {
                let id = PublisherId::new(raw)?;
                if self.publisher_repo.find_by_id(id).await?.is_none() {
                    return Err(ApplicationError::not_found("publisher not found"));
                }
                if !self.publisher_repo.members(id).await?.has_journalist(actor.id) {
                    return Err(ApplicationError::forbidden(
                        "only journalists of this publisher may publish under it",
                    ));
                }
                Some(id)
            }
            None => None,
        };

        let newsletter = NewNewsletter::new(
            command.title,
            command.body,
            actor.id,
            publisher_id,
            self.clock.now(),
        )?;
        let created = self.newsletter_repo.insert(newsletter).await?;
        Ok(created.into())
    }
}
