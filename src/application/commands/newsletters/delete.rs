use super::NewsletterCommandService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
    },
    domain::newsletter::NewsletterId,
};

impl NewsletterCommandService {
    pub async fn delete_newsletter(
        &self,
        actor: &AuthenticatedUser,
        id: i64,
    ) -> ApplicationResult<()> {
        ensure_capability(actor, "newsletters", "delete:any")?;
        if id <= 0 {
            return Err(ApplicationError::not_found("newsletter not found"));
        }
        self.newsletter_repo.delete(NewsletterId(id)).await?;
        Ok(())
    }
}
