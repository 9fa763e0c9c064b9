use super::PublisherCommandService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedUser, PublisherDetailDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        publisher::{MembershipKind, PublisherId},
        user::{Role, UserId},
    },
};

pub struct AddPublisherMemberCommand {
    pub publisher_id: i64,
    pub user_id: i64,
}

impl PublisherCommandService {
    /// Attaches an editor or journalist; the membership kind follows the
    /// user's role. Readers cannot be members.
    pub async fn add_member(
        &self,
        actor: &AuthenticatedUser,
        command: AddPublisherMemberCommand,
    ) -> ApplicationResult<PublisherDetailDto> {
        ensure_capability(actor, "publishers", "manage")?;
        let publisher_id = PublisherId::new(command.publisher_id)?;
        let publisher = self
            .publisher_repo
            .find_by_id(publisher_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("publisher not found"))?;

        let user = self
            .user_repo
            .find_by_id(UserId::new(command.user_id)?)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user not found"))?;
        let kind = match user.role {
            Role::Editor => MembershipKind::Editor,
            Role::Journalist => MembershipKind::Journalist,
            Role::Reader => {
                return Err(ApplicationError::validation(
                    "readers cannot be publisher members",
                ));
            }
        };

        self.publisher_repo
            .add_member(publisher_id, user.id, kind)
            .await?;
        let members = self.publisher_repo.members(publisher_id).await?;
        Ok(PublisherDetailDto::from_parts(publisher, members))
    }
}
