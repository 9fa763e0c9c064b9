use super::PublisherCommandService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{AuthenticatedUser, PublisherDto},
        error::ApplicationResult,
    },
    domain::publisher::{MembershipKind, NewPublisher, PublisherName},
};

pub struct CreatePublisherCommand {
    pub name: String,
    pub description: Option<String>,
}

impl PublisherCommandService {
    /// The creating editor becomes the publisher's first editor.
    pub async fn create_publisher(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePublisherCommand,
    ) -> ApplicationResult<PublisherDto> {
        ensure_capability(actor, "publishers", "manage")?;
        let name = PublisherName::new(command.name)?;

        let publisher = self
            .publisher_repo
            .insert(NewPublisher {
                name,
                description: command.description.unwrap_or_default().trim().to_string(),
                created_at: self.clock.now(),
            })
            .await?;
        self.publisher_repo
            .add_member(publisher.id, actor.id, MembershipKind::Editor)
            .await?;

        tracing::info!(publisher_id = %publisher.id, "publisher created");
        Ok(publisher.into())
    }
}
