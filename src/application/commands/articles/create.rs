use super::ArticleCommandService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleBody, ArticleTitle, NewArticle},
        publisher::PublisherId,
    },
};

pub struct CreateArticleCommand {
    pub title: String,
    pub body: String,
    pub publisher_id: Option<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    body: Option<String>,
    publisher_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn publisher_id(mut self, publisher_id: Option<i64>) -> Self {
        self.publisher_id = publisher_id;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            body: self.body.ok_or("body is required")?,
            publisher_id: self.publisher_id,
        })
    }
}

impl ArticleCommandService {
    /// New articles always start pending. A publisher may only be named by
    /// one of its journalists.
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        let title = ArticleTitle::new(command.title)?;
        let body = ArticleBody::new(command.body)?;
        let publisher_id = match command.publisher_id {
            Some(raw) => Some(self.ensure_publisher_membership(actor, raw).await?),
            None => None,
        };

        let new_article = NewArticle {
            title,
            body,
            author_id: actor.id,
            publisher_id,
            created_at: self.clock.now(),
        };

        let created = self.write_repo.insert(new_article).await?;
        tracing::info!(article_id = %created.id, author_id = %actor.id, "article submitted for review");
        Ok(created.into())
    }

    async fn ensure_publisher_membership(
        &self,
        actor: &AuthenticatedUser,
        raw_id: i64,
    ) -> ApplicationResult<PublisherId> {
        let id = PublisherId::new(raw_id)?;
        if self.publisher_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("publisher not found"));
        }
        let members = self.publisher_repo.members(id).await?;
        if !members.has_journalist(actor.id) {
            return Err(ApplicationError::forbidden(
                "only journalists of this publisher may publish under it",
            ));
        }
        Ok(id)
    }
}
