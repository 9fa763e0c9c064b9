// src/application/commands/articles/update.rs
use super::{ArticleCommandService, service::Edit};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleBody, ArticleId, ArticleTitle},
};

pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let mut article = self.load_for_edit(actor, id, Edit::Update).await?;

        let title = command.title.map(ArticleTitle::new).transpose()?;
        let body = command.body.map(ArticleBody::new).transpose()?;
        if title.is_none() && body.is_none() {
            return Ok(article.into());
        }

        let update = article.set_content(title, body, self.clock.now())?;
        let updated = self.write_repo.update_content(update).await?;
        Ok(updated.into())
    }
}
