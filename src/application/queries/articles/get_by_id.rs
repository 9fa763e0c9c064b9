use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, ArticleOwnershipSpec},
};

impl ArticleQueryService {
    /// Unreviewed and rejected articles are reported as missing to anyone but
    /// their author and editors.
    pub async fn get_article(
        &self,
        actor: Option<&AuthenticatedUser>,
        id: i64,
    ) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(id).map_err(|_| ApplicationError::not_found("article not found"))?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let visible = match actor {
            Some(actor) => {
                ArticleOwnershipSpec::new(&actor.capabilities, &article, actor.id).can_view()
            }
            None => article.is_approved(),
        };
        if !visible {
            return Err(ApplicationError::not_found("article not found"));
        }
        Ok(article.into())
    }
}
