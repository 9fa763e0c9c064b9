// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        dto::AuthenticatedUser,
        error::{ApplicationError, ApplicationResult},
        notifications::DispatchSignal,
        ports::time::Clock,
    },
    domain::{
        article::{
            Article, ArticleId, ArticleOwnershipSpec, ArticleReadRepository,
            ArticleWriteRepository,
        },
        publisher::PublisherRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) publisher_repo: Arc<dyn PublisherRepository>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) dispatch: DispatchSignal,
}

#[derive(Debug, Clone, Copy)]
pub(super) enum Edit {
    Update,
    Delete,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        publisher_repo: Arc<dyn PublisherRepository>,
        clock: Arc<dyn Clock>,
        dispatch: DispatchSignal,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            publisher_repo,
            clock,
            dispatch,
        }
    }

    /// Loads an article the actor means to change. Articles the actor cannot
    /// see are reported missing; visible ones they may not touch are forbidden.
    pub(super) async fn load_for_edit(
        &self,
        actor: &AuthenticatedUser,
        id: ArticleId,
        edit: Edit,
    ) -> ApplicationResult<Article> {
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|a| ArticleOwnershipSpec::new(&actor.capabilities, a, actor.id).can_view())
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let spec = ArticleOwnershipSpec::new(&actor.capabilities, &article, actor.id);
        let (allowed, verb) = match edit {
            Edit::Update => (spec.can_update(), "update"),
            Edit::Delete => (spec.can_delete(), "delete"),
        };
        if !allowed {
            return Err(ApplicationError::forbidden(format!(
                "insufficient privileges to {verb} article"
            )));
        }
        Ok(article)
    }
}
