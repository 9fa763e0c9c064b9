use super::ArticleCommandService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{article::ArticleId, notification::NewNotificationJob},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

pub struct ReviewArticleCommand {
    pub id: i64,
    pub decision: ReviewDecision,
}

impl ArticleCommandService {
    /// Records an editor's decision. Approval enqueues the subscriber
    /// notifications in the same write and wakes the dispatcher.
    pub async fn review_article(
        &self,
        actor: &AuthenticatedUser,
        command: ReviewArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "review")?;
        let id = ArticleId::new(command.id)?;
        let mut article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;

        let now = self.clock.now();
        let (review, job) = match command.decision {
            ReviewDecision::Approve => (
                article.approve(actor.id, now)?,
                Some(NewNotificationJob {
                    article_id: id,
                    enqueued_at: now,
                }),
            ),
            ReviewDecision::Reject => (article.reject(actor.id, now)?, None),
        };

        let enqueued = job.is_some();
        let reviewed = self.write_repo.record_review(review, job).await?;
        tracing::info!(
            article_id = %reviewed.id,
            editor_id = %actor.id,
            status = %reviewed.status,
            "article reviewed"
        );
        if enqueued {
            self.dispatch.wake();
        }
        Ok(reviewed.into())
    }
}
