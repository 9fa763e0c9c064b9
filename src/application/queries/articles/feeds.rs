use super::ArticleQueryService;
use crate::{
    application::{
        authorization::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser, PaginatedResult},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::ArticleFeed,
        pagination::PageRequest,
        publisher::PublisherId,
        user::UserId,
    },
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub search: Option<String>,
    pub page: PageRequest,
}

impl ArticleQueryService {
    /// Public listing of approved articles.
    pub async fn list_approved(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        let search = query
            .search
            .map(|q| q.trim().to_string())
            .filter(|q| !q.is_empty());
        let page = self
            .read_repo
            .list_feed(ArticleFeed::Approved { search }, query.page)
            .await?;
        Ok(PaginatedResult::from_page(page))
    }

    /// Approved articles from the caller's subscribed publishers and journalists.
    pub async fn list_subscribed(
        &self,
        actor: &AuthenticatedUser,
        page: PageRequest,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        ensure_capability(actor, "subscriptions", "manage")?;
        let page = self
            .read_repo
            .list_feed(ArticleFeed::Subscribed(actor.id), page)
            .await?;
        Ok(PaginatedResult::from_page(page))
    }

    pub async fn list_by_publisher(
        &self,
        publisher_id: i64,
        page: PageRequest,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        let id = PublisherId::new(publisher_id)
            .map_err(|_| ApplicationError::not_found("publisher not found"))?;
        if self.publisher_repo.find_by_id(id).await?.is_none() {
            return Err(ApplicationError::not_found("publisher not found"));
        }
        let page = self
            .read_repo
            .list_feed(ArticleFeed::Publisher(id), page)
            .await?;
        Ok(PaginatedResult::from_page(page))
    }

    pub async fn list_by_journalist(
        &self,
        journalist_id: i64,
        page: PageRequest,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        let id = UserId::new(journalist_id)
            .map_err(|_| ApplicationError::not_found("journalist not found"))?;
        match self.user_repo.find_by_id(id).await? {
            Some(user) if user.is_journalist() => {}
            _ => return Err(ApplicationError::not_found("journalist not found")),
        }
        let page = self
            .read_repo
            .list_feed(ArticleFeed::Journalist(id), page)
            .await?;
        Ok(PaginatedResult::from_page(page))
    }

    /// Editor review queue.
    pub async fn list_pending(
        &self,
        actor: &AuthenticatedUser,
        page: PageRequest,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        ensure_capability(actor, "articles", "view:pending")?;
        let page = self.read_repo.list_pending(page).await?;
        Ok(PaginatedResult::from_page(page))
    }

    /// The caller's own articles in every status.
    pub async fn list_mine(
        &self,
        actor: &AuthenticatedUser,
        page: PageRequest,
    ) -> ApplicationResult<PaginatedResult<ArticleDto>> {
        ensure_capability(actor, "articles", "create")?;
        let page = self.read_repo.list_by_author(actor.id, page).await?;
        Ok(PaginatedResult::from_page(page))
    }
}
