// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleContentUpdate, ArticleFeed, ArticleId, ArticleReadRepository,
    ArticleReview, ArticleStatus, ArticleTitle, ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::notification::NewNotificationJob;
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_COLUMNS: &str = "id, title, body, status, author_id, publisher_id, reviewed_by, reviewed_at, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    body: String,
    status: String,
    author_id: i64,
    publisher_id: Option<i64>,
    reviewed_by: Option<i64>,
    reviewed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            status: ArticleStatus::parse(&row.status)?,
            author_id: UserId::new(row.author_id)?,
            publisher_id: row.publisher_id.map(PublisherId::new).transpose()?,
            reviewed_by: row.reviewed_by.map(UserId::new).transpose()?,
            reviewed_at: row.reviewed_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            body,
            author_id,
            publisher_id,
            created_at,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles (title, body, status, author_id, publisher_id, created_at, updated_at)
             VALUES ($1, $2, 'pending', $3, $4, $5, $5)
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(title.as_str())
        .bind(body.as_str())
        .bind(i64::from(author_id))
        .bind(publisher_id.map(i64::from))
        .bind(created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn update_content(&self, update: ArticleContentUpdate) -> DomainResult<Article> {
        let ArticleContentUpdate {
            id,
            title,
            body,
            original_updated_at,
            updated_at,
        } = update;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE articles SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            let title_str: String = title.into();
            builder.push(", title = ");
            builder.push_bind(title_str);
        }

        if let Some(body) = body {
            let body_str: String = body.into();
            builder.push(", body = ");
            builder.push_bind(body_str);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(i64::from(id));
        builder.push(" AND status = 'pending' AND updated_at = ");
        builder.push_bind(original_updated_at);
        builder.push(" RETURNING ");
        builder.push(ARTICLE_COLUMNS);

        let maybe_row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let row = maybe_row
            .ok_or_else(|| DomainError::stale("article update"))?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(i64::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("article"));
        }
        Ok(())
    }

    async fn record_review(
        &self,
        review: ArticleReview,
        job: Option<NewNotificationJob>,
    ) -> DomainResult<Article> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "UPDATE articles
             SET status = $1, reviewed_by = $2, reviewed_at = $3, updated_at = $3
             WHERE id = $4 AND status = 'pending' AND updated_at = $5
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(review.status.as_str())
        .bind(i64::from(review.reviewed_by))
        .bind(review.reviewed_at)
        .bind(i64::from(review.id))
        .bind(review.original_updated_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::stale("article review"))?;

        if let Some(job) = job {
            sqlx::query(
                "INSERT INTO notification_jobs (article_id, status, enqueued_at)
                 VALUES ($1, 'pending', $2)",
            )
            .bind(i64::from(job.article_id))
            .bind(job.enqueued_at)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        }

        tx.commit().await.map_err(map_sqlx)?;
        Article::try_from(row)
    }
}

/// `%term%` with LIKE metacharacters escaped.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

impl PostgresArticleReadRepository {
    fn push_feed_filter(builder: &mut QueryBuilder<'_, Postgres>, feed: &ArticleFeed) {
        builder.push(" WHERE status = 'approved'");
        match feed {
            ArticleFeed::Approved { search: None } => {}
            ArticleFeed::Approved {
                search: Some(term),
            } => {
                let pattern = like_pattern(term);
                builder.push(" AND (title ILIKE ");
                builder.push_bind(pattern.clone());
                builder.push(" OR body ILIKE ");
                builder.push_bind(pattern);
                builder.push(")");
            }
            ArticleFeed::Subscribed(reader) => {
                let reader = i64::from(*reader);
                builder.push(
                    " AND (author_id IN (SELECT journalist_id FROM journalist_subscriptions WHERE reader_id = ",
                );
                builder.push_bind(reader);
                builder.push(
                    ") OR publisher_id IN (SELECT publisher_id FROM publisher_subscriptions WHERE reader_id = ",
                );
                builder.push_bind(reader);
                builder.push("))");
            }
            ArticleFeed::Publisher(id) => {
                builder.push(" AND publisher_id = ");
                builder.push_bind(i64::from(*id));
            }
            ArticleFeed::Journalist(id) => {
                builder.push(" AND author_id = ");
                builder.push_bind(i64::from(*id));
            }
        }
    }

    async fn fetch_rows(
        &self,
        mut builder: QueryBuilder<'_, Postgres>,
        page: PageRequest,
    ) -> DomainResult<Vec<Article>> {
        builder.push(" LIMIT ");
        builder.push_bind(page.limit() as i64);
        builder.push(" OFFSET ");
        builder.push_bind(page.offset() as i64);

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count(&self, mut builder: QueryBuilder<'_, Postgres>) -> DomainResult<u64> {
        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(total.max(0) as u64)
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_feed(&self, feed: ArticleFeed, page: PageRequest) -> DomainResult<Page<Article>> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles");
        Self::push_feed_filter(&mut count_builder, &feed);
        let total = self.count(count_builder).await?;

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles"));
        Self::push_feed_filter(&mut builder, &feed);
        builder.push(" ORDER BY created_at DESC, id DESC");
        let items = self.fetch_rows(builder, page).await?;

        Ok(Page::new(items, total, page))
    }

    async fn list_by_author(
        &self,
        author: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<Article>> {
        let mut count_builder: QueryBuilder<Postgres> =
            QueryBuilder::new("SELECT COUNT(*) FROM articles WHERE author_id = ");
        count_builder.push_bind(i64::from(author));
        let total = self.count(count_builder).await?;

        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE author_id = "
        ));
        builder.push_bind(i64::from(author));
        builder.push(" ORDER BY created_at DESC, id DESC");
        let items = self.fetch_rows(builder, page).await?;

        Ok(Page::new(items, total, page))
    }

    async fn list_pending(&self, page: PageRequest) -> DomainResult<Page<Article>> {
        let total = self
            .count(QueryBuilder::new(
                "SELECT COUNT(*) FROM articles WHERE status = 'pending'",
            ))
            .await?;

        let builder: QueryBuilder<Postgres> = QueryBuilder::new(format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE status = 'pending' ORDER BY created_at ASC, id ASC"
        ));
        let items = self.fetch_rows(builder, page).await?;

        Ok(Page::new(items, total, page))
    }
}
