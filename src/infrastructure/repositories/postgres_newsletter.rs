use super::map_sqlx;
use crate::domain::article::{ArticleBody, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::newsletter::{NewNewsletter, Newsletter, NewsletterId, NewsletterRepository};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const NEWSLETTER_COLUMNS: &str = "id, title, body, author_id, publisher_id, created_at";
const SUBSCRIBED_FILTER: &str = "(author_id IN (SELECT journalist_id FROM journalist_subscriptions WHERE reader_id = $1)
     OR publisher_id IN (SELECT publisher_id FROM publisher_subscriptions WHERE reader_id = $1))";

#[derive(Clone)]
pub struct PostgresNewsletterRepository {
    pool: PgPool,
}

impl PostgresNewsletterRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NewsletterRow {
    id: i64,
    title: String,
    body: String,
    author_id: i64,
    publisher_id: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<NewsletterRow> for Newsletter {
    type Error = DomainError;

    fn try_from(row: NewsletterRow) -> Result<Self, Self::Error> {
        Ok(Newsletter {
            id: NewsletterId(row.id),
            title: ArticleTitle::new(row.title)?,
            body: ArticleBody::new(row.body)?,
            author_id: UserId::new(row.author_id)?,
            publisher_id: row.publisher_id.map(PublisherId::new).transpose()?,
            created_at: row.created_at,
        })
    }
}

fn collect(rows: Vec<NewsletterRow>) -> DomainResult<Vec<Newsletter>> {
    rows.into_iter().map(Newsletter::try_from).collect()
}

#[async_trait]
impl NewsletterRepository for PostgresNewsletterRepository {
    async fn insert(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter> {
        let row = sqlx::query_as::<_, NewsletterRow>(&format!(
            "INSERT INTO newsletters (title, body, author_id, publisher_id, created_at)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {NEWSLETTER_COLUMNS}"
        ))
        .bind(newsletter.title.as_str())
        .bind(newsletter.body.as_str())
        .bind(i64::from(newsletter.author_id))
        .bind(newsletter.publisher_id.map(i64::from))
        .bind(newsletter.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Newsletter::try_from(row)
    }

    async fn delete(&self, id: NewsletterId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM newsletters WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("newsletter"));
        }
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> DomainResult<Page<Newsletter>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM newsletters")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, NewsletterRow>(&format!(
            "SELECT {NEWSLETTER_COLUMNS} FROM newsletters
             ORDER BY created_at DESC, id DESC
             LIMIT $1 OFFSET $2"
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Page::new(collect(rows)?, total.max(0) as u64, page))
    }

    async fn list_subscribed(
        &self,
        reader: UserId,
        page: PageRequest,
    ) -> DomainResult<Page<Newsletter>> {
        let total: i64 = sqlx::query_scalar(&format!(
            "SELECT COUNT(*) FROM newsletters WHERE {SUBSCRIBED_FILTER}"
        ))
        .bind(i64::from(reader))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, NewsletterRow>(&format!(
            "SELECT {NEWSLETTER_COLUMNS} FROM newsletters
             WHERE {SUBSCRIBED_FILTER}
             ORDER BY created_at DESC, id DESC
             LIMIT $2 OFFSET $3"
        ))
        .bind(i64::from(reader))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(Page::new(collect(rows)?, total.max(0) as u64, page))
    }
}
