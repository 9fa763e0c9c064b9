use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::pagination::{Page, PageRequest};
use crate::domain::publisher::{
    MembershipKind, NewPublisher, Publisher, PublisherId, PublisherMembers, PublisherName,
    PublisherRepository,
};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresPublisherRepository {
    pool: PgPool,
}

impl PostgresPublisherRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PublisherRow {
    id: i64,
    name: String,
    description: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PublisherRow> for Publisher {
    type Error = DomainError;

    fn try_from(row: PublisherRow) -> Result<Self, Self::Error> {
        Ok(Publisher {
            id: PublisherId::new(row.id)?,
            name: PublisherName::new(row.name)?,
            description: row.description,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct MemberRow {
    user_id: i64,
    kind: String,
}

#[async_trait]
impl PublisherRepository for PostgresPublisherRepository {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let row = sqlx::query_as::<_, PublisherRow>(
            "INSERT INTO publishers (name, description, created_at)
             VALUES ($1, $2, $3)
             RETURNING id, name, description, created_at",
        )
        .bind(publisher.name.as_str())
        .bind(&publisher.description)
        .bind(publisher.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Publisher::try_from(row)
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        let row = sqlx::query_as::<_, PublisherRow>(
            "SELECT id, name, description, created_at FROM publishers WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Publisher::try_from).transpose()
    }

    async fn list(&self, page: PageRequest) -> DomainResult<Page<Publisher>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM publishers")
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let rows = sqlx::query_as::<_, PublisherRow>(
            "SELECT id, name, description, created_at FROM publishers
             ORDER BY name ASC, id ASC
             LIMIT $1 OFFSET $2",
        )
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let items = rows
            .into_iter()
            .map(Publisher::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page::new(items, total.max(0) as u64, page))
    }

    async fn add_member(
        &self,
        publisher_id: PublisherId,
        user_id: UserId,
        kind: MembershipKind,
    ) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO publisher_members (publisher_id, user_id, kind)
             VALUES ($1, $2, $3)
             ON CONFLICT (publisher_id, user_id) DO NOTHING",
        )
        .bind(i64::from(publisher_id))
        .bind(i64::from(user_id))
        .bind(kind.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn members(&self, publisher_id: PublisherId) -> DomainResult<PublisherMembers> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT user_id, kind FROM publisher_members
             WHERE publisher_id = $1
             ORDER BY user_id ASC",
        )
        .bind(i64::from(publisher_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let mut members = PublisherMembers::default();
        for row in rows {
            let user_id = UserId::new(row.user_id)?;
            match MembershipKind::parse(&row.kind)? {
                MembershipKind::Editor => members.editors.push(user_id),
                MembershipKind::Journalist => members.journalists.push(user_id),
            }
        }
        Ok(members)
    }
}
