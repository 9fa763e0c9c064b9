use super::map_sqlx;
use super::postgres_user::{USER_COLUMNS, UserRow};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::publisher::PublisherId;
use crate::domain::subscription::{Subscription, SubscriptionRepository, SubscriptionTarget};
use crate::domain::user::{User, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresSubscriptionRepository {
    pool: PgPool,
}

impl PostgresSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct SubscriptionRow {
    reader_id: i64,
    kind: String,
    target_id: i64,
    created_at: DateTime<Utc>,
}

impl TryFrom<SubscriptionRow> for Subscription {
    type Error = DomainError;

    fn try_from(row: SubscriptionRow) -> Result<Self, Self::Error> {
        let target = match row.kind.as_str() {
            "publisher" => SubscriptionTarget::Publisher(PublisherId::new(row.target_id)?),
            "journalist" => SubscriptionTarget::Journalist(UserId::new(row.target_id)?),
            other => {
                return Err(DomainError::Persistence(format!(
                    "unknown subscription kind '{other}'"
                )));
            }
        };
        Ok(Subscription {
            reader_id: UserId::new(row.reader_id)?,
            target,
            created_at: row.created_at,
        })
    }
}

/// Table and target column for each subscription kind.
fn table_for(target: &SubscriptionTarget) -> (&'static str, &'static str) {
    match target {
        SubscriptionTarget::Publisher(_) => ("publisher_subscriptions", "publisher_id"),
        SubscriptionTarget::Journalist(_) => ("journalist_subscriptions", "journalist_id"),
    }
}

#[async_trait]
impl SubscriptionRepository for PostgresSubscriptionRepository {
    async fn subscribe(
        &self,
        reader: UserId,
        target: SubscriptionTarget,
        at: DateTime<Utc>,
    ) -> DomainResult<(Subscription, bool)> {
        let (table, column) = table_for(&target);
        let inserted: Option<DateTime<Utc>> = sqlx::query_scalar(&format!(
            "INSERT INTO {table} (reader_id, {column}, created_at)
             VALUES ($1, $2, $3)
             ON CONFLICT (reader_id, {column}) DO NOTHING
             RETURNING created_at"
        ))
        .bind(i64::from(reader))
        .bind(target.target_id())
        .bind(at)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        let (created_at, created) = match inserted {
            Some(created_at) => (created_at, true),
            None => {
                let existing: DateTime<Utc> = sqlx::query_scalar(&format!(
                    "SELECT created_at FROM {table} WHERE reader_id = $1 AND {column} = $2"
                ))
                .bind(i64::from(reader))
                .bind(target.target_id())
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx)?;
                (existing, false)
            }
        };

        Ok((
            Subscription {
                reader_id: reader,
                target,
                created_at,
            },
            created,
        ))
    }

    async fn unsubscribe(&self, reader: UserId, target: SubscriptionTarget) -> DomainResult<bool> {
        let (table, column) = table_for(&target);
        let result = sqlx::query(&format!(
            "DELETE FROM {table} WHERE reader_id = $1 AND {column} = $2"
        ))
        .bind(i64::from(reader))
        .bind(target.target_id())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_for_reader(&self, reader: UserId) -> DomainResult<Vec<Subscription>> {
        let rows = sqlx::query_as::<_, SubscriptionRow>(
            "SELECT reader_id, 'publisher' AS kind, publisher_id AS target_id, created_at, 0 AS ord
               FROM publisher_subscriptions WHERE reader_id = $1
             UNION ALL
             SELECT reader_id, 'journalist' AS kind, journalist_id AS target_id, created_at, 1 AS ord
               FROM journalist_subscriptions WHERE reader_id = $1
             ORDER BY ord, created_at, target_id",
        )
        .bind(i64::from(reader))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Subscription::try_from).collect()
    }

    async fn audience_for(
        &self,
        author: UserId,
        publisher: Option<PublisherId>,
    ) -> DomainResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(&format!(
            "SELECT {USER_COLUMNS} FROM users
             WHERE role = 'reader' AND is_active AND (
                id IN (SELECT reader_id FROM journalist_subscriptions WHERE journalist_id = $1)
                OR id IN (SELECT reader_id FROM publisher_subscriptions WHERE publisher_id = $2)
             )
             ORDER BY id ASC"
        ))
        .bind(i64::from(author))
        .bind(publisher.map(i64::from))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(User::try_from).collect()
    }
}
