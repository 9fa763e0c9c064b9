// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_article;
mod postgres_newsletter;
mod postgres_outbox;
mod postgres_publisher;
mod postgres_subscription;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_newsletter::PostgresNewsletterRepository;
pub use postgres_outbox::PostgresOutboxRepository;
pub use postgres_publisher::PostgresPublisherRepository;
pub use postgres_subscription::PostgresSubscriptionRepository;
pub use postgres_user::PostgresUserRepository;
