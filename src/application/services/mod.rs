// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        commands::{
            articles::ArticleCommandService, newsletters::NewsletterCommandService,
            publishers::PublisherCommandService, subscriptions::SubscriptionCommandService,
            users::UserCommandService,
        },
        dto::AuthenticatedUser,
        notifications::NotificationDispatcher,
        ports::{
            notifier::{EmailSender, SocialPoster},
            security::{PasswordHasher, TokenManager},
            time::Clock,
        },
        queries::{
            articles::ArticleQueryService, newsletters::NewsletterQueryService,
            publishers::PublisherQueryService, subscriptions::SubscriptionQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        newsletter::NewsletterRepository,
        notification::OutboxRepository,
        publisher::PublisherRepository,
        subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

/// Storage adapters the services are built on.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub article_writes: Arc<dyn ArticleWriteRepository>,
    pub article_reads: Arc<dyn ArticleReadRepository>,
    pub publishers: Arc<dyn PublisherRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub newsletters: Arc<dyn NewsletterRepository>,
    pub outbox: Arc<dyn OutboxRepository>,
}

/// Outbound and security adapters. Unconfigured notification channels are `None`.
#[derive(Clone)]
pub struct Adapters {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub clock: Arc<dyn Clock>,
    pub email_sender: Option<Arc<dyn EmailSender>>,
    pub social_poster: Option<Arc<dyn SocialPoster>>,
    pub site_url: String,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub publisher_commands: Arc<PublisherCommandService>,
    pub publisher_queries: Arc<PublisherQueryService>,
    pub subscription_commands: Arc<SubscriptionCommandService>,
    pub subscription_queries: Arc<SubscriptionQueryService>,
    pub newsletter_commands: Arc<NewsletterCommandService>,
    pub newsletter_queries: Arc<NewsletterQueryService>,
    dispatcher: Arc<NotificationDispatcher>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, adapters: Adapters) -> Self {
        let clock = Arc::clone(&adapters.clock);

        let dispatcher = Arc::new(NotificationDispatcher::new(
            Arc::clone(&repos.outbox),
            Arc::clone(&repos.article_reads),
            Arc::clone(&repos.users),
            Arc::clone(&repos.publishers),
            Arc::clone(&repos.subscriptions),
            adapters.email_sender.clone(),
            adapters.social_poster.clone(),
            Arc::clone(&clock),
            adapters.site_url.clone(),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&adapters.password_hasher),
            Arc::clone(&adapters.token_manager),
            Arc::clone(&clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_writes),
            Arc::clone(&repos.article_reads),
            Arc::clone(&repos.publishers),
            Arc::clone(&clock),
            dispatcher.signal(),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_reads),
            Arc::clone(&repos.publishers),
            Arc::clone(&repos.users),
        ));

        let publisher_commands = Arc::new(PublisherCommandService::new(
            Arc::clone(&repos.publishers),
            Arc::clone(&repos.users),
            Arc::clone(&clock),
        ));
        let publisher_queries = Arc::new(PublisherQueryService::new(Arc::clone(&repos.publishers)));

        let subscription_commands = Arc::new(SubscriptionCommandService::new(
            Arc::clone(&repos.subscriptions),
            Arc::clone(&repos.publishers),
            Arc::clone(&repos.users),
            Arc::clone(&clock),
        ));
        let subscription_queries = Arc::new(SubscriptionQueryService::new(Arc::clone(
            &repos.subscriptions,
        )));

        let newsletter_commands = Arc::new(NewsletterCommandService::new(
            Arc::clone(&repos.newsletters),
            Arc::clone(&repos.publishers),
            Arc::clone(&clock),
        ));
        let newsletter_queries =
            Arc::new(NewsletterQueryService::new(Arc::clone(&repos.newsletters)));

        Self {
            user_commands,
            user_queries,
            article_commands,
            article_queries,
            publisher_commands,
            publisher_queries,
            subscription_commands,
            subscription_queries,
            newsletter_commands,
            newsletter_queries,
            dispatcher,
            token_manager: adapters.token_manager,
        }
    }

    pub fn dispatcher(&self) -> Arc<NotificationDispatcher> {
        Arc::clone(&self.dispatcher)
    }

    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }
}
