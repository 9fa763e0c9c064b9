use anyhow::Result;
use newsdesk::application::{
    ports::{
        notifier::{EmailSender, SocialPoster},
        security::{PasswordHasher, TokenManager},
        time::Clock,
    },
    services::{Adapters, ApplicationServices, Repositories},
};
use newsdesk::config::AppConfig;
use newsdesk::infrastructure::{
    database,
    notifications::{HttpSocialPoster, SmtpEmailSender, spawn_outbox_worker},
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository,
        PostgresNewsletterRepository, PostgresOutboxRepository, PostgresPublisherRepository,
        PostgresSubscriptionRepository, PostgresUserRepository,
    },
    security::{password::Argon2PasswordHasher, token::BiscuitTokenManager},
    time::SystemClock,
};
use newsdesk::presentation::http::{
    routes::{RateLimit, RouterSettings, build_router_with},
    state::HttpState,
};
use sqlx::PgPool;
use std::{net::SocketAddr, sync::Arc};
use tokio::{signal, sync::watch};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool =
        database::init_pool(config.database_url(), config.database_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let services = Arc::new(ApplicationServices::new(
        repositories(&pool),
        adapters(&config)?,
    ));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let worker = spawn_outbox_worker(
        services.dispatcher(),
        config.outbox_poll_interval(),
        shutdown_rx,
    );

    let settings = RouterSettings {
        allowed_origins: config.allowed_origins().to_vec(),
        rate_limit: config.rate_limit_enabled().then(|| RateLimit {
            per_second: config.rate_limit_per_second(),
            burst: config.rate_limit_burst(),
        }),
    };
    let app = build_router_with(HttpState::new(Arc::clone(&services)), settings);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!(%address, "listening");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    let _ = shutdown_tx.send(true);
    if let Err(err) = worker.await {
        tracing::warn!(error = %err, "outbox worker did not stop cleanly");
    }

    Ok(())
}

fn repositories(pool: &PgPool) -> Repositories {
    Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        article_writes: Arc::new(PostgresArticleWriteRepository::new(pool.clone())),
        article_reads: Arc::new(PostgresArticleReadRepository::new(pool.clone())),
        publishers: Arc::new(PostgresPublisherRepository::new(pool.clone())),
        subscriptions: Arc::new(PostgresSubscriptionRepository::new(pool.clone())),
        newsletters: Arc::new(PostgresNewsletterRepository::new(pool.clone())),
        outbox: Arc::new(PostgresOutboxRepository::new(pool.clone())),
    }
}

fn adapters(config: &AppConfig) -> Result<Adapters> {
    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let email_sender: Option<Arc<dyn EmailSender>> = match config.smtp() {
        Some(settings) => Some(Arc::new(SmtpEmailSender::new(settings)?)),
        None => {
            tracing::warn!("SMTP_HOST not set; subscriber emails are disabled");
            None
        }
    };
    let social_poster: Option<Arc<dyn SocialPoster>> = match config.social() {
        Some(settings) => Some(Arc::new(HttpSocialPoster::new(settings)?)),
        None => {
            tracing::warn!("SOCIAL_BEARER_TOKEN not set; social posts are disabled");
            None
        }
    };

    Ok(Adapters {
        password_hasher,
        token_manager,
        clock,
        email_sender,
        social_poster,
        site_url: config.site_url().to_string(),
    })
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
