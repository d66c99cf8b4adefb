use keijiban_core::application::{
    ports::{audit::AuditorProvider, time::Clock},
    services::ApplicationServices,
};
use keijiban_core::config::AppConfig;
use keijiban_core::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    comment::CommentRepository,
};
use keijiban_core::infrastructure::{
    audit::FixedAuditorProvider,
    database,
    repositories::{
        PostgresArticleReadRepository, PostgresArticleWriteRepository, PostgresCommentRepository,
    },
    time::SystemClock,
};
use keijiban_core::presentation::http::{routes::build_router, state::HttpState};

use anyhow::Result;
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
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

    let pool = database::init_pool(config.database_url(), config.db_max_connections()).await?;
    database::run_migrations(&pool).await?;

    let article_write_repo: Arc<dyn ArticleWriteRepository> =
        Arc::new(PostgresArticleWriteRepository::new(pool.clone()));
    let article_read_repo: Arc<dyn ArticleReadRepository> =
        Arc::new(PostgresArticleReadRepository::new(pool.clone()));
    let comment_repo: Arc<dyn CommentRepository> =
        Arc::new(PostgresCommentRepository::new(pool.clone()));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let auditor: Arc<dyn AuditorProvider> =
        Arc::new(FixedAuditorProvider::new(config.auditor_name()));

    let services = Arc::new(ApplicationServices::new(
        article_write_repo,
        article_read_repo,
        comment_repo,
        clock,
        auditor,
    ));

    let state = HttpState { services };
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
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
        signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
