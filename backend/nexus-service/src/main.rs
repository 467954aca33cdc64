use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexus_service::config::Config;
use nexus_service::db::run_migrations;
use nexus_service::routes::configure_routes;
use nexus_service::services::{
    feed::FeedService, follow::FollowService, media_gen::MediaGenClient,
};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();

    tracing::info!("Starting nexus-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    // Create database connection pool
    let db_config = db_pool::DbConfig::from_env()
        .map_err(anyhow::Error::msg)
        .context("database configuration")?;
    db_config.log_config();
    let pool = db_pool::create_pool(&db_config)
        .await
        .context("failed to create database pool")?;

    // Run migrations in non-production unless explicitly skipped
    let run_migrations_env = std::env::var("RUN_MIGRATIONS").unwrap_or_else(|_| "true".into());
    if !config.is_production() && run_migrations_env != "false" {
        tracing::info!("Running database migrations...");
        match run_migrations(&pool).await {
            Ok(_) => tracing::info!("Database migrations completed"),
            Err(e) => tracing::warn!("Skipping migrations due to error: {:#}", e),
        }
    } else {
        tracing::info!(
            "Skipping database migrations (RUN_MIGRATIONS={})",
            run_migrations_env
        );
    }

    let follow_service = FollowService::new(pool.clone());
    let feed_service = FeedService::new(pool.clone());
    let media_client = MediaGenClient::new(config.media.clone());

    let host = config.app.host.clone();
    let port = config.app.port;
    tracing::info!("Listening on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(follow_service.clone()))
            .app_data(web::Data::new(feed_service.clone()))
            .app_data(web::Data::new(media_client.clone()))
            .configure(configure_routes)
    })
    .bind((host, port))
    .context("failed to bind HTTP listener")?
    .run()
    .await?;

    Ok(())
}
