//! Blogly - a small server-rendered blog management app

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogly::{
    config::Config,
    db::{
        self,
        repositories::{SqlxPostRepository, SqlxTagRepository, SqlxUserRepository},
    },
    services::{PostService, TagService, UserService},
    web::{self, AppState, Templates},
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "blogly=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Blogly...");

    // Load configuration
    let config = Config::load(Path::new("config.yml"))?;
    tracing::info!("Configuration loaded");

    // Initialize database
    let pool = db::create_pool(&config.database).await?;
    tracing::info!("Database connected: {}", config.database.url);

    // Run migrations
    db::migrations::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Compile embedded templates
    let templates = Templates::new()?;
    tracing::info!("Templates compiled");

    // Create repositories
    let user_repo = SqlxUserRepository::boxed(pool.clone());
    let post_repo = SqlxPostRepository::boxed(pool.clone());
    let tag_repo = SqlxTagRepository::boxed(pool.clone());

    // Build application state
    let state = AppState {
        user_service: Arc::new(UserService::new(user_repo)),
        post_service: Arc::new(PostService::new(post_repo)),
        tag_service: Arc::new(TagService::new(tag_repo)),
        templates: Arc::new(templates),
    };

    // Build router
    let app = web::build_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
