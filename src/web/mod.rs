//! Web layer - HTTP handlers and routing
//!
//! This module contains the server-rendered page handlers for the
//! Blogly app:
//! - User pages (list, detail, create/edit/delete forms)
//! - Post pages (detail, create/edit/delete forms)
//! - Tag pages (list, detail, create/edit/delete forms)
//!
//! Every successful mutation answers a 303 redirect to the page that
//! shows the result; validation failures re-render the originating
//! form with a warning.

pub mod error;
pub mod posts;
pub mod tags;
pub mod templates;
pub mod users;

use axum::{response::Redirect, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::services::{PostService, TagService, UserService};

pub use error::PageError;
pub use templates::{Templates, TeraContext};

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub post_service: Arc<PostService>,
    pub tag_service: Arc<TagService>,
    pub templates: Arc<Templates>,
}

/// Build the complete router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/users") }))
        .merge(users::router())
        .merge(posts::router())
        .merge(tags::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use crate::db::repositories::{SqlxPostRepository, SqlxTagRepository, SqlxUserRepository};
    use crate::db::{create_test_pool, migrations};
    use axum_test::TestServer;

    /// Build an application state backed by a fresh in-memory database
    pub async fn test_state() -> AppState {
        let pool = create_test_pool().await.expect("Failed to create test pool");
        migrations::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        AppState {
            user_service: Arc::new(UserService::new(SqlxUserRepository::boxed(pool.clone()))),
            post_service: Arc::new(PostService::new(SqlxPostRepository::boxed(pool.clone()))),
            tag_service: Arc::new(TagService::new(SqlxTagRepository::boxed(pool))),
            templates: Arc::new(Templates::new().expect("Failed to compile templates")),
        }
    }

    /// Start a test server over a fresh application state
    pub async fn test_server() -> (TestServer, AppState) {
        let state = test_state().await;
        let server =
            TestServer::new(build_router(state.clone())).expect("Failed to start test server");
        (server, state)
    }
}
