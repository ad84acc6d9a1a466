//! # newsdesk_api
//!
//! HTTP API library for Newsdesk.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post, put};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use newsdesk_core::db::ConnectionManager;

use crate::config::ApiConfig;
use crate::handlers::{accounts, articles, auth, index};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection manager (pool established lazily, per request).
    pub db: Arc<ConnectionManager>,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `newsdesk_core::migrate::migrate()` which owns the
/// migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    newsdesk_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
///
/// Every `/api` route sits behind the database gate. Mutating routes are
/// additionally wrapped in token verification plus a minimum-role check:
/// account management needs admin, article mutation needs editor.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no token required)
    let public = Router::new()
        .route("/api/users/login", post(auth::login_handler))
        .route("/api/users", post(accounts::create_account_handler))
        .route("/api/articles", get(articles::list_articles_handler))
        .route("/api/articles/{id}", get(articles::get_article_handler));

    // Admin routes (account management)
    let admin = Router::new()
        .route("/api/users", get(accounts::list_accounts_handler))
        .route(
            "/api/users/{id}",
            put(accounts::update_account_handler).delete(accounts::delete_account_handler),
        )
        .layer(axum::middleware::from_fn(middleware::auth::require_admin))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    // Editor routes (article mutation)
    let editor = Router::new()
        .route("/api/articles", post(articles::create_article_handler))
        .route(
            "/api/articles/{id}",
            put(articles::update_article_handler).delete(articles::delete_article_handler),
        )
        .layer(axum::middleware::from_fn(middleware::auth::require_editor))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let api = Router::new()
        .merge(public)
        .merge(admin)
        .merge(editor)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::db_gate::ensure_db,
        ));

    Router::new()
        .route("/", get(index::index))
        .merge(api)
        .layer(cors)
        .with_state(state)
}
