//! Database gate middleware.
//!
//! Every data route passes through here before its handler runs: the gate
//! asks the connection manager for a live pool (establishing one on first
//! use) and injects it into request extensions. While the database is
//! unreachable the service itself stays up; each request is answered with
//! the current connection state and the next one retries.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use sqlx::PgPool;
use tracing::warn;

use crate::AppState;
use crate::error::AppError;

/// Key used to store the acquired pool in request extensions.
#[derive(Debug, Clone)]
pub struct Db(pub PgPool);

/// Axum middleware: acquires the live database handle or fails the request.
pub async fn ensure_db(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let pool = match state.db.ensure_connected().await {
        Ok(pool) => pool,
        Err(e) => {
            warn!(state = %e.state, error = %e.message, "database gate rejected request");
            return Err(AppError::DbUnavailable(e));
        }
    };

    request.extensions_mut().insert(Db(pool));

    Ok(next.run(request).await)
}
