//! Welcome endpoint: service banner and connection diagnostics.

use axum::Json;
use axum::extract::State;

use crate::AppState;

/// `GET /`: service banner with the current database connection state.
///
/// Reports without connecting: a cold service says `disconnected` here
/// until the first data request establishes the pool.
pub async fn index(State(state): State<AppState>) -> Json<serde_json::Value> {
    let conn = state.db.state();
    Json(serde_json::json!({
        "message": "Welcome to the Newsdesk API",
        "status": "Server is running",
        "version": newsdesk_core::version(),
        "database": {
            "state": conn.code(),
            "stateText": conn.to_string(),
        },
        "endpoints": {
            "users": "/api/users",
            "articles": "/api/articles",
        },
    }))
}
