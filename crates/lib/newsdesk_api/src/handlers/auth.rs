//! Authentication request handlers.

use axum::Json;
use axum::extract::{Extension, State};

use crate::AppState;
use crate::error::AppResult;
use crate::middleware::db_gate::Db;
use crate::models::{LoginRequest, LoginResponse};
use crate::services;

/// `POST /api/users/login`: authenticate with email + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Extension(Db(pool)): Extension<Db>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let response = services::auth::login(
        &pool,
        &body.email,
        &body.password,
        state.config.jwt_secret.as_bytes(),
    )
    .await?;
    Ok(Json(response))
}
