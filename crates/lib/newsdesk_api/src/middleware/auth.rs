//! Authentication middleware: Bearer token extraction, JWT verification,
//! and minimum-role guards.

use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use newsdesk_core::auth::AuthError;
use newsdesk_core::auth::jwt::verify_session_token;
use newsdesk_core::models::account::{Role, TokenClaims};

use crate::AppState;
use crate::error::AppError;

/// Key used to store `TokenClaims` in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub TokenClaims);

/// Axum middleware: extracts `Authorization: Bearer <token>`, verifies the
/// token, and injects `AuthenticatedUser` into request extensions.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingToken)?;

    let claims = verify_session_token(token, state.config.jwt_secret.as_bytes())?;

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}

/// Axum middleware: requires at least the admin role. Layer inside
/// [`require_auth`].
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    require_role(Role::Admin, request, next).await
}

/// Axum middleware: requires at least the editor role. Layer inside
/// [`require_auth`].
pub async fn require_editor(request: Request, next: Next) -> Result<Response, AppError> {
    require_role(Role::Editor, request, next).await
}

/// Checks the authenticated role against an operation's minimum.
async fn require_role(
    required: Role,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthenticatedUser>()
        .ok_or(AuthError::MissingToken)?;

    if !user.0.role.permits(required) {
        return Err(AppError::Forbidden(format!(
            "requires the {required} role or above"
        )));
    }

    Ok(next.run(request).await)
}
