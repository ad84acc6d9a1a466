//! Account management request handlers.
//!
//! Registration is public; listing, updating, and deleting accounts are
//! admin-only (enforced by middleware on the router).

use axum::Json;
use axum::extract::{Extension, Path};
use axum::http::StatusCode;
use tracing::info;
use uuid::Uuid;

use newsdesk_core::auth::password::hash_password;
use newsdesk_core::auth::queries::{self, AccountChanges, NewAccount};

use crate::error::{AppError, AppResult};
use crate::middleware::db_gate::Db;
use crate::models::{AccountResponse, CreateAccountRequest, UpdateAccountRequest};

/// `GET /api/users`: list all accounts.
pub async fn list_accounts_handler(
    Extension(Db(pool)): Extension<Db>,
) -> AppResult<Json<Vec<AccountResponse>>> {
    let accounts = queries::list_accounts(&pool).await?;
    Ok(Json(
        accounts.into_iter().map(AccountResponse::from).collect(),
    ))
}

/// `POST /api/users`: register a new account.
///
/// The password is hashed before any database work; a missing or empty
/// password is rejected with a validation error.
pub async fn create_account_handler(
    Extension(Db(pool)): Extension<Db>,
    Json(body): Json<CreateAccountRequest>,
) -> AppResult<(StatusCode, Json<AccountResponse>)> {
    let password_hash = hash_password(&body.password)?;

    if queries::email_taken(&pool, &body.email, None).await? {
        return Err(AppError::Validation("Email already registered".into()));
    }
    if queries::username_taken(&pool, &body.username, None).await? {
        return Err(AppError::Validation("Username already taken".into()));
    }

    let account = queries::create_account(
        &pool,
        NewAccount {
            first_name: &body.first_name,
            last_name: &body.last_name,
            age: body.age,
            gender: &body.gender,
            contact_number: &body.contact_number,
            email: &body.email,
            username: &body.username,
            password_hash: &password_hash,
            role: body.role,
            address: &body.address,
            is_active: body.is_active,
        },
    )
    .await?;

    info!(account_id = %account.id, role = %account.role, "account created");

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// `PUT /api/users/{id}`: partial update.
///
/// A supplied password is re-hashed; a changed email or username
/// re-validates uniqueness against every other account.
pub async fn update_account_handler(
    Extension(Db(pool)): Extension<Db>,
    Path(id): Path<Uuid>,
    Json(body): Json<UpdateAccountRequest>,
) -> AppResult<Json<AccountResponse>> {
    if let Some(email) = &body.email {
        if queries::email_taken(&pool, email, Some(id)).await? {
            return Err(AppError::Validation("Email already registered".into()));
        }
    }
    if let Some(username) = &body.username {
        if queries::username_taken(&pool, username, Some(id)).await? {
            return Err(AppError::Validation("Username already taken".into()));
        }
    }

    let password_hash = match body.password.as_deref() {
        Some(password) => Some(hash_password(password)?),
        None => None,
    };

    let account = queries::update_account(
        &pool,
        id,
        AccountChanges {
            first_name: body.first_name.as_deref(),
            last_name: body.last_name.as_deref(),
            age: body.age,
            gender: body.gender.as_deref(),
            contact_number: body.contact_number.as_deref(),
            email: body.email.as_deref(),
            username: body.username.as_deref(),
            password_hash: password_hash.as_deref(),
            role: body.role,
            address: body.address.as_deref(),
            is_active: body.is_active,
        },
    )
    .await?
    .ok_or_else(|| AppError::NotFound(format!("no account with id {id}")))?;

    info!(account_id = %id, "account updated");

    Ok(Json(account.into()))
}

/// `DELETE /api/users/{id}`: remove an account (articles cascade).
pub async fn delete_account_handler(
    Extension(Db(pool)): Extension<Db>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    if !queries::delete_account(&pool, id).await? {
        return Err(AppError::NotFound(format!("no account with id {id}")));
    }

    info!(account_id = %id, "account deleted");

    Ok(Json(serde_json::json!({
        "message": "User deleted successfully"
    })))
}
