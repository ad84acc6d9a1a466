//! Account-related database queries.

use sqlx::PgPool;
use uuid::Uuid;

use super::AuthError;
use crate::models::account::{Account, Role};

const ACCOUNT_COLUMNS: &str = "id, first_name, last_name, age, gender, contact_number, \
     email, username, password_hash, role, address, is_active, created_at, updated_at";

/// Field values for a new account. The password arrives pre-hashed.
#[derive(Debug)]
pub struct NewAccount<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub age: i32,
    pub gender: &'a str,
    pub contact_number: &'a str,
    pub email: &'a str,
    pub username: &'a str,
    pub password_hash: &'a str,
    pub role: Role,
    pub address: &'a str,
    pub is_active: bool,
}

/// Partial update of an account. `None` fields keep their current value.
#[derive(Debug, Default)]
pub struct AccountChanges<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub age: Option<i32>,
    pub gender: Option<&'a str>,
    pub contact_number: Option<&'a str>,
    pub email: Option<&'a str>,
    pub username: Option<&'a str>,
    pub password_hash: Option<&'a str>,
    pub role: Option<Role>,
    pub address: Option<&'a str>,
    pub is_active: Option<bool>,
}

/// Fetch an account by email.
pub async fn find_account_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<Account>, AuthError> {
    let account = sqlx::query_as::<_, Account>(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await?;
    Ok(account)
}

/// Insert a new account, returning the stored row.
pub async fn create_account(pool: &PgPool, new: NewAccount<'_>) -> Result<Account, AuthError> {
    let account = sqlx::query_as::<_, Account>(&format!(
        "INSERT INTO accounts \
             (first_name, last_name, age, gender, contact_number, email, username, \
              password_hash, role, address, is_active) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11) \
         RETURNING {ACCOUNT_COLUMNS}"
    ))
    .bind(new.first_name)
    .bind(new.last_name)
    .bind(new.age)
    .bind(new.gender)
    .bind(new.contact_number)
    .bind(new.email)
    .bind(new.username)
    .bind(new.password_hash)
    .bind(new.role)
    .bind(new.address)
    .bind(new.is_active)
    .fetch_one(pool)
    .await?;
    Ok(account)
}

/// List all accounts, oldest first.
pub async fn list_accounts(pool: &PgPool) -> Result<Vec<Account>, AuthError> {
    let accounts = sqlx::query_as::<_, Account>(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM accounts ORDER BY created_at"
    ))
    .fetch_all(pool)
    .await?;
    Ok(accounts)
}

/// Apply a partial update, returning the updated row. `None` when no account
/// has the given id.
pub async fn update_account(
    pool: &PgPool,
    id: Uuid,
    changes: AccountChanges<'_>,
) -> Result<Option<Account>, AuthError> {
    let account = sqlx::query_as::<_, Account>(&format!(
        "UPDATE accounts SET \
             first_name = COALESCE($2, first_name), \
             last_name = COALESCE($3, last_name), \
             age = COALESCE($4, age), \
             gender = COALESCE($5, gender), \
             contact_number = COALESCE($6, contact_number), \
             email = COALESCE($7, email), \
             username = COALESCE($8, username), \
             password_hash = COALESCE($9, password_hash), \
             role = COALESCE($10, role), \
             address = COALESCE($11, address), \
             is_active = COALESCE($12, is_active), \
             updated_at = now() \
         WHERE id = $1 \
         RETURNING {ACCOUNT_COLUMNS}"
    ))
    .bind(id)
    .bind(changes.first_name)
    .bind(changes.last_name)
    .bind(changes.age)
    .bind(changes.gender)
    .bind(changes.contact_number)
    .bind(changes.email)
    .bind(changes.username)
    .bind(changes.password_hash)
    .bind(changes.role)
    .bind(changes.address)
    .bind(changes.is_active)
    .fetch_optional(pool)
    .await?;
    Ok(account)
}

/// Delete an account. Returns whether a row was removed.
pub async fn delete_account(pool: &PgPool, id: Uuid) -> Result<bool, AuthError> {
    let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() > 0)
}

/// Check whether an email is already registered, optionally excluding one
/// account (for updates).
pub async fn email_taken(
    pool: &PgPool,
    email: &str,
    exclude: Option<Uuid>,
) -> Result<bool, AuthError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM accounts WHERE email = $1 AND ($2::uuid IS NULL OR id <> $2))",
    )
    .bind(email)
    .bind(exclude)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}

/// Check whether a username is already taken, optionally excluding one
/// account (for updates).
pub async fn username_taken(
    pool: &PgPool,
    username: &str,
    exclude: Option<Uuid>,
) -> Result<bool, AuthError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM accounts WHERE username = $1 AND ($2::uuid IS NULL OR id <> $2))",
    )
    .bind(username)
    .bind(exclude)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}
