//! Authentication service: the login flow, delegating to
//! `newsdesk_core::auth`.

use sqlx::PgPool;
use tracing::{info, warn};

use newsdesk_core::auth::AuthError;
use newsdesk_core::auth::jwt::generate_session_token;
use newsdesk_core::auth::password::verify_password;
use newsdesk_core::auth::queries::find_account_by_email;
use newsdesk_core::models::account::Account;

use crate::error::AppResult;
use crate::models::LoginResponse;

/// Authenticate with email + password, issuing a session token.
pub async fn login(
    pool: &PgPool,
    email: &str,
    password: &str,
    jwt_secret: &[u8],
) -> AppResult<LoginResponse> {
    let found = find_account_by_email(pool, email).await?;
    let account = check_credentials(found, password)?;

    let token = generate_session_token(account.id, &account.email, account.role, jwt_secret)?;

    info!(account_id = %account.id, role = %account.role, "login succeeded");

    Ok(LoginResponse {
        message: "Login successful".into(),
        token,
        role: account.role,
        first_name: account.first_name,
        id: account.id,
    })
}

/// Decides the outcome of a login attempt against the looked-up account.
///
/// Unknown email and wrong password produce the same generic error. An
/// inactive account is reported as its own kind; that check runs before
/// password verification.
fn check_credentials(found: Option<Account>, password: &str) -> Result<Account, AuthError> {
    let account = found.ok_or(AuthError::InvalidCredentials)?;

    if !account.is_active {
        warn!(account_id = %account.id, "login attempt on inactive account");
        return Err(AuthError::AccountDisabled);
    }

    if !verify_password(password, &account.password_hash)? {
        return Err(AuthError::InvalidCredentials);
    }

    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use newsdesk_core::auth::password::hash_password;
    use newsdesk_core::models::account::Role;
    use uuid::Uuid;

    fn account(password: &str, is_active: bool) -> Account {
        Account {
            id: Uuid::new_v4(),
            first_name: "Alice".into(),
            last_name: "Jones".into(),
            age: 31,
            gender: "female".into(),
            contact_number: "555-0100".into(),
            email: "alice@example.com".into(),
            username: "alice".into(),
            password_hash: hash_password(password).expect("hash"),
            role: Role::Editor,
            address: "1 Main St".into(),
            is_active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn unknown_email_is_invalid_credentials() {
        let err = check_credentials(None, "Secret1").expect_err("must fail");
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn wrong_password_is_invalid_credentials() {
        let err =
            check_credentials(Some(account("Secret1", true)), "wrong").expect_err("must fail");
        assert!(matches!(err, AuthError::InvalidCredentials));
    }

    #[test]
    fn inactive_account_is_its_own_error_kind() {
        // Correct password, disabled account: callers must be able to tell
        // this apart from bad credentials.
        let err =
            check_credentials(Some(account("Secret1", false)), "Secret1").expect_err("must fail");
        assert!(matches!(err, AuthError::AccountDisabled));
    }

    #[test]
    fn valid_credentials_pass() {
        let account = check_credentials(Some(account("Secret1", true)), "Secret1").expect("login");
        assert_eq!("alice@example.com", account.email);
    }
}
