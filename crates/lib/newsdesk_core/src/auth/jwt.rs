//! Session token generation and verification (JWT).

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use super::AuthError;
use crate::models::account::{Role, TokenClaims};

/// Session token lifetime: 1 hour.
const SESSION_TOKEN_EXPIRY_SECS: i64 = 60 * 60;

/// Generate a signed session token (HS256, 1 hour expiry).
pub fn generate_session_token(
    account_id: Uuid,
    email: &str,
    role: Role,
    secret: &[u8],
) -> Result<String, AuthError> {
    let now = Utc::now();
    let claims = TokenClaims {
        sub: account_id.to_string(),
        email: email.to_string(),
        role,
        exp: (now + Duration::seconds(SESSION_TOKEN_EXPIRY_SECS)).timestamp(),
        iat: now.timestamp(),
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret),
    )
    .map_err(|e| AuthError::Internal(format!("jwt encode: {e}")))
}

/// Verify a session token, returning the claims on success.
///
/// Failures keep their kind: an elapsed expiry, a signature that does not
/// match the secret, and anything structurally unreadable are distinct
/// errors.
pub fn verify_session_token(token: &str, secret: &[u8]) -> Result<TokenClaims, AuthError> {
    let key = DecodingKey::from_secret(secret);
    let mut validation = Validation::default();
    validation.validate_exp = true;
    decode::<TokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            _ => AuthError::MalformedToken,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    #[test]
    fn generate_then_verify() {
        let id = Uuid::new_v4();
        let token = generate_session_token(id, "a@x.com", Role::Editor, SECRET).expect("generate");
        let claims = verify_session_token(&token, SECRET).expect("verify");

        assert_eq!(id.to_string(), claims.sub);
        assert_eq!("a@x.com", claims.email);
        assert_eq!(Role::Editor, claims.role);
        assert!(claims.exp > claims.iat);
        assert_eq!(3600, claims.exp - claims.iat);
    }

    #[test]
    fn wrong_secret_is_invalid_signature() {
        let token = generate_session_token(Uuid::new_v4(), "a@x.com", Role::Admin, SECRET)
            .expect("generate");
        let err = verify_session_token(&token, b"other-secret").expect_err("must fail");
        assert!(matches!(err, AuthError::InvalidSignature));
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        // Expiry well past the default leeway.
        let now = Utc::now();
        let claims = TokenClaims {
            sub: Uuid::new_v4().to_string(),
            email: "a@x.com".into(),
            role: Role::Viewer,
            exp: (now - Duration::hours(2)).timestamp(),
            iat: (now - Duration::hours(3)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET),
        )
        .expect("encode");

        let err = verify_session_token(&token, SECRET).expect_err("must fail");
        assert!(matches!(err, AuthError::TokenExpired));
    }

    #[test]
    fn garbage_is_malformed() {
        let err = verify_session_token("not.a.jwt", SECRET).expect_err("must fail");
        assert!(matches!(err, AuthError::MalformedToken));
    }
}
