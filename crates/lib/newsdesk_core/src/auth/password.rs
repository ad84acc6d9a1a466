//! Password hashing via bcrypt.

use super::AuthError;

/// bcrypt cost factor.
const BCRYPT_COST: u32 = 10;

/// Hash a password with bcrypt (cost 10).
///
/// Empty passwords are rejected before hashing.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    if password.is_empty() {
        return Err(AuthError::Validation("Password is required".into()));
    }
    bcrypt::hash(password, BCRYPT_COST)
        .map_err(|e| AuthError::Internal(format!("bcrypt hash: {e}")))
}

/// Verify a password against a bcrypt hash.
///
/// A mismatch is `Ok(false)`; only an unreadable stored hash is an error.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AuthError> {
    bcrypt::verify(password, hash).map_err(|e| AuthError::Internal(format!("bcrypt verify: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_then_verify_round_trip() {
        let hash = hash_password("Secret1").expect("hash");
        assert!(hash.starts_with("$2"));
        assert!(verify_password("Secret1", &hash).expect("verify"));
        assert!(!verify_password("wrong", &hash).expect("verify"));
    }

    #[test]
    fn hashes_are_salted() {
        let a = hash_password("Secret1").expect("hash");
        let b = hash_password("Secret1").expect("hash");
        assert_ne!(a, b);
    }

    #[test]
    fn empty_password_is_rejected() {
        let err = hash_password("").expect_err("must reject");
        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!("Validation error: Password is required", err.to_string());
    }

    #[test]
    fn garbage_hash_is_an_error() {
        assert!(verify_password("Secret1", "not-a-bcrypt-hash").is_err());
    }
}
