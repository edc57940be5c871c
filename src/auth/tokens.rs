/**
 * Auth Token Service
 *
 * This module handles issuance and verification of the short-lived signed
 * tokens that substitute for a password after initial authentication.
 *
 * # Token Format
 *
 * Tokens are HS256 JWTs carrying the user id (`sub`), issue time (`iat`),
 * and expiry (`exp`). They are stateless: nothing is persisted, and a token
 * is valid exactly until its encoded expiry. Verification runs with zero
 * clock leeway so the validity window is exact.
 *
 * # Construction
 *
 * `TokenService` is built once at startup from the configured secret and
 * TTL and lives in `AppState`; no code reads the secret from the
 * environment at call time.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Verification failure modes.
///
/// The two cases are distinguished here for logging, but the auth gate maps
/// both to the same silent 401.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// Valid signature, expiry in the past
    #[error("token expired")]
    Expired,
    /// Malformed token or bad signature
    #[error("invalid token")]
    Invalid,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id
    sub: String,
    /// Issued at time (Unix timestamp)
    iat: i64,
    /// Expiration time (Unix timestamp)
    exp: i64,
}

/// Issues and verifies signed auth tokens.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl_secs: i64,
}

impl TokenService {
    /// Create a token service with the given signing secret and validity
    /// window in seconds.
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            secret: secret.to_string(),
            ttl_secs,
        }
    }

    /// Issue a token for a user with the configured TTL.
    pub fn issue(&self, user_id: i64) -> Result<String, jsonwebtoken::errors::Error> {
        self.issue_with_ttl(user_id, self.ttl_secs)
    }

    /// Issue a token for a user with an explicit TTL in seconds.
    pub fn issue_with_ttl(
        &self,
        user_id: i64,
        ttl_secs: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now().timestamp();

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + ttl_secs,
        };

        let key = EncodingKey::from_secret(self.secret.as_ref());
        encode(&Header::default(), &claims, &key)
    }

    /// Verify a token and return the user id it encodes.
    ///
    /// # Errors
    ///
    /// - `TokenError::Expired` for a well-signed token past its expiry
    /// - `TokenError::Invalid` for anything else (malformed token, bad
    ///   signature, unparsable user id)
    pub fn verify(&self, token: &str) -> Result<i64, TokenError> {
        let key = DecodingKey::from_secret(self.secret.as_ref());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        })?;

        data.claims.sub.parse::<i64>().map_err(|_| TokenError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 600)
    }

    #[test]
    fn test_issue_token() {
        let token = service().issue(42).unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_verify_round_trip() {
        let tokens = service();
        let token = tokens.issue(42).unwrap();
        assert_eq!(tokens.verify(&token).unwrap(), 42);
    }

    #[test]
    fn test_verify_expired_token() {
        let tokens = service();
        let token = tokens.issue_with_ttl(42, -120).unwrap();
        assert_eq!(tokens.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_verify_malformed_token() {
        assert_eq!(
            service().verify("not.a.token"),
            Err(TokenError::Invalid)
        );
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = TokenService::new("other-secret", 600).issue(42).unwrap();
        assert_eq!(service().verify(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_expired_and_invalid_are_distinguished() {
        let tokens = service();
        let expired = tokens.issue_with_ttl(1, -120).unwrap();
        let forged = TokenService::new("other-secret", 600).issue(1).unwrap();
        assert_eq!(tokens.verify(&expired), Err(TokenError::Expired));
        assert_eq!(tokens.verify(&forged), Err(TokenError::Invalid));
    }
}
