use super::config::JwtConfig;
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifetime of tokens minted by [`JwtAuth::create_access_token`], in seconds.
pub const ACCESS_TOKEN_TTL: i64 = 60 * 60 * 24 * 7;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// User id
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

/// HS256 verifier with no server-side token store.
///
/// Tokens are issued by the auth service; [`JwtAuth::create_access_token`]
/// exists for tests and tooling that share the secret.
#[derive(Clone)]
pub struct JwtAuth {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtAuth {
    pub fn new(config: &JwtConfig) -> Self {
        let secret = config.secret.as_bytes();
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn create_access_token(&self, user_id: Uuid) -> jsonwebtoken::errors::Result<String> {
        self.create_token(user_id, ACCESS_TOKEN_TTL)
    }

    pub fn create_token(
        &self,
        user_id: Uuid,
        ttl_seconds: i64,
    ) -> jsonwebtoken::errors::Result<String> {
        let now = Utc::now();
        let claims = JwtClaims {
            sub: user_id.to_string(),
            exp: (now + Duration::seconds(ttl_seconds)).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify_token(&self, token: &str) -> jsonwebtoken::errors::Result<JwtClaims> {
        decode::<JwtClaims>(token, &self.decoding, &self.validation).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-that-is-at-least-32-characters";

    fn auth() -> JwtAuth {
        JwtAuth::new(&JwtConfig::new(SECRET))
    }

    #[test]
    fn test_token_round_trip_keeps_subject() {
        let user_id = Uuid::new_v4();
        let token = auth().create_access_token(user_id).unwrap();

        let claims = auth().verify_token(&token).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expired_token_rejected() {
        let token = auth().create_token(Uuid::new_v4(), -3600).unwrap();
        assert!(auth().verify_token(&token).is_err());
    }

    #[test]
    fn test_token_signed_with_other_secret_rejected() {
        let other = JwtAuth::new(&JwtConfig::new("another-secret-that-is-also-32-chars-long"));
        let token = other.create_access_token(Uuid::new_v4()).unwrap();
        assert!(auth().verify_token(&token).is_err());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(auth().verify_token("not.a.jwt").is_err());
    }
}
