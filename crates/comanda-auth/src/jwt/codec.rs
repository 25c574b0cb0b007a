//! Token issuance and verification.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use comanda_core::config::AuthConfig;
use comanda_core::error::AppError;

use super::claims::Claims;

/// Why a token failed verification.
///
/// Never serialized to clients; the authentication gate downgrades every
/// variant to one opaque unauthenticated response and keeps the detail in
/// the logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TokenError {
    /// The signature does not match the token contents.
    #[error("token signature is invalid")]
    InvalidSignature,
    /// The token is not structurally a JWT.
    #[error("token is malformed")]
    MalformedToken,
    /// The token's expiry has passed.
    #[error("token has expired")]
    Expired,
    /// Header, algorithm, or claims have an unexpected shape.
    #[error("token format is unsupported")]
    UnsupportedFormat,
}

/// Signs and verifies compact self-contained tokens.
///
/// Verification is a pure function of `(token, now, secret)` — there is
/// no revocation state to consult.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_minutes: i64,
}

impl std::fmt::Debug for TokenCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

impl TokenCodec {
    /// Creates a new codec from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Expiry is inclusive of `exp`; clock skew is not compensated.
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            ttl_minutes: config.token_ttl_minutes as i64,
        }
    }

    /// Issues a signed token for the given subject with the configured TTL.
    pub fn issue(&self, subject: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + chrono::Duration::minutes(self.ttl_minutes)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))
    }

    /// Verifies a token and returns its claims.
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidToken => TokenError::MalformedToken,
                _ => TokenError::UnsupportedFormat,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec(secret: &str, ttl_minutes: u64) -> TokenCodec {
        TokenCodec::new(&AuthConfig {
            jwt_secret: secret.to_string(),
            token_ttl_minutes: ttl_minutes,
            seed_default_admin: false,
        })
    }

    #[test]
    fn test_round_trip() {
        let codec = codec("test-secret", 60);
        let token = codec.issue("maria").unwrap();
        let claims = codec.verify(&token).unwrap();
        assert_eq!(claims.sub, "maria");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_expired_token() {
        let codec = codec("test-secret", 60);
        let now = Utc::now().timestamp();
        let stale = Claims {
            sub: "maria".to_string(),
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &stale,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(codec.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = codec("secret-a", 60);
        let verifier = codec("secret-b", 60);
        let token = issuer.issue("maria").unwrap();

        assert_eq!(verifier.verify(&token), Err(TokenError::InvalidSignature));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let codec = codec("test-secret", 60);
        let token = codec.issue("maria").unwrap();

        // Replace the tail of the signature segment.
        let mut tampered = token[..token.len() - 4].to_string();
        tampered.push_str("AAAA");

        assert!(codec.verify(&tampered).is_err());
    }

    #[test]
    fn test_garbage_is_malformed() {
        let codec = codec("test-secret", 60);
        assert_eq!(
            codec.verify("not-a-token"),
            Err(TokenError::MalformedToken)
        );
    }

    #[test]
    fn test_unexpected_algorithm_rejected() {
        let codec = codec("test-secret", 60);
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "maria".to_string(),
            iat: now,
            exp: now + 3600,
        };
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert_eq!(codec.verify(&token), Err(TokenError::UnsupportedFormat));
    }
}
