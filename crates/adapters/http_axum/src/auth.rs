//! HS256 bearer-token verification.
//!
//! Tokens carry a [`Claims`] payload. Only the signature, expiry and role are
//! checked here; user accounts live in another service.

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hotelhub_app::ports::Authenticator;
use hotelhub_domain::error::{AuthError, HotelError};
use hotelhub_domain::principal::{Principal, Role};

/// JWT claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the user's id.
    pub sub: i64,
    pub username: String,
    /// `"admin"` or `"user"`.
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4).
    pub jti: String,
}

/// Configuration for token signing and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Lifetime of tokens minted by [`JwtAuthenticator::issue`].
    pub token_ttl_mins: i64,
}

/// [`Authenticator`] backed by HS256 JWTs.
pub struct JwtAuthenticator {
    token_ttl_mins: i64,
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtAuthenticator {
    #[must_use]
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            token_ttl_mins: config.token_ttl_mins,
            encoding: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.secret.as_bytes()),
        }
    }

    /// Mint a token for `principal`.
    ///
    /// # Errors
    ///
    /// Returns the signing error from `jsonwebtoken`.
    pub fn issue(&self, principal: &Principal) -> Result<String, jsonwebtoken::errors::Error> {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: principal.user_id,
            username: principal.username.clone(),
            role: principal.role.as_str().to_string(),
            exp: now + self.token_ttl_mins * 60,
            iat: now,
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }
}

impl Authenticator for JwtAuthenticator {
    fn authenticate(&self, token: &str) -> Result<Principal, HotelError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(
            |err| {
                tracing::debug!(error = %err, "bearer token rejected");
                AuthError::InvalidToken
            },
        )?;

        let role: Role = data.claims.role.parse()?;
        Ok(Principal {
            user_id: data.claims.sub,
            username: data.claims.username,
            role,
        })
    }
}
