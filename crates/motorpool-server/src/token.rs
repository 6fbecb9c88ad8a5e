use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use motorpool_core::AppError;
use motorpool_core::models::Profile;

/// Validity window of an issued bearer token.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Signing configuration for the token service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl AuthConfig {
    /// Read configuration from environment variables.
    ///
    /// - `MOTORPOOL_JWT_SECRET` (required, non-empty)
    ///
    /// A missing or empty secret is a fatal misconfiguration: the server
    /// must never fall back to issuing unsigned or weakly-signed tokens.
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_secret = std::env::var("MOTORPOOL_JWT_SECRET").map_err(|_| {
            AppError::ConfigError(
                "MOTORPOOL_JWT_SECRET not set. Refusing to start without a signing secret.".into(),
            )
        })?;

        if jwt_secret.is_empty() {
            return Err(AppError::ConfigError(
                "MOTORPOOL_JWT_SECRET must not be empty".into(),
            ));
        }

        Ok(Self { jwt_secret })
    }
}

/// Claim set embedded in every issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Administrator email.
    pub sub: String,
    /// Role used by the authorization middleware.
    pub role: Profile,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Issues and verifies HS256-signed bearer tokens.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        if config.jwt_secret.is_empty() {
            return Err(AppError::ConfigError(
                "JWT signing secret must not be empty".into(),
            ));
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        })
    }

    /// Issue a token for the given administrator identity, valid for
    /// [`TOKEN_TTL_HOURS`] from now.
    pub fn issue(&self, email: &str, profile: Profile) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: email.to_string(),
            role: profile,
            iat: now.timestamp(),
            exp: (now + TimeDelta::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AppError::TokenError(e.to_string()))
    }

    /// Verify signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding, &Validation::new(Algorithm::HS256))
            .map(|data| data.claims)
            .map_err(|e| AppError::TokenError(e.to_string()))
    }
}
