use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header, request::Parts},
};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{config::AppConfig, error::ApiError};

/// Role accepted on the loan submission route.
pub const ROLE_USER: &str = "user";
/// Role accepted on every `/loans/admin/*` route.
pub const ROLE_ADMIN: &str = "admin";

/// Claims
///
/// The payload structure expected inside a bearer token. Signed by the shared
/// secret and validated on every authenticated request. Unlike a session
/// lookup, the role travels inside the token itself, so authorization needs
/// no store round-trip.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (sub): the UUID of the user.
    pub sub: Uuid,
    /// The user's role, 'user' or 'admin'. Drives role-based access control.
    pub role: String,
    /// Expiration time (exp): timestamp after which the token is rejected.
    pub exp: usize,
    /// Issued at (iat).
    pub iat: usize,
}

impl Claims {
    /// Builds a claims record valid for `ttl_secs` from now.
    pub fn new(sub: Uuid, role: impl Into<String>, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();
        Self {
            sub,
            role: role.into(),
            iat: now as usize,
            exp: (now + ttl_secs) as usize,
        }
    }
}

/// Signs a claims record into a compact token string. The service itself never
/// issues tokens (the signup flow lives elsewhere), but tests and tooling do.
pub fn issue_token(claims: &Claims, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::default(),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// AuthUser
///
/// The resolved identity of an authenticated request, produced by the
/// extractor below and passed explicitly into handlers as an argument. No
/// ambient request-scoped state is involved: if a handler needs the caller's
/// identity or role, it takes an `AuthUser` parameter.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub role: String,
}

impl AuthUser {
    /// Role authorizer: succeeds iff this request's role is a member of the
    /// accepted set fixed at route registration. Strictly read-only over the
    /// claims; the rejection message names the rejected role.
    pub fn require_role(&self, allowed: &[&str]) -> Result<(), ApiError> {
        if allowed.contains(&self.role.as_str()) {
            Ok(())
        } else {
            Err(ApiError::Forbidden {
                role: self.role.clone(),
            })
        }
    }
}

/// AuthUser Extractor Implementation
///
/// Implements Axum's FromRequestParts trait, making AuthUser usable as a
/// function argument in any authenticated handler. This keeps authentication
/// (the extractor) cleanly separated from business logic (the handler).
///
/// The process:
/// 1. Token extraction: `Authorization: Bearer <token>` header.
/// 2. Decoding and validation against the configured shared secret, with
///    expiry checking always active.
///
/// Rejection: `Unauthenticated` (401) when no credential is present at all,
/// `InvalidToken` (401) when one is present but fails verification.
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    // Allows the extractor to pull the AppConfig (for the signing secret).
    AppConfig: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let config = AppConfig::from_ref(state);

        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthenticated)?;

        // Some clients send the raw token without the "Bearer " prefix;
        // accept both forms.
        let token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;

        let token_data = decode::<Claims>(token, &decoding_key, &validation)
            // Expired signature, bad signature, malformed token: all collapse
            // to the same rejection so the response leaks nothing.
            .map_err(|_| ApiError::InvalidToken)?;

        Ok(AuthUser {
            id: token_data.claims.sub,
            role: token_data.claims.role,
        })
    }
}
