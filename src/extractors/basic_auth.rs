//! HTTP basic auth: parse the `Authorization` header and resolve it to a stored user.

use crate::error::{AppError, NOT_AUTHENTICATED};
use crate::models::User;
use crate::service::UserService;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Email and password decoded from a `Basic` authorization header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BasicCredentials {
    pub email: String,
    pub password: String,
}

impl BasicCredentials {
    /// Parse `Basic <base64(email:password)>`. The scheme name is case-insensitive; the password may contain ':'.
    pub fn parse(header_value: &str) -> Option<Self> {
        let (scheme, encoded) = header_value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }
        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (email, password) = decoded.split_once(':')?;
        Some(BasicCredentials {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for BasicCredentials
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(BasicCredentials::parse)
            .ok_or(AppError::Unauthorized(NOT_AUTHENTICATED))
    }
}

/// Extractor for the authenticated user. Rejects with 401 before the handler runs.
#[derive(Clone, Debug)]
pub struct AuthUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let creds = BasicCredentials::from_request_parts(parts, state).await?;
        let user = UserService::authenticate(&state.pool, &creds.email, &creds.password).await?;
        Ok(AuthUser(user))
    }
}
