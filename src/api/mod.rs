//! API handlers for Tourvia REST endpoints

pub mod assistant;
pub mod attractions;
pub mod auth;
pub mod bookings;
pub mod health;
pub mod openapi;
pub mod reviews;
pub mod routes;
pub mod stats;
pub mod taxonomy;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::{
    error::AppError,
    models::user::{Caller, UserClaims},
    AppState,
};

/// Extractor for authenticated user from JWT token
pub struct AuthenticatedUser(pub UserClaims);

/// Extractor for endpoints that serve anonymous callers too: yields the
/// claims when a valid bearer token is present, `None` when the header is
/// absent. A present-but-invalid token is still an error.
pub struct OptionalUser(pub Option<UserClaims>);

fn claims_from_parts(parts: &Parts, state: &AppState) -> Result<Option<UserClaims>, AppError> {
    let auth_header = match parts.headers.get(AUTHORIZATION) {
        None => return Ok(None),
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::Authentication("Invalid authorization header".to_string()))?,
    };

    if !auth_header.starts_with("Bearer ") {
        return Err(AppError::Authentication(
            "Invalid authorization header format".to_string(),
        ));
    }

    let token = &auth_header[7..];
    let claims = UserClaims::from_token(token, &state.config.auth.jwt_secret)
        .map_err(|e| AppError::Authentication(e.to_string()))?;
    Ok(Some(claims))
}

#[async_trait]
impl FromRequestParts<AppState> for AuthenticatedUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        claims_from_parts(parts, state)?
            .map(AuthenticatedUser)
            .ok_or_else(|| AppError::Authentication("Missing authorization header".to_string()))
    }
}

#[async_trait]
impl FromRequestParts<AppState> for OptionalUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(OptionalUser(claims_from_parts(parts, state)?))
    }
}

impl AuthenticatedUser {
    pub fn caller(&self) -> Caller {
        Caller::from_claims(Some(&self.0))
    }
}

impl OptionalUser {
    pub fn caller(&self) -> Caller {
        Caller::from_claims(self.0.as_ref())
    }
}
