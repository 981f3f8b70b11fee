//! User model, JWT claims and the caller policy type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

/// Full user model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    /// Hashed password (argon2)
    #[serde(skip_serializing)]
    pub password: String,
    pub is_staff: bool,
    pub created_at: DateTime<Utc>,
}

/// Public user representation for API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserInfo {
    pub id: i32,
    pub username: String,
    pub email: Option<String>,
    pub is_staff: bool,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        UserInfo {
            id: user.id,
            username: user.username,
            email: user.email,
            is_staff: user.is_staff,
        }
    }
}

/// Registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterUser {
    #[validate(length(min = 3, message = "Username must be at least 3 characters"))]
    pub username: String,
    #[validate(length(min = 4, message = "Password must be at least 4 characters"))]
    pub password: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
}

/// JWT Claims for authenticated users
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub user_id: i32,
    pub is_staff: bool,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

/// The identity initiating an operation, derived once per request.
///
/// All permission and visibility decisions go through this type rather than
/// ad-hoc flag checks at each endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    User { id: i32 },
    Staff { id: i32 },
}

impl Caller {
    /// Derive the caller from optional JWT claims
    pub fn from_claims(claims: Option<&UserClaims>) -> Self {
        match claims {
            None => Caller::Anonymous,
            Some(c) if c.is_staff => Caller::Staff { id: c.user_id },
            Some(c) => Caller::User { id: c.user_id },
        }
    }

    pub fn user_id(&self) -> Option<i32> {
        match self {
            Caller::Anonymous => None,
            Caller::User { id } | Caller::Staff { id } => Some(*id),
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Caller::Staff { .. })
    }

    /// Require an authenticated caller, returning its user id
    pub fn require_authenticated(&self) -> Result<i32, AppError> {
        self.user_id()
            .ok_or_else(|| AppError::Authentication("Authentication required".to_string()))
    }

    /// Require staff privilege, returning the staff user id
    pub fn require_staff(&self) -> Result<i32, AppError> {
        match self {
            Caller::Staff { id } => Ok(*id),
            _ => Err(AppError::Authorization(
                "Staff privileges required".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(user_id: i32, is_staff: bool) -> UserClaims {
        UserClaims {
            sub: "test".to_string(),
            user_id,
            is_staff,
            exp: 0,
            iat: 0,
        }
    }

    #[test]
    fn test_caller_from_claims() {
        assert_eq!(Caller::from_claims(None), Caller::Anonymous);
        assert_eq!(
            Caller::from_claims(Some(&claims(7, false))),
            Caller::User { id: 7 }
        );
        assert_eq!(
            Caller::from_claims(Some(&claims(3, true))),
            Caller::Staff { id: 3 }
        );
    }

    #[test]
    fn test_require_authenticated() {
        assert!(Caller::Anonymous.require_authenticated().is_err());
        assert_eq!(Caller::User { id: 5 }.require_authenticated().unwrap(), 5);
        assert_eq!(Caller::Staff { id: 2 }.require_authenticated().unwrap(), 2);
    }

    #[test]
    fn test_require_staff() {
        assert!(Caller::Anonymous.require_staff().is_err());
        assert!(Caller::User { id: 5 }.require_staff().is_err());
        assert_eq!(Caller::Staff { id: 2 }.require_staff().unwrap(), 2);
    }
}
