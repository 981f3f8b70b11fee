//! Review model, moderation decision and visibility scope

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::user::Caller;
use crate::error::AppError;

/// Review moderation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for ReviewStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ReviewStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ReviewStatus::Pending),
            "approved" => Ok(ReviewStatus::Approved),
            "rejected" => Ok(ReviewStatus::Rejected),
            _ => Err(format!("Invalid review status: {}", s)),
        }
    }
}

/// A staff moderation decision. Only `approved` and `rejected` are valid;
/// anything else is a validation error and must leave the review untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationDecision {
    Approved,
    Rejected,
}

impl ModerationDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationDecision::Approved => "approved",
            ModerationDecision::Rejected => "rejected",
        }
    }

    /// Parse a client-supplied decision string
    pub fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "approved" => Ok(ModerationDecision::Approved),
            "rejected" => Ok(ModerationDecision::Rejected),
            _ => Err(AppError::Validation("Invalid status".to_string())),
        }
    }
}

/// Internal row structure for review queries
#[derive(Debug, Clone, FromRow)]
pub struct ReviewRow {
    pub id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub attraction_id: i32,
    pub attraction_name: String,
    pub rating: i16,
    pub text: String,
    pub status: String,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ReviewRow> for Review {
    fn from(row: ReviewRow) -> Self {
        Review {
            id: row.id,
            author_id: row.author_id,
            author_name: row.author_name,
            attraction_id: row.attraction_id,
            attraction_name: row.attraction_name,
            rating: row.rating,
            text: row.text,
            status: row.status.parse().unwrap_or(ReviewStatus::Pending),
            rejection_reason: row.rejection_reason,
            created_at: row.created_at,
        }
    }
}

/// Review with author and attraction names for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: i32,
    pub author_id: i32,
    pub author_name: String,
    pub attraction_id: i32,
    pub attraction_name: String,
    pub rating: i16,
    pub text: String,
    pub status: ReviewStatus,
    pub rejection_reason: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Submit review request. Status and author are never accepted from input;
/// both are forced server-side.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SubmitReview {
    pub attraction: i32,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,
    pub text: String,
}

/// Moderate review request (staff only)
#[derive(Debug, Deserialize, ToSchema)]
pub struct ModerateReview {
    pub status: String,
    pub reason: Option<String>,
}

/// Review list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ReviewQuery {
    /// Restrict to one attraction
    pub attraction: Option<i32>,
}

/// Which reviews a caller may observe. A storage-independent predicate over
/// (status, author, caller privilege), translated to SQL by the repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewScope {
    /// Staff: every review, unmoderated included
    All,
    /// Authenticated: approved reviews plus the caller's own in any state
    ApprovedOrOwn(i32),
    /// Anonymous: approved reviews only
    ApprovedOnly,
}

impl ReviewScope {
    pub fn for_caller(caller: &Caller) -> Self {
        match caller {
            Caller::Staff { .. } => ReviewScope::All,
            Caller::User { id } => ReviewScope::ApprovedOrOwn(*id),
            Caller::Anonymous => ReviewScope::ApprovedOnly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_parse() {
        assert_eq!(
            ModerationDecision::parse("approved").unwrap(),
            ModerationDecision::Approved
        );
        assert_eq!(
            ModerationDecision::parse("rejected").unwrap(),
            ModerationDecision::Rejected
        );
    }

    #[test]
    fn test_decision_parse_invalid() {
        for bad in ["pending", "Approved", "deleted", ""] {
            let err = ModerationDecision::parse(bad).unwrap_err();
            match err {
                AppError::Validation(msg) => assert_eq!(msg, "Invalid status"),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_scope_for_caller() {
        assert_eq!(
            ReviewScope::for_caller(&Caller::Anonymous),
            ReviewScope::ApprovedOnly
        );
        assert_eq!(
            ReviewScope::for_caller(&Caller::User { id: 9 }),
            ReviewScope::ApprovedOrOwn(9)
        );
        assert_eq!(
            ReviewScope::for_caller(&Caller::Staff { id: 1 }),
            ReviewScope::All
        );
    }
}
