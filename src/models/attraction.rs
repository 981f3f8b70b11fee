//! Attraction model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Attraction publication status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AttractionStatus {
    Draft,
    Active,
}

impl AttractionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttractionStatus::Draft => "draft",
            AttractionStatus::Active => "active",
        }
    }
}

impl std::fmt::Display for AttractionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AttractionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "draft" => Ok(AttractionStatus::Draft),
            "active" => Ok(AttractionStatus::Active),
            _ => Err(format!("Invalid attraction status: {}", s)),
        }
    }
}

/// Internal row structure for attraction queries (status as String,
/// rating/reviews_count computed by the query)
#[derive(Debug, Clone, FromRow)]
pub struct AttractionRow {
    pub id: i32,
    pub name: String,
    pub region_id: i32,
    pub category_id: i32,
    pub region_name: String,
    pub category_name: String,
    pub description: String,
    pub image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub visitors_count: i32,
    pub status: String,
    pub entrance_fee: Option<String>,
    pub best_time: Option<String>,
    pub rating: f64,
    pub reviews_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<AttractionRow> for Attraction {
    fn from(row: AttractionRow) -> Self {
        Attraction {
            id: row.id,
            name: row.name,
            region_id: row.region_id,
            category_id: row.category_id,
            region_name: row.region_name,
            category_name: row.category_name,
            description: row.description,
            image: row.image,
            latitude: row.latitude,
            longitude: row.longitude,
            visitors_count: row.visitors_count,
            status: row.status.parse().unwrap_or(AttractionStatus::Draft),
            entrance_fee: row.entrance_fee,
            best_time: row.best_time,
            rating: row.rating,
            reviews_count: row.reviews_count,
            created_at: row.created_at,
        }
    }
}

/// Attraction with computed display fields.
///
/// `rating` is the mean rating over approved reviews rounded to one decimal
/// (0 when there are none) and is recomputed on every read.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Attraction {
    pub id: i32,
    pub name: String,
    pub region_id: i32,
    pub category_id: i32,
    pub region_name: String,
    pub category_name: String,
    pub description: String,
    pub image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub visitors_count: i32,
    pub status: AttractionStatus,
    pub entrance_fee: Option<String>,
    pub best_time: Option<String>,
    pub rating: f64,
    pub reviews_count: i64,
    pub created_at: DateTime<Utc>,
}

/// Create attraction request (staff only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateAttraction {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: String,
    pub region_id: i32,
    pub category_id: i32,
    pub description: String,
    pub image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub status: Option<AttractionStatus>,
    pub entrance_fee: Option<String>,
    pub best_time: Option<String>,
}

/// Update attraction request (staff only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateAttraction {
    #[validate(length(min = 1, max = 200, message = "Name must be 1-200 characters"))]
    pub name: Option<String>,
    pub region_id: Option<i32>,
    pub category_id: Option<i32>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub visitors_count: Option<i32>,
    pub status: Option<AttractionStatus>,
    pub entrance_fee: Option<String>,
    pub best_time: Option<String>,
}

/// Attraction list query parameters
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct AttractionQuery {
    /// Filter by region name (case-insensitive contains)
    pub region: Option<String>,
    /// Filter by category name (case-insensitive contains)
    pub category: Option<String>,
    /// Search in name and description
    pub search: Option<String>,
    /// Filter by status (effective for staff; others only ever see active)
    pub status: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        assert_eq!("draft".parse::<AttractionStatus>().unwrap().as_str(), "draft");
        assert_eq!("Active".parse::<AttractionStatus>().unwrap().as_str(), "active");
        assert!("published".parse::<AttractionStatus>().is_err());
    }
}
