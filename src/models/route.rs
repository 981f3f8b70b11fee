//! Route and route stop models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Route model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Route {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub duration_days: i32,
    /// Display string, e.g. "$200-300"
    pub budget_range: String,
    pub difficulty: String,
    pub distance_km: i32,
    pub image: Option<String>,
}

/// Stop on a route, ordered by day number
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RouteStop {
    pub id: i32,
    pub route_id: i32,
    pub day_number: i32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub duration_label: String,
}

/// Route with its stops for display (stops always sorted by day number)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RouteDetails {
    #[serde(flatten)]
    pub route: Route,
    pub stops: Vec<RouteStop>,
}

/// Create route request (staff only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoute {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    pub description: String,
    #[validate(range(min = 1, message = "Duration must be at least 1 day"))]
    pub duration_days: i32,
    pub budget_range: String,
    pub difficulty: String,
    #[validate(range(min = 0, message = "Distance must not be negative"))]
    pub distance_km: i32,
    pub image: Option<String>,
}

/// Update route request (staff only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRoute {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Duration must be at least 1 day"))]
    pub duration_days: Option<i32>,
    pub budget_range: Option<String>,
    pub difficulty: Option<String>,
    #[validate(range(min = 0, message = "Distance must not be negative"))]
    pub distance_km: Option<i32>,
    pub image: Option<String>,
}

/// Create route stop request (staff only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRouteStop {
    #[validate(range(min = 1, message = "Day number must be at least 1"))]
    pub day_number: i32,
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub duration_label: Option<String>,
}
