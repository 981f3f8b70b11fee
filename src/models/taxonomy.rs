//! Region and category reference tables

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Region grouping for attractions
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Region {
    pub id: i32,
    pub name: String,
}

/// Attraction category
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

/// Create request shared by both reference tables
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNamedEntry {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
}
