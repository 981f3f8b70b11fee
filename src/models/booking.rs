//! Booking model and related types

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Booking payment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Paid,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Paid => "paid",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "paid" => Ok(BookingStatus::Paid),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

/// Internal row structure for booking queries
#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub id: i32,
    pub user_id: i32,
    pub route_id: i32,
    pub route_title: String,
    pub date: NaiveDate,
    pub people_count: i32,
    pub total_price: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Booking {
            id: row.id,
            user_id: row.user_id,
            route_id: row.route_id,
            route_title: row.route_title,
            date: row.date,
            people_count: row.people_count,
            total_price: row.total_price,
            status: row.status.parse().unwrap_or(BookingStatus::Pending),
            created_at: row.created_at,
        }
    }
}

/// Booking with route title for display.
///
/// `total_price` and `status` are server-computed and never accepted from
/// client input.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub route_id: i32,
    pub route_title: String,
    pub date: NaiveDate,
    pub people_count: i32,
    #[schema(value_type = String)]
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Create booking request. Price and status fields are deliberately not
/// representable here.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateBooking {
    pub route: i32,
    pub date: NaiveDate,
    /// Defaults to 1 when omitted; must be at least 1
    pub people_count: Option<i32>,
}
