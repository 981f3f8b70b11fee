//! Bookings repository for database operations

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::booking::{Booking, BookingRow},
};

const BOOKING_COLUMNS: &str = r#"
    b.id, b.user_id, b.route_id, rt.title as route_title,
    b.date, b.people_count, b.total_price, b.status, b.created_at
"#;

const BOOKING_FROM: &str = r#"
    FROM bookings b
    JOIN routes rt ON b.route_id = rt.id
"#;

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List a user's own bookings, newest first. There is no wider scope:
    /// bookings are only ever reachable through their owner.
    pub async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<Booking>> {
        let query = format!(
            "SELECT {} {} WHERE b.user_id = $1 ORDER BY b.created_at DESC, b.id DESC",
            BOOKING_COLUMNS, BOOKING_FROM
        );
        let rows = sqlx::query_as::<_, BookingRow>(&query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(Booking::from).collect())
    }

    /// Create a booking with a server-computed price and `pending` status
    pub async fn create(
        &self,
        user_id: i32,
        route_id: i32,
        date: NaiveDate,
        people_count: i32,
        total_price: Decimal,
    ) -> AppResult<Booking> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO bookings (user_id, route_id, date, people_count, total_price, status)
            VALUES ($1, $2, $3, $4, $5, 'pending')
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(route_id)
        .bind(date)
        .bind(people_count)
        .bind(total_price)
        .fetch_one(&self.pool)
        .await?;

        self.get_owned(id, user_id).await
    }

    /// Get a booking only if owned by the given user; a foreign booking is
    /// simply not found.
    pub async fn get_owned(&self, id: i32, user_id: i32) -> AppResult<Booking> {
        let query = format!(
            "SELECT {} {} WHERE b.id = $1 AND b.user_id = $2",
            BOOKING_COLUMNS, BOOKING_FROM
        );
        let row = sqlx::query_as::<_, BookingRow>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking with id {} not found", id)))?;
        Ok(row.into())
    }

    /// Transition an owned booking to `paid` as one atomic conditional
    /// update. Ownership scoping doubles as the existence check.
    pub async fn mark_paid(&self, id: i32, user_id: i32) -> AppResult<Booking> {
        let result = sqlx::query(
            "UPDATE bookings SET status = 'paid' WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Booking with id {} not found", id)));
        }

        self.get_owned(id, user_id).await
    }
}
