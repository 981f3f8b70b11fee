//! Booking lifecycle and pricing service

use rust_decimal::Decimal;

use crate::{
    config::BookingsConfig,
    error::{AppError, AppResult},
    models::{
        booking::{Booking, CreateBooking},
        user::Caller,
    },
    repository::Repository,
};

/// Compute the booking total from the flat per-person rate.
///
/// Route budget ranges are display strings and intentionally play no part
/// in pricing.
fn compute_total_price(price_per_person: u32, people_count: i32) -> Decimal {
    Decimal::from(price_per_person) * Decimal::from(people_count)
}

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    config: BookingsConfig,
}

impl BookingsService {
    pub fn new(repository: Repository, config: BookingsConfig) -> Self {
        Self { repository, config }
    }

    /// List the caller's own bookings. There is no staff-sees-all variant
    /// for bookings.
    pub async fn list(&self, caller: &Caller) -> AppResult<Vec<Booking>> {
        let user_id = caller.require_authenticated()?;
        self.repository.bookings.list_for_user(user_id).await
    }

    /// Create a booking. The price and status are always server-computed;
    /// the owner is always the caller.
    pub async fn create(&self, caller: &Caller, request: &CreateBooking) -> AppResult<Booking> {
        let user_id = caller.require_authenticated()?;

        let people_count = request.people_count.unwrap_or(1);
        if people_count < 1 {
            return Err(AppError::Validation(
                "people_count must be at least 1".to_string(),
            ));
        }

        // The route must exist
        self.repository.routes.get_by_id(request.route).await?;

        let total_price = compute_total_price(self.config.price_per_person, people_count);

        let booking = self
            .repository
            .bookings
            .create(user_id, request.route, request.date, people_count, total_price)
            .await?;

        tracing::info!(
            "Booking {} created by user {} for route {} ({} people, total {})",
            booking.id,
            user_id,
            request.route,
            people_count,
            total_price
        );
        Ok(booking)
    }

    /// Mark an owned booking as paid. A booking owned by someone else is
    /// out of the caller's query scope entirely, so this reports not-found
    /// rather than forbidden. No payment gateway is involved; this is a
    /// status flip.
    pub async fn mark_paid(&self, caller: &Caller, booking_id: i32) -> AppResult<Booking> {
        let user_id = caller.require_authenticated()?;
        let booking = self.repository.bookings.mark_paid(booking_id, user_id).await?;
        tracing::info!("Booking {} marked paid by user {}", booking_id, user_id);
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_price_is_rate_times_people() {
        assert_eq!(compute_total_price(100, 3), Decimal::from(300));
        assert_eq!(compute_total_price(100, 1), Decimal::from(100));
        assert_eq!(compute_total_price(250, 4), Decimal::from(1000));
    }
}
