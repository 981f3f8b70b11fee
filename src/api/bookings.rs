//! Booking endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::booking::{Booking, CreateBooking},
};

use super::AuthenticatedUser;

/// Payment result
#[derive(Serialize, ToSchema)]
pub struct PayResponse {
    pub status: String,
    pub booking: Booking,
}

/// List the caller's own bookings
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The caller's bookings", body = Vec<Booking>),
        (status = 401, description = "Not authenticated")
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<Vec<Booking>>> {
    let caller = user.caller();
    let bookings = state.services.bookings.list(&caller).await?;
    Ok(Json(bookings))
}

/// Create a booking with a server-computed price
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = Booking),
        (status = 400, description = "Invalid people_count"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Route not found")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<Booking>)> {
    let caller = user.caller();
    let booking = state.services.bookings.create(&caller, &request).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Mark an owned booking as paid (placeholder status flip, no gateway)
#[utoipa::path(
    post,
    path = "/bookings/{id}/pay",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "Booking paid", body = PayResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Booking not found (including bookings owned by others)")
    )
)]
pub async fn pay_booking(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<PayResponse>> {
    let caller = user.caller();
    let booking = state.services.bookings.mark_paid(&caller, id).await?;

    Ok(Json(PayResponse {
        status: "payment successful".to_string(),
        booking,
    }))
}
