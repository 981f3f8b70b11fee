//! Review submission, listing and moderation endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::review::{ModerateReview, Review, ReviewQuery, SubmitReview},
};

use super::{AuthenticatedUser, OptionalUser};

/// Moderation result
#[derive(Serialize, ToSchema)]
pub struct ModerateResponse {
    /// e.g. "Review approved"
    pub status: String,
    pub review: Review,
}

/// List reviews visible to the caller, newest first
#[utoipa::path(
    get,
    path = "/reviews",
    tag = "reviews",
    params(ReviewQuery),
    responses(
        (status = 200, description = "Visible reviews", body = Vec<Review>)
    )
)]
pub async fn list_reviews(
    State(state): State<crate::AppState>,
    user: OptionalUser,
    Query(query): Query<ReviewQuery>,
) -> AppResult<Json<Vec<Review>>> {
    let caller = user.caller();
    let reviews = state.services.reviews.list(&caller, query.attraction).await?;
    Ok(Json(reviews))
}

/// Submit a review; it starts out pending moderation
#[utoipa::path(
    post,
    path = "/reviews",
    tag = "reviews",
    security(("bearer_auth" = [])),
    request_body = SubmitReview,
    responses(
        (status = 201, description = "Review submitted", body = Review),
        (status = 400, description = "Invalid rating"),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Attraction not found")
    )
)]
pub async fn submit_review(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Json(request): Json<SubmitReview>,
) -> AppResult<(StatusCode, Json<Review>)> {
    let caller = user.caller();
    let review = state.services.reviews.submit(&caller, &request).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// Moderate a review (staff only)
#[utoipa::path(
    post,
    path = "/reviews/{id}/moderate",
    tag = "reviews",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Review ID")),
    request_body = ModerateReview,
    responses(
        (status = 200, description = "Review moderated", body = ModerateResponse),
        (status = 400, description = "Invalid status"),
        (status = 403, description = "Staff privileges required"),
        (status = 404, description = "Review not found")
    )
)]
pub async fn moderate_review(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<ModerateReview>,
) -> AppResult<Json<ModerateResponse>> {
    let caller = user.caller();
    let review = state.services.reviews.moderate(&caller, id, &request).await?;

    Ok(Json(ModerateResponse {
        status: format!("Review {}", review.status),
        review,
    }))
}
