//! Attraction catalogue endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppResult,
    models::attraction::{Attraction, AttractionQuery, CreateAttraction, UpdateAttraction},
};

use super::{AuthenticatedUser, OptionalUser};

/// Paginated response wrapper
#[derive(Serialize, ToSchema)]
pub struct PaginatedResponse<T>
where
    T: for<'a> ToSchema<'a>,
{
    /// List of items
    pub items: Vec<T>,
    /// Total number of items
    pub total: i64,
    /// Current page number
    pub page: i64,
    /// Items per page
    pub per_page: i64,
}

/// Favorite toggle result
#[derive(Serialize, ToSchema)]
pub struct FavoriteResponse {
    /// "added" or "removed"
    pub status: String,
}

/// List attractions visible to the caller
#[utoipa::path(
    get,
    path = "/attractions",
    tag = "attractions",
    params(AttractionQuery),
    responses(
        (status = 200, description = "List of attractions", body = PaginatedResponse<Attraction>)
    )
)]
pub async fn list_attractions(
    State(state): State<crate::AppState>,
    user: OptionalUser,
    Query(query): Query<AttractionQuery>,
) -> AppResult<Json<PaginatedResponse<Attraction>>> {
    let caller = user.caller();
    let (items, total) = state.services.catalog.list_attractions(&caller, &query).await?;

    Ok(Json(PaginatedResponse {
        items,
        total,
        page: query.page.unwrap_or(1),
        per_page: query.per_page.unwrap_or(20),
    }))
}

/// Get attraction details
#[utoipa::path(
    get,
    path = "/attractions/{id}",
    tag = "attractions",
    params(("id" = i32, Path, description = "Attraction ID")),
    responses(
        (status = 200, description = "Attraction details", body = Attraction),
        (status = 404, description = "Attraction not found")
    )
)]
pub async fn get_attraction(
    State(state): State<crate::AppState>,
    user: OptionalUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Attraction>> {
    let caller = user.caller();
    let attraction = state.services.catalog.get_attraction(&caller, id).await?;
    Ok(Json(attraction))
}

/// Create a new attraction (staff only)
#[utoipa::path(
    post,
    path = "/attractions",
    tag = "attractions",
    security(("bearer_auth" = [])),
    request_body = CreateAttraction,
    responses(
        (status = 201, description = "Attraction created", body = Attraction),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Staff privileges required")
    )
)]
pub async fn create_attraction(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateAttraction>,
) -> AppResult<(StatusCode, Json<Attraction>)> {
    request.validate()?;
    let caller = user.caller();
    let created = state
        .services
        .catalog
        .create_attraction(&caller, &request)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an attraction (staff only)
#[utoipa::path(
    put,
    path = "/attractions/{id}",
    tag = "attractions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Attraction ID")),
    request_body = UpdateAttraction,
    responses(
        (status = 200, description = "Attraction updated", body = Attraction),
        (status = 403, description = "Staff privileges required"),
        (status = 404, description = "Attraction not found")
    )
)]
pub async fn update_attraction(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateAttraction>,
) -> AppResult<Json<Attraction>> {
    request.validate()?;
    let caller = user.caller();
    let updated = state
        .services
        .catalog
        .update_attraction(&caller, id, &request)
        .await?;
    Ok(Json(updated))
}

/// Delete an attraction (staff only)
#[utoipa::path(
    delete,
    path = "/attractions/{id}",
    tag = "attractions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Attraction ID")),
    responses(
        (status = 204, description = "Attraction deleted"),
        (status = 403, description = "Staff privileges required"),
        (status = 404, description = "Attraction not found")
    )
)]
pub async fn delete_attraction(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let caller = user.caller();
    state.services.catalog.delete_attraction(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Toggle the attraction in the caller's favorites
#[utoipa::path(
    post,
    path = "/attractions/{id}/favorite",
    tag = "attractions",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Attraction ID")),
    responses(
        (status = 200, description = "Favorite toggled", body = FavoriteResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Attraction not found")
    )
)]
pub async fn toggle_favorite(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<FavoriteResponse>> {
    let caller = user.caller();
    let added = state.services.catalog.toggle_favorite(&caller, id).await?;
    Ok(Json(FavoriteResponse {
        status: if added { "added" } else { "removed" }.to_string(),
    }))
}
