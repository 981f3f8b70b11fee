//! Region and category endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::taxonomy::{Category, CreateNamedEntry, Region},
};

use super::AuthenticatedUser;

/// List regions
#[utoipa::path(
    get,
    path = "/regions",
    tag = "taxonomy",
    responses((status = 200, description = "List of regions", body = Vec<Region>))
)]
pub async fn list_regions(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Region>>> {
    Ok(Json(state.services.catalog.list_regions().await?))
}

/// Create a region (staff only)
#[utoipa::path(
    post,
    path = "/regions",
    tag = "taxonomy",
    security(("bearer_auth" = [])),
    request_body = CreateNamedEntry,
    responses(
        (status = 201, description = "Region created", body = Region),
        (status = 403, description = "Staff privileges required"),
        (status = 409, description = "Name already exists")
    )
)]
pub async fn create_region(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateNamedEntry>,
) -> AppResult<(StatusCode, Json<Region>)> {
    request.validate()?;
    let caller = user.caller();
    let region = state.services.catalog.create_region(&caller, &request.name).await?;
    Ok((StatusCode::CREATED, Json(region)))
}

/// Delete a region and its attractions (staff only)
#[utoipa::path(
    delete,
    path = "/regions/{id}",
    tag = "taxonomy",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Region ID")),
    responses(
        (status = 204, description = "Region deleted"),
        (status = 403, description = "Staff privileges required"),
        (status = 404, description = "Region not found")
    )
)]
pub async fn delete_region(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let caller = user.caller();
    state.services.catalog.delete_region(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List categories
#[utoipa::path(
    get,
    path = "/categories",
    tag = "taxonomy",
    responses((status = 200, description = "List of categories", body = Vec<Category>))
)]
pub async fn list_categories(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Category>>> {
    Ok(Json(state.services.catalog.list_categories().await?))
}

/// Create a category (staff only)
#[utoipa::path(
    post,
    path = "/categories",
    tag = "taxonomy",
    security(("bearer_auth" = [])),
    request_body = CreateNamedEntry,
    responses(
        (status = 201, description = "Category created", body = Category),
        (status = 403, description = "Staff privileges required"),
        (status = 409, description = "Name already exists")
    )
)]
pub async fn create_category(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateNamedEntry>,
) -> AppResult<(StatusCode, Json<Category>)> {
    request.validate()?;
    let caller = user.caller();
    let category = state
        .services
        .catalog
        .create_category(&caller, &request.name)
        .await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// Delete a category and its attractions (staff only)
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "taxonomy",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 403, description = "Staff privileges required"),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let caller = user.caller();
    state.services.catalog.delete_category(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
