//! Route catalogue endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::{
    error::AppResult,
    models::route::{CreateRoute, CreateRouteStop, RouteDetails, RouteStop, UpdateRoute},
};

use super::AuthenticatedUser;

/// List all routes with their stops
#[utoipa::path(
    get,
    path = "/routes",
    tag = "routes",
    responses(
        (status = 200, description = "List of routes", body = Vec<RouteDetails>)
    )
)]
pub async fn list_routes(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<RouteDetails>>> {
    let routes = state.services.routes.list().await?;
    Ok(Json(routes))
}

/// Get route details with ordered stops
#[utoipa::path(
    get,
    path = "/routes/{id}",
    tag = "routes",
    params(("id" = i32, Path, description = "Route ID")),
    responses(
        (status = 200, description = "Route details", body = RouteDetails),
        (status = 404, description = "Route not found")
    )
)]
pub async fn get_route(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<RouteDetails>> {
    let route = state.services.routes.get(id).await?;
    Ok(Json(route))
}

/// Create a route (staff only)
#[utoipa::path(
    post,
    path = "/routes",
    tag = "routes",
    security(("bearer_auth" = [])),
    request_body = CreateRoute,
    responses(
        (status = 201, description = "Route created", body = RouteDetails),
        (status = 400, description = "Invalid input"),
        (status = 403, description = "Staff privileges required")
    )
)]
pub async fn create_route(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Json(request): Json<CreateRoute>,
) -> AppResult<(StatusCode, Json<RouteDetails>)> {
    request.validate()?;
    let caller = user.caller();
    let created = state.services.routes.create(&caller, &request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a route (staff only)
#[utoipa::path(
    put,
    path = "/routes/{id}",
    tag = "routes",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Route ID")),
    request_body = UpdateRoute,
    responses(
        (status = 200, description = "Route updated", body = RouteDetails),
        (status = 403, description = "Staff privileges required"),
        (status = 404, description = "Route not found")
    )
)]
pub async fn update_route(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateRoute>,
) -> AppResult<Json<RouteDetails>> {
    request.validate()?;
    let caller = user.caller();
    let updated = state.services.routes.update(&caller, id, &request).await?;
    Ok(Json(updated))
}

/// Delete a route and its stops (staff only)
#[utoipa::path(
    delete,
    path = "/routes/{id}",
    tag = "routes",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Route ID")),
    responses(
        (status = 204, description = "Route deleted"),
        (status = 403, description = "Staff privileges required"),
        (status = 404, description = "Route not found")
    )
)]
pub async fn delete_route(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    let caller = user.caller();
    state.services.routes.delete(&caller, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Add a stop to a route (staff only)
#[utoipa::path(
    post,
    path = "/routes/{id}/stops",
    tag = "routes",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Route ID")),
    request_body = CreateRouteStop,
    responses(
        (status = 201, description = "Stop created", body = RouteStop),
        (status = 403, description = "Staff privileges required"),
        (status = 404, description = "Route not found")
    )
)]
pub async fn create_route_stop(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<CreateRouteStop>,
) -> AppResult<(StatusCode, Json<RouteStop>)> {
    request.validate()?;
    let caller = user.caller();
    let stop = state.services.routes.create_stop(&caller, id, &request).await?;
    Ok((StatusCode::CREATED, Json(stop)))
}

/// Delete a route stop (staff only)
#[utoipa::path(
    delete,
    path = "/routes/stops/{stop_id}",
    tag = "routes",
    security(("bearer_auth" = [])),
    params(("stop_id" = i32, Path, description = "Route stop ID")),
    responses(
        (status = 204, description = "Stop deleted"),
        (status = 403, description = "Staff privileges required"),
        (status = 404, description = "Stop not found")
    )
)]
pub async fn delete_route_stop(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
    Path(stop_id): Path<i32>,
) -> AppResult<StatusCode> {
    let caller = user.caller();
    state.services.routes.delete_stop(&caller, stop_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
