//! Admin dashboard endpoints

use axum::{extract::State, Json};

use crate::{error::AppResult, services::stats::StatsResponse};

use super::AuthenticatedUser;

/// Get dashboard statistics (staff only)
#[utoipa::path(
    get,
    path = "/admin/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsResponse),
        (status = 403, description = "Staff privileges required")
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<StatsResponse>> {
    let caller = user.caller();
    let stats = state.services.stats.get_stats(&caller).await?;
    Ok(Json(stats))
}
