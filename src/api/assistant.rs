//! Chat recommendation endpoint

use axum::{extract::State, Json};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{error::AppResult, services::assistant::AskResponse};

/// Chat request
#[derive(Deserialize, ToSchema)]
pub struct AskRequest {
    pub message: String,
}

/// Ask the travel assistant for recommendations.
///
/// Always succeeds from the caller's perspective: provider outages degrade
/// the reply to a fixed message while catalogue matches are still returned.
#[utoipa::path(
    post,
    path = "/chat/ask",
    tag = "chat",
    request_body = AskRequest,
    responses(
        (status = 200, description = "Generated reply with recommendations", body = AskResponse)
    )
)]
pub async fn ask(
    State(state): State<crate::AppState>,
    Json(request): Json<AskRequest>,
) -> AppResult<Json<AskResponse>> {
    let response = state.services.assistant.ask(&request.message).await?;
    Ok(Json(response))
}
