use axum::{extract::State, routing::post, Json, Router};
use tracing::{info, instrument};

use super::dto::{ChatRequest, ChatResponse};
use super::services::answer;
use crate::{error::ApiError, extract::AppJson, state::AppState};

pub fn chat_routes() -> Router<AppState> {
    Router::new().route("/chat", post(chat))
}

#[instrument(skip(state, body))]
pub async fn chat(
    State(state): State<AppState>,
    AppJson(body): AppJson<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let response = answer(&state, &body.query).await?;
    info!(query_len = body.query.len(), "chat answered");
    Ok(Json(ChatResponse { response }))
}
