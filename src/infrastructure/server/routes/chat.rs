use super::super::dto::{ChatRequest, ChatResponse, ErrorResponse};
use super::super::state::ServerState;
use crate::infrastructure::model::ModelClient;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::{error, info};

const INVALID_REQUEST: &str = "Invalid request. Please provide a list of messages and model name.";

#[utoipa::path(
    post,
    path = "/chat",
    tag = "chat",
    request_body = ChatRequest,
    responses(
        (status = 200, description = "Reply text or a business-logic error object", body = ChatResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn chat_handler<C: ModelClient>(
    State(state): State<Arc<ServerState<C>>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Json(payload) = payload.map_err(|rejection| {
        error!(%rejection, "Rejecting /chat request with malformed body");
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: INVALID_REQUEST.to_string(),
            }),
        )
    })?;

    info!(
        model = payload.model.as_str(),
        messages = payload.messages.len(),
        "Received /chat request"
    );

    let gateway = state.gateway();
    match gateway.chat(payload.messages, &payload.model).await {
        Ok(reply) => {
            info!("Chat request completed successfully");
            Ok(Json(ChatResponse::Reply(reply)))
        }
        Err(err) => {
            error!(%err, "Chat request failed");
            Ok(Json(ChatResponse::Error(ErrorResponse {
                error: err.to_string(),
            })))
        }
    }
}
