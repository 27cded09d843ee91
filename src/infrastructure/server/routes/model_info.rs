use super::super::dto::{ErrorResponse, ModelInfoResponse};
use super::super::state::ServerState;
use crate::infrastructure::model::ModelClient;
use axum::Json;
use axum::extract::State;
use std::sync::Arc;
use tracing::debug;

#[utoipa::path(
    get,
    path = "/model-info",
    tag = "model",
    responses(
        (status = 200, description = "Bound model metadata or an uninitialized error", body = ModelInfoResponse)
    )
)]
pub async fn model_info_handler<C: ModelClient>(
    State(state): State<Arc<ServerState<C>>>,
) -> Json<ModelInfoResponse> {
    debug!("Received /model-info request");

    match state.gateway().model_info() {
        Ok(info) => Json(ModelInfoResponse::Info {
            model_name: info.model_name,
            provider: info.provider.to_string(),
        }),
        Err(err) => Json(ModelInfoResponse::Error(ErrorResponse {
            error: err.to_string(),
        })),
    }
}
