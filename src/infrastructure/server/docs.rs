use super::dto::{ChatRequest, ChatResponse, ErrorResponse, ModelInfoResponse};
use super::routes;
use crate::domain::types::IncomingMessage;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(routes::chat::chat_handler, routes::model_info::model_info_handler),
    components(
        schemas(
            ChatRequest,
            ChatResponse,
            ErrorResponse,
            ModelInfoResponse,
            IncomingMessage
        )
    ),
    tags(
        (name = "chat", description = "Forward a conversation to the local model runtime"),
        (name = "model", description = "Metadata for the currently bound model")
    )
)]
pub(super) struct ApiDoc;
