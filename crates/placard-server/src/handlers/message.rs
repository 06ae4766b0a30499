//! Message API handler.

use std::sync::Arc;

use axum::{extract::State, Json};
use tracing::info;

use crate::dto::MessageResponse;
use crate::ServerState;

/// GET /api/message - Returns the configured message as JSON.
pub async fn get(State(state): State<Arc<ServerState>>) -> Json<MessageResponse> {
    info!("Serving message");
    Json(MessageResponse {
        message: state.config.message.clone(),
    })
}
