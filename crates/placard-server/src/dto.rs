use serde::{Deserialize, Serialize};

/// Body of `GET /api/message`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
