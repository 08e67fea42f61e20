use axum::Json;
use tracing::instrument;

use super::MessageResponse;

#[instrument]
pub async fn health_check() -> Json<MessageResponse> {
    Json(MessageResponse::new("I'm here!"))
}
