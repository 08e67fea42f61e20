use axum::Json;
use tracing::instrument;

use super::MessageResponse;

#[instrument]
pub async fn hello_world() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello, World!"))
}
