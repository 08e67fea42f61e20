use axum::{routing::get, Router};
use current_time::current_time;
use health_check::health_check;
use hello_world::hello_world;
use serde::{Deserialize, Serialize};
use tower_http::trace::TraceLayer;

pub mod current_time;
pub mod health_check;
pub mod hello_world;

/// Body shared by the routes that only answer with a message.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

pub fn register_routes() -> Router {
    Router::new()
        .route("/hello_world", get(hello_world))
        .route("/current_time", get(current_time))
        .route("/healthcheck", get(health_check))
        .layer(TraceLayer::new_for_http())
}
