//! # Current Time Handler
//!
//! Greets the caller named by the `name` query parameter and stamps the reply
//! with the wall-clock time, in nanoseconds since the Unix epoch, read while
//! the request is handled.

use crate::{extractors::name_query::NameQuery, utils::clock::now_nanos};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Stands in for a missing or empty `name`.
pub const ANONYMOUS_USER: &str = "anonymous";

#[derive(Deserialize, Serialize, Debug)]
pub struct CurrentTimeResponse {
    pub message: String,
    pub timestamp: i64,
}

#[instrument(skip_all)]
pub async fn current_time(query: NameQuery) -> Json<CurrentTimeResponse> {
    let user = resolve_user(query.name.as_deref());
    debug!(user = %user, "Resolved current_time user.");

    Json(CurrentTimeResponse {
        message: format!("Hello {user}"),
        timestamp: now_nanos(),
    })
}

/// The name is used verbatim unless it is absent or empty.
fn resolve_user(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => ANONYMOUS_USER,
    }
}
