use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
    RequestPartsExt,
};
use tracing::debug;

const NAME_PARAM: &str = "name";

/// The optional `name` query parameter.
///
/// Only the first `name` entry counts when the parameter repeats. Escapes are
/// decoded leniently (`%zz` stays literal, invalid UTF-8 becomes U+FFFD), and
/// any query that still fails to deserialize counts as having no `name`, so
/// this extractor never rejects a request.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct NameQuery {
    pub name: Option<String>,
}

impl NameQuery {
    fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let name = pairs
            .into_iter()
            .find(|(key, _)| key == NAME_PARAM)
            .map(|(_, value)| value);
        Self { name }
    }
}

impl<S> FromRequestParts<S> for NameQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extract::<Query<Vec<(String, String)>>>().await {
            Ok(Query(pairs)) => Ok(Self::from_pairs(pairs)),
            Err(err) => {
                debug!(error = %err.body_text(), "Ignoring undecodable query string.");
                Ok(Self::default())
            }
        }
    }
}
