//! Forgiving JSON body extractor.
//!
//! Unlike `axum::Json`, [`LenientJson`] never rejects a request. A missing
//! body, a missing or wrong `Content-Type`, malformed JSON, and any JSON
//! value other than an object all produce an empty field map, so every
//! field takes its default and validation reports what is missing.

use std::convert::Infallible;

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde_json::{Map, Value};

use chronicle_core::category::into_fields;

/// The request body as a JSON object's fields.
#[derive(Debug, Default)]
pub struct LenientJson(pub Map<String, Value>);

impl<S> FromRequest<S> for LenientJson
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::debug!(error = %err, "Unreadable request body, treating as empty");
                return Ok(Self::default());
            }
        };

        Ok(Self(parse_fields(&bytes)))
    }
}

/// Parse `bytes` as a JSON object, falling back to an empty map.
pub fn parse_fields(bytes: &[u8]) -> Map<String, Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Map::new();
    }

    match serde_json::from_slice::<Value>(bytes) {
        Ok(value) => into_fields(value),
        Err(err) => {
            tracing::debug!(error = %err, "Malformed JSON body, treating as empty");
            Map::new()
        }
    }
}
