use thiserror::Error;

use crate::llm::LlmError;

/// A generation request was missing one of its category's required fields.
///
/// The display strings are part of the HTTP contract and are returned
/// verbatim in the `{"error": ...}` body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    IncompleteBackstory,

    #[error("Story prompt is required")]
    MissingStoryPrompt,

    #[error("Missing required fields")]
    IncompleteLore,
}

/// Failure of a single model call as seen by the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Provider(#[from] LlmError),

    #[error("model returned an empty response")]
    EmptyResponse,

    #[error("response blocked by the model's content filter")]
    ContentFiltered,
}

impl GatewayError {
    /// True when the model answered but produced nothing usable.
    pub fn is_empty_output(&self) -> bool {
        matches!(self, GatewayError::EmptyResponse | GatewayError::ContentFiltered)
    }
}
