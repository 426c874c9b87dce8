//! LlmProvider trait definition.
//!
//! This is the core abstraction that all remote model clients implement.

use chronicle_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for LLM provider backends (Gemini, OpenAI-compatible, test fakes).
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition). Since that
/// makes the trait non-object-safe, runtime selection goes through
/// [`super::box_provider::BoxLlmProvider`].
///
/// Implementations live in chronicle-infra (e.g., `GeminiProvider`).
pub trait LlmProvider: Send + Sync {
    /// Human-readable provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
