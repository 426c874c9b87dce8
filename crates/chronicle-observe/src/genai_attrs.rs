//! OpenTelemetry GenAI Semantic Convention attribute constants.
//!
//! These follow the OTel GenAI Semantic Conventions specification so model
//! calls are instrumented consistently. Field names containing dots cannot
//! be used as bare identifiers in `tracing` macros, so spans declare them
//! as string literals matching these constants.
//!
//! Span naming convention: `"{operation} {model}"` (e.g., `"generate_content gemini-2.0-flash"`)

// --- Required attributes ---

/// The name of the operation being performed (e.g., "generate_content").
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// The name of the GenAI provider (e.g., "gemini").
pub const GEN_AI_PROVIDER_NAME: &str = "gen_ai.provider.name";

// --- Recommended attributes ---

/// The model ID requested (e.g., "gemini-2.0-flash").
pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";

/// The maximum number of output tokens requested.
pub const GEN_AI_REQUEST_MAX_TOKENS: &str = "gen_ai.request.max_tokens";

/// The number of input tokens consumed.
pub const GEN_AI_USAGE_INPUT_TOKENS: &str = "gen_ai.usage.input_tokens";

/// The number of output tokens generated.
pub const GEN_AI_USAGE_OUTPUT_TOKENS: &str = "gen_ai.usage.output_tokens";

/// The finish reasons for the response (e.g., "end_turn", "content_filter").
pub const GEN_AI_RESPONSE_FINISH_REASONS: &str = "gen_ai.response.finish_reasons";

// --- Operation name values ---

/// Single-prompt content generation.
pub const OP_GENERATE_CONTENT: &str = "generate_content";

// --- Provider name values ---

/// Google Gemini provider identifier.
pub const PROVIDER_GEMINI: &str = "gemini";

/// Generic OpenAI-compatible provider identifier.
pub const PROVIDER_OPENAI_COMPATIBLE: &str = "openai_compatible";
