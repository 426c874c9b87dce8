//! Observability for Chronicle: tracing subscriber setup with an optional
//! OpenTelemetry bridge, and GenAI semantic-convention attribute names used
//! to instrument model calls.

pub mod genai_attrs;
pub mod tracing_setup;
