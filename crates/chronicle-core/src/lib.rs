//! Generation logic and provider trait definitions for Chronicle.
//!
//! This crate defines the [`llm::provider::LlmProvider`] port that the
//! infrastructure layer implements, the per-category prompt templates and
//! validation rules, and the [`gateway::ModelGateway`] that turns a prompt
//! into generated text. It depends only on `chronicle-types` and never on
//! any HTTP client or server crate.

pub mod category;
pub mod gateway;
pub mod llm;
pub mod prompt;
