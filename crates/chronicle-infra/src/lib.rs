//! Infrastructure implementations for Chronicle.
//!
//! Concrete [`LlmProvider`](chronicle_core::llm::provider::LlmProvider)
//! clients for the remote model, the provider factory, API key resolution,
//! and the configuration file loader.

pub mod config;
pub mod llm;
pub mod secret;
