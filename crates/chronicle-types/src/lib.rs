//! Shared types for Chronicle.
//!
//! This crate contains the data shapes used across the service: the
//! per-category generation requests, provider-neutral LLM request/response
//! types, service configuration, and the error enums.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod error;
pub mod generation;
pub mod llm;
