//! HTTP API layer for Chronicle.
//!
//! Axum-based JSON API: one POST route per generation category plus a
//! health check, with permissive CORS.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
