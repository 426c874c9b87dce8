//! HTTP request handlers.

pub mod generate;
pub mod health;
