//! CLI and HTTP application layer for Chronicle.
//!
//! The `chronicle` binary (see `main.rs`) parses arguments with [`cli`],
//! builds an [`state::AppState`] from configuration, and either serves the
//! [`http`] router or runs a one-shot command.

pub mod cli;
pub mod http;
pub mod state;
