//! Request extractors.

pub mod lenient_json;
