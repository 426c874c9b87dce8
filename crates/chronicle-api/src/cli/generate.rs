//! One-shot `prompt` and `generate` commands.
//!
//! Both read a JSON request body from a file or stdin and run it through
//! the same parsing and validation as the HTTP handlers.

use std::path::Path;

use anyhow::Context;
use serde_json::{Map, Value};
use tokio::io::AsyncReadExt;

use chronicle_core::category::render_prompt;
use chronicle_types::generation::Category;

use crate::http::extractors::lenient_json::parse_fields;
use crate::http::handlers::generate::result_body;
use crate::state::AppState;

/// Read the request body from `input`, or stdin when `None`.
pub async fn read_fields(input: Option<&Path>) -> anyhow::Result<Map<String, Value>> {
    let bytes = match input {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("failed to read stdin")?;
            buf
        }
    };
    Ok(parse_fields(&bytes))
}

/// `chronicle prompt <category>`: print the rendered prompt.
pub async fn print_prompt(category: Category, input: Option<&Path>) -> anyhow::Result<()> {
    let fields = read_fields(input).await?;
    let prompt = render_prompt(category, fields)?;
    println!("{prompt}");
    Ok(())
}

/// `chronicle generate <category>`: call the model and print the JSON result.
pub async fn generate(state: &AppState, category: Category, input: Option<&Path>) -> anyhow::Result<()> {
    let fields = read_fields(input).await?;
    let prompt = render_prompt(category, fields)?;

    let text = state.complete(&prompt).await?;
    let body = result_body(category.result_key(), text);
    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
