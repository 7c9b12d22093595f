//! Standalone binary to resolve the canonical prompt of a parsed request.
//!
//! Reads a JSON document in the serving layer's parsed-request shape and
//! prints the canonical prompt together with its byte length. Handy for
//! inspecting what downstream prefix-cache logic will see for a request.

use anyhow::{Context, Result};
use prompt_extract::{prompt_length, prompt_string, InferenceRequest};
use tracing::debug;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let path = std::env::args()
        .nth(1)
        .context("usage: extract-prompt <request.json>")?;
    let raw =
        std::fs::read_to_string(&path).with_context(|| format!("failed to read {}", path))?;
    let request: InferenceRequest = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a parsed inference request", path))?;
    debug!(path = %path, "loaded parsed request");

    let prompt = prompt_string(Some(&request))?;
    let length = prompt_length(Some(&request))?;

    println!("prompt: {}", prompt);
    println!("length: {} bytes", length);
    Ok(())
}
