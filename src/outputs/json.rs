//! JSON digest output.

use crate::context::RunContext;
use crate::models::{Digest, Entry};
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Serialize the digest document for the final entry list.
pub fn render_digest(entries: &[Entry], ctx: &RunContext) -> Result<String, serde_json::Error> {
    let digest = Digest {
        generated_at: ctx.now.to_rfc3339(),
        count: entries.len(),
        entries,
    };
    serde_json::to_string_pretty(&digest)
}

/// Write the digest to `<output_dir>/latest.json`, fully replacing any
/// previous run's file.
///
/// # Returns
///
/// The path written, for the run summary line.
#[instrument(level = "info", skip_all, fields(count = entries.len()))]
pub async fn write_digest(entries: &[Entry], ctx: &RunContext) -> Result<String, Box<dyn Error>> {
    let body = render_digest(entries, ctx)?;
    let path = format!("{}/latest.json", ctx.output_dir.trim_end_matches('/'));
    fs::write(&path, body).await?;
    info!(path = %path, "Wrote JSON digest");
    Ok(path)
}
