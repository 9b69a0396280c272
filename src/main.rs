//! # TZ Unrest Scanner
//!
//! A single-run pipeline that scans public news syndication feeds for
//! political-unrest reports mentioning Northern-Tanzania travel corridors
//! (Kilimanjaro, Arusha, Manyara, Ngorongoro, Serengeti, Tarangire) and
//! writes two files:
//!
//! - `latest.json`: structured entries for the site
//! - `latest.txt`: SMS-style lines for copy/paste to SMS
//!
//! ## Usage
//!
//! ```sh
//! tz_unrest_scanner -o web/data
//! ```
//!
//! ## Architecture
//!
//! Five sequential stages, no feedback loops:
//! 1. **Query Builder**: expand fixed search phrases into feed URLs
//! 2. **Feed Fetcher**: retrieve and parse each feed, one at a time
//! 3. **Relevance Filter**: keep items matching keyword AND location
//! 4. **Dedup & Recency**: drop repeated link+title hashes and items older
//!    than 72 hours
//! 5. **Formatter/Writer**: sort newest first, write JSON digest and text
//!
//! Timestamps are rendered in a fixed reference zone (EST). A hard-coded
//! coverage cutoff turns runs after it into no-ops so stale data is never
//! refreshed past the watch period.

use clap::Parser;
use std::error::Error;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod context;
mod feeds;
mod filter;
mod models;
mod outputs;
mod pipeline;
mod queries;
mod utils;

use cli::Cli;
use context::RunContext;
use models::RawItem;
use outputs::{json, sms};
use utils::ensure_writable_dir;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let args = Cli::parse();
    let ctx = RunContext::new(args.output_dir);
    info!(now = %ctx.now, output_dir = %ctx.output_dir, "unrest scanner starting up");

    // Scheduled no-op, not an error: after the cutoff the existing output
    // files are left untouched.
    if ctx.outside_coverage() {
        warn!(
            now = %ctx.now,
            coverage_end = %ctx.coverage_end,
            "Outside the configured coverage window; exiting without changes"
        );
        return Ok(());
    }

    if let Err(e) = ensure_writable_dir(&ctx.output_dir).await {
        error!(
            path = %ctx.output_dir,
            error = %e,
            "Output directory is not writable (fix perms or choose a different path)"
        );
        return Err(e);
    }

    // ---- Fetch all feeds, strictly one at a time ----
    let mut items: Vec<RawItem> = Vec::new();
    for url in queries::feed_urls() {
        let fetched = feeds::fetch_items(&url).await;
        items.extend(fetched);
    }
    info!(count = items.len(), "Collected feed items");

    // ---- Filter, dedupe, window, sort ----
    let entries = pipeline::relevant_entries(items, &ctx);

    // ---- Write both outputs from the same final list ----
    let json_path = json::write_digest(&entries, &ctx).await?;
    let text_path = sms::write_lines(&entries, &ctx).await?;

    info!(
        relevant = entries.len(),
        json = %json_path,
        text = %text_path,
        "Wrote relevant items"
    );

    Ok(())
}
