//! SMS-style plain-text output.
//!
//! Renders the most recent entries as single copy-pasteable lines:
//!
//! ```text
//! 4:05 PM EST | Arusha | Protest reported near market | example.com
//! ```

use crate::context::RunContext;
use crate::models::Entry;
use std::error::Error;
use tokio::fs;
use tracing::{info, instrument};

/// At most this many lines are written, post-sort.
pub const LINE_CAP: usize = 20;

/// Render the top entries as pipe-separated lines, newline-terminated, with
/// no header or footer.
pub fn render_lines(entries: &[Entry]) -> String {
    entries
        .iter()
        .take(LINE_CAP)
        .map(|e| {
            format!(
                "{} | {} | {} | {}\n",
                e.when_est_hhmm, e.location, e.alert, e.source_short
            )
        })
        .collect()
}

/// Write the SMS lines to `<output_dir>/latest.txt`, fully replacing any
/// previous run's file.
///
/// # Returns
///
/// The path written, for the run summary line.
#[instrument(level = "info", skip_all, fields(count = entries.len().min(LINE_CAP)))]
pub async fn write_lines(entries: &[Entry], ctx: &RunContext) -> Result<String, Box<dyn Error>> {
    let body = render_lines(entries);
    let path = format!("{}/latest.txt", ctx.output_dir.trim_end_matches('/'));
    fs::write(&path, body).await?;
    info!(path = %path, "Wrote SMS lines");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, TimeZone};

    fn entry(n: usize) -> Entry {
        let when = FixedOffset::west_opt(5 * 3600)
            .unwrap()
            .with_ymd_and_hms(2025, 11, 5, 16, 5, 0)
            .unwrap();
        Entry {
            id: format!("id{n}"),
            when,
            when_est_iso: when.to_rfc3339(),
            when_est_hhmm: "4:05 PM EST".to_string(),
            location: "Arusha".to_string(),
            alert: format!("Alert {n}"),
            source: "https://www.example.com/news".to_string(),
            source_short: "example.com".to_string(),
            summary: String::new(),
        }
    }

    #[test]
    fn test_line_format() {
        let lines = render_lines(&[entry(1)]);
        assert_eq!(lines, "4:05 PM EST | Arusha | Alert 1 | example.com\n");
    }

    #[test]
    fn test_cap_at_twenty_lines() {
        let entries: Vec<Entry> = (0..30).map(entry).collect();
        let lines = render_lines(&entries);
        assert_eq!(lines.lines().count(), LINE_CAP);
        // capped output still covers the first (most recent) entries
        assert!(lines.starts_with("4:05 PM EST | Arusha | Alert 0 |"));
    }

    #[test]
    fn test_never_more_lines_than_entries() {
        let entries: Vec<Entry> = (0..3).map(entry).collect();
        assert_eq!(render_lines(&entries).lines().count(), 3);
        assert_eq!(render_lines(&[]), "");
    }

    #[test]
    fn test_every_line_newline_terminated() {
        let entries: Vec<Entry> = (0..2).map(entry).collect();
        assert!(render_lines(&entries).ends_with('\n'));
    }
}
