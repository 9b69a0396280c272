//! Timestamp normalization, identifier hashing, and source shortening.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use sha2::{Digest, Sha256};
use std::error::Error;
use std::fs as stdfs;
use tokio::fs;
use tracing::{debug, info, instrument};

/// Hex length of the stable item identifier.
const ID_LEN: usize = 12;

/// Zoneless timestamp layouts tried after the RFC parsers.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Compute the stable short identifier for an item: truncated hex SHA-256
/// over the raw link+title concatenation.
pub fn make_id(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    format!("{digest:x}")[..ID_LEN].to_string()
}

/// Parse a feed timestamp string permissively into the run's reference zone.
///
/// Tries RFC 3339, RFC 2822, then a few common zoneless layouts (treated as
/// UTC). Empty or unparsable strings substitute `now` — an item is never
/// dropped just because its date failed to parse, at the cost of unparsable
/// dates sorting to the top as if just published.
pub fn normalize_time(raw: &str, now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let s = raw.trim();
    if s.is_empty() {
        return now;
    }
    let tz = now.offset();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.with_timezone(tz);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return dt.with_timezone(tz);
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return naive.and_utc().with_timezone(tz);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return naive.and_utc().with_timezone(tz);
        }
    }

    debug!(raw = %s, "Unparsable timestamp; substituting run start");
    now
}

/// Compact a link or feed label down to its host name.
///
/// Well-formed URLs yield their host with a leading "www." stripped; anything
/// else comes back as its first 40 characters unchanged.
pub fn shorten_source(link_or_source: &str) -> String {
    if let Ok(url) = url::Url::parse(link_or_source) {
        if let Some(host) = url.host_str() {
            if !host.is_empty() {
                return host.strip_prefix("www.").unwrap_or(host).to_string();
            }
        }
    }
    link_or_source.chars().take(40).collect()
}

/// Ensure the output directory exists and is writable.
///
/// Creates the directory if missing, then probes it with a throwaway file so
/// permission problems surface before any network activity.
#[instrument(level = "info", skip_all, fields(path = %path))]
pub async fn ensure_writable_dir(path: &str) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(path).await?;
    let probe_path = format!("{}/..__probe_write__", path.trim_end_matches('/'));
    match stdfs::File::create(&probe_path) {
        Ok(_) => {
            let _ = stdfs::remove_file(&probe_path);
            info!("Output directory is writable");
            Ok(())
        }
        Err(e) => Err(Box::new(e)),
    }
}
