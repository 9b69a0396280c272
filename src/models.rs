//! Data models for feed items and the emitted digest.
//!
//! This module defines the structures flowing through the pipeline:
//! - [`RawItem`]: one syndication-feed entry as parsed from RSS/Atom
//! - [`Entry`]: a filtered, normalized alert as written to the JSON digest
//! - [`Digest`]: the full JSON document for a single run

use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// A raw syndication-feed entry before filtering.
///
/// All fields are kept as the feed delivered them; `published` in particular
/// is the unparsed timestamp string (empty when the feed carried none).
/// Instances live only within a single run.
#[derive(Debug, Clone)]
pub struct RawItem {
    /// The feed's own title, falling back to the feed URL.
    pub source: String,
    /// The item headline.
    pub title: String,
    /// The item's article URL.
    pub link: String,
    /// The raw published/updated timestamp string, format unconstrained.
    pub published: String,
    /// The item summary or description text.
    pub summary: String,
}

/// A relevant, deduplicated, recency-checked alert entry.
///
/// Every `Entry` matched both the keyword and location predicates and was
/// published within the recency window at run time. The `when` field carries
/// the typed timestamp used for sorting; it is not serialized — the JSON
/// document exposes `when_est_iso` and `when_est_hhmm` instead.
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    /// Truncated content hash of link+title; unique within a run.
    pub id: String,
    /// Localized publication instant, used for the recency window and sorting.
    #[serde(skip)]
    pub when: DateTime<FixedOffset>,
    /// `when` rendered as an ISO-8601 string.
    pub when_est_iso: String,
    /// `when` rendered as e.g. "4:05 PM EST" for the SMS line.
    pub when_est_hhmm: String,
    /// First matching toponym from the combined title+summary text.
    pub location: String,
    /// Trimmed item headline.
    pub alert: String,
    /// The article URL, or the feed label when the item had no link.
    pub source: String,
    /// Compacted host-name form of `source`.
    pub source_short: String,
    /// Trimmed item summary.
    pub summary: String,
}

/// The JSON document written once per run.
///
/// Invariant: `count` always equals `entries.len()`.
#[derive(Debug, Serialize)]
pub struct Digest<'a> {
    /// ISO-8601 run-start timestamp in the reference zone.
    pub generated_at: String,
    /// Number of entries in this digest.
    pub count: usize,
    /// Relevant entries, newest first.
    pub entries: &'a [Entry],
}
