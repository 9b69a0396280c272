//! Filtering, deduplication, recency windowing, and ordering.
//!
//! This is the heart of the run: raw items in, sorted relevant entries out.
//! Every decision compares against the [`RunContext`] clock so the whole
//! stage is a pure function of its inputs.

use crate::context::RunContext;
use crate::filter;
use crate::models::{Entry, RawItem};
use crate::utils::{make_id, normalize_time, shorten_source};
use chrono::Duration;
use itertools::Itertools;
use tracing::{debug, info, instrument};

/// Items older than this relative to run start are dropped as stale.
const RECENCY_WINDOW_HOURS: i64 = 72;

/// Reduce fetched items to the final sorted digest entries.
///
/// Duplicates (same link+title hash) are dropped first-occurrence-wins, then
/// each survivor must pass the relevance predicates and the recency window.
/// The result is sorted newest first; the sort is stable, so entries with
/// equal timestamps keep their discovery order.
#[instrument(level = "info", skip_all, fields(fetched = items.len()))]
pub fn relevant_entries(items: Vec<RawItem>, ctx: &RunContext) -> Vec<Entry> {
    let mut entries: Vec<Entry> = items
        .into_iter()
        .map(|item| (item_id(&item), item))
        .unique_by(|(id, _)| id.clone())
        .filter_map(|(id, item)| normalize(id, item, ctx))
        .collect();

    entries.sort_by(|a, b| b.when.cmp(&a.when));
    info!(relevant = entries.len(), "Filtered and sorted entries");
    entries
}

/// Stable identifier over the raw link+title pair, computed before any
/// trimming so the same wire item always hashes the same.
fn item_id(item: &RawItem) -> String {
    make_id(&format!("{}{}", item.link, item.title))
}

/// Apply relevance and recency checks to one deduplicated item. The id was
/// already computed for deduplication and is reused as-is.
fn normalize(id: String, item: RawItem, ctx: &RunContext) -> Option<Entry> {
    let text = format!("{} {}", item.title, item.summary);
    if !filter::looks_relevant(&text) {
        return None;
    }

    let when = normalize_time(&item.published, ctx.now);
    if ctx.now - when > Duration::hours(RECENCY_WINDOW_HOURS) {
        debug!(title = %item.title, published = %item.published, "Dropping stale item");
        return None;
    }

    let location = filter::summarize_location(&text);
    let source = if item.link.is_empty() {
        item.source.clone()
    } else {
        item.link.clone()
    };
    let source_short = shorten_source(&source);

    Some(Entry {
        id,
        when,
        when_est_iso: when.to_rfc3339(),
        when_est_hhmm: when.format("%-I:%M %p EST").to_string(),
        location,
        alert: item.title.trim().to_string(),
        source,
        source_short,
        summary: item.summary.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::reference_zone;
    use chrono::{DateTime, FixedOffset, TimeZone};

    fn ctx() -> RunContext {
        let now = reference_zone()
            .with_ymd_and_hms(2025, 11, 5, 18, 0, 0)
            .unwrap();
        RunContext::with_now(now, "web/data".to_string())
    }

    fn hours_ago(ctx: &RunContext, hours: i64) -> DateTime<FixedOffset> {
        ctx.now - Duration::hours(hours)
    }

    fn item(title: &str, link: &str, published: &str, summary: &str) -> RawItem {
        RawItem {
            source: "Example Feed".to_string(),
            title: title.to_string(),
            link: link.to_string(),
            published: published.to_string(),
            summary: summary.to_string(),
        }
    }

    #[test]
    fn test_recent_relevant_item_survives() {
        let ctx = ctx();
        let published = hours_ago(&ctx, 2).to_rfc3339();
        let entries = relevant_entries(
            vec![item(
                "Protest erupts near Arusha National Park",
                "https://www.example.com/news/1",
                &published,
                "",
            )],
            &ctx,
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].location, "Arusha National Park");
        assert_eq!(entries[0].source_short, "example.com");
        assert_eq!(entries[0].when, hours_ago(&ctx, 2));
    }

    #[test]
    fn test_stale_item_is_dropped() {
        let ctx = ctx();
        let published = hours_ago(&ctx, 100).to_rfc3339();
        let entries = relevant_entries(
            vec![item(
                "Protest erupts near Arusha National Park",
                "https://www.example.com/news/1",
                &published,
                "",
            )],
            &ctx,
        );
        assert!(entries.is_empty());
    }

    #[test]
    fn test_recency_boundary_is_inclusive() {
        let ctx = ctx();
        // exactly 72 hours old: age is not strictly greater than the
        // window, so the item is retained
        let at_boundary = hours_ago(&ctx, 72).to_rfc3339();
        let just_past = (hours_ago(&ctx, 72) - Duration::seconds(1)).to_rfc3339();
        let entries = relevant_entries(
            vec![
                item("Protest in Arusha", "https://a.example/1", &at_boundary, ""),
                item("Riot in Karatu", "https://a.example/2", &just_past, ""),
            ],
            &ctx,
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].alert, "Protest in Arusha");
    }

    #[test]
    fn test_irrelevant_item_is_dropped() {
        let ctx = ctx();
        let published = hours_ago(&ctx, 1).to_rfc3339();
        let entries = relevant_entries(
            vec![item(
                "Election results announced",
                "https://www.example.com/news/2",
                &published,
                "no place names here",
            )],
            &ctx,
        );
        assert!(entries.is_empty());
    }

    #[test]
    fn test_duplicate_link_title_first_wins() {
        let ctx = ctx();
        let published = hours_ago(&ctx, 2).to_rfc3339();
        let first = item(
            "Protest in Arusha",
            "https://www.example.com/news/1",
            &published,
            "first copy",
        );
        let second = item(
            "Protest in Arusha",
            "https://www.example.com/news/1",
            &published,
            "second copy with different summary",
        );
        let entries = relevant_entries(vec![first, second], &ctx);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].summary, "first copy");
    }

    #[test]
    fn test_sorted_newest_first() {
        let ctx = ctx();
        let older = hours_ago(&ctx, 10).to_rfc3339();
        let newer = hours_ago(&ctx, 1).to_rfc3339();
        let entries = relevant_entries(
            vec![
                item("Unrest in Karatu", "https://a.example/1", &older, ""),
                item("Clashes in Serengeti", "https://a.example/2", &newer, ""),
            ],
            &ctx,
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].alert, "Clashes in Serengeti");
        assert_eq!(entries[1].alert, "Unrest in Karatu");
    }

    #[test]
    fn test_equal_timestamps_keep_discovery_order() {
        let ctx = ctx();
        let published = hours_ago(&ctx, 3).to_rfc3339();
        let entries = relevant_entries(
            vec![
                item("Riot in Arusha", "https://a.example/1", &published, ""),
                item("Curfew in Arusha", "https://a.example/2", &published, ""),
                item("Roadblock on A104 Arusha", "https://a.example/3", &published, ""),
            ],
            &ctx,
        );
        let alerts: Vec<&str> = entries.iter().map(|e| e.alert.as_str()).collect();
        assert_eq!(
            alerts,
            vec!["Riot in Arusha", "Curfew in Arusha", "Roadblock on A104 Arusha"]
        );
    }

    #[test]
    fn test_unparsable_date_falls_back_to_now_and_sorts_first() {
        let ctx = ctx();
        let recent = hours_ago(&ctx, 1).to_rfc3339();
        let entries = relevant_entries(
            vec![
                item("Unrest in Tloma", "https://a.example/1", &recent, ""),
                item("Protest in Karatu", "https://a.example/2", "not-a-date", ""),
            ],
            &ctx,
        );
        assert_eq!(entries.len(), 2);
        // the unparsable date collapsed to run start, the newest instant
        assert_eq!(entries[0].alert, "Protest in Karatu");
        assert_eq!(entries[0].when, ctx.now);
    }

    #[test]
    fn test_missing_link_falls_back_to_feed_label() {
        let ctx = ctx();
        let published = hours_ago(&ctx, 2).to_rfc3339();
        let entries = relevant_entries(
            vec![item("Protest in Arusha", "", &published, "")],
            &ctx,
        );
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].source, "Example Feed");
        assert_eq!(entries[0].source_short, "Example Feed");
    }

    #[test]
    fn test_alert_and_summary_are_trimmed() {
        let ctx = ctx();
        let published = hours_ago(&ctx, 2).to_rfc3339();
        let entries = relevant_entries(
            vec![item(
                "  Protest in Arusha \n",
                "https://a.example/1",
                &published,
                "  crowds reported  ",
            )],
            &ctx,
        );
        assert_eq!(entries[0].alert, "Protest in Arusha");
        assert_eq!(entries[0].summary, "crowds reported");
    }

    #[test]
    fn test_id_uses_raw_pre_trim_fields() {
        let ctx = ctx();
        let published = hours_ago(&ctx, 2).to_rfc3339();
        let entries = relevant_entries(
            vec![item(
                "  Protest in Arusha ",
                "https://a.example/1",
                &published,
                "",
            )],
            &ctx,
        );
        assert_eq!(
            entries[0].id,
            make_id("https://a.example/1  Protest in Arusha ")
        );
    }
}
