//! Feed retrieval and RSS/Atom parsing.
//!
//! One call per feed URL: fetch the body, deserialize it as RSS 2.0 first and
//! Atom second, and hand back plain [`RawItem`] records. Failures never escape
//! this module — a source that cannot be fetched or parsed simply contributes
//! nothing to the run.

use crate::models::RawItem;
use quick_xml::DeError;
use quick_xml::de::from_str;
use serde::Deserialize;
use tracing::{info, instrument, warn};

#[derive(Debug, Deserialize)]
struct Rss {
    channel: Channel,
}

#[derive(Debug, Deserialize)]
struct Channel {
    title: Option<String>,
    #[serde(rename = "item", default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    title: Option<String>,
    link: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomFeed {
    title: Option<String>,
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    title: Option<String>,
    #[serde(rename = "link", default)]
    links: Vec<AtomLink>,
    published: Option<String>,
    updated: Option<String>,
    summary: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AtomLink {
    #[serde(rename = "@href")]
    href: Option<String>,
}

/// Fetch one feed URL and parse its items.
///
/// Retrieval is blocking-in-sequence: the caller awaits each feed before
/// moving to the next. Any HTTP or XML failure is logged and yields an empty
/// vector, so a bad source never aborts the run.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_items(url: &str) -> Vec<RawItem> {
    let body = match reqwest::get(url).await.and_then(|r| r.error_for_status()) {
        Ok(resp) => match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!(error = %e, %url, "Failed reading feed body");
                return Vec::new();
            }
        },
        Err(e) => {
            warn!(error = %e, %url, "Feed fetch failed");
            return Vec::new();
        }
    };

    match parse_feed(&body, url) {
        Ok(items) => {
            info!(count = items.len(), "Parsed feed items");
            items
        }
        Err(e) => {
            warn!(error = %e, %url, "Feed parse failed");
            Vec::new()
        }
    }
}

/// Parse a feed body, trying RSS 2.0 first and Atom second.
///
/// The Atom structs are all-optional, so arbitrary XML (an HTML error page,
/// say) would deserialize as an empty feed; the Atom branch therefore only
/// accepts a document carrying a feed title or at least one entry. On double
/// failure the RSS error is reported, since Google News search feeds are RSS
/// and that error is the informative one.
fn parse_feed(body: &str, url: &str) -> Result<Vec<RawItem>, DeError> {
    match from_str::<Rss>(body) {
        Ok(rss) => Ok(rss_items(rss, url)),
        Err(rss_err) => match from_str::<AtomFeed>(body) {
            Ok(feed) if feed.title.is_some() || !feed.entries.is_empty() => {
                Ok(atom_items(feed, url))
            }
            _ => Err(rss_err),
        },
    }
}

fn rss_items(rss: Rss, url: &str) -> Vec<RawItem> {
    let source = rss.channel.title.unwrap_or_else(|| url.to_string());
    rss.channel
        .items
        .into_iter()
        .map(|item| RawItem {
            source: source.clone(),
            title: item.title.unwrap_or_default(),
            link: item.link.unwrap_or_default(),
            published: item.pub_date.unwrap_or_default(),
            summary: item.description.unwrap_or_default(),
        })
        .collect()
}

fn atom_items(feed: AtomFeed, url: &str) -> Vec<RawItem> {
    let source = feed.title.unwrap_or_else(|| url.to_string());
    feed.entries
        .into_iter()
        .map(|entry| RawItem {
            source: source.clone(),
            title: entry.title.unwrap_or_default(),
            link: entry
                .links
                .into_iter()
                .find_map(|l| l.href)
                .unwrap_or_default(),
            published: entry.published.or(entry.updated).unwrap_or_default(),
            summary: entry.summary.unwrap_or_default(),
        })
        .collect()
}
