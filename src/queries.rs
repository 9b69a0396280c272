//! Search-phrase expansion into feed URLs.
//!
//! Each fixed search phrase becomes one Google News RSS search URL. The phrase
//! list covers general Tanzania security coverage plus the specific corridors,
//! parks, and towns the scanner watches.

use tracing::debug;

/// Free-text Google News search phrases, expanded in declared order.
pub const SEARCH_QUERIES: &[&str] = &[
    "site:gov.uk travel advice Tanzania OR Arusha OR Ngorongoro OR Serengeti",
    "site:tz.usembassy.gov security alert Tanzania OR Arusha OR Ngorongoro OR Serengeti",
    "Tanzania protest OR unrest OR clashes OR violence",
    "Arusha protest OR unrest OR violence OR alert",
    "Kilimanjaro Airport protest OR unrest OR violence OR alert",
    "Ngorongoro protest OR unrest OR violence OR alert",
    "Serengeti protest OR unrest OR violence OR alert",
    "Tarangire protest OR unrest OR violence OR alert",
    "Lake Manyara protest OR unrest OR violence OR alert",
    "Karatu protest OR unrest OR violence OR alert",
    "A23 Tanzania protest OR unrest OR violence OR alert",
    "A104 Tanzania protest OR unrest OR violence OR alert",
];

/// Additional direct feed URLs appended after the search feeds. Currently
/// empty; reputable local outlets with RSS belong here.
pub const STATIC_FEEDS: &[&str] = &[];

/// Build a Google News RSS search URL for one phrase.
///
/// Encoding is total over any input string, so this can never fail.
pub fn google_news_rss_url(query: &str) -> String {
    format!(
        "https://news.google.com/rss/search?q={}&hl=en-US&gl=US&ceid=US:en",
        urlencoding::encode(query)
    )
}

/// Expand every search phrase, then append the static feed list.
pub fn feed_urls() -> Vec<String> {
    let urls: Vec<String> = SEARCH_QUERIES
        .iter()
        .map(|q| google_news_rss_url(q))
        .chain(STATIC_FEEDS.iter().map(|u| u.to_string()))
        .collect();
    debug!(count = urls.len(), "Built feed URL list");
    urls
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_is_url_encoded() {
        let url = google_news_rss_url("Arusha protest OR unrest");
        assert!(url.starts_with("https://news.google.com/rss/search?q="));
        assert!(url.contains("Arusha%20protest%20OR%20unrest"));
        assert!(url.ends_with("&hl=en-US&gl=US&ceid=US:en"));
    }

    #[test]
    fn test_site_operator_colon_is_encoded() {
        let url = google_news_rss_url("site:gov.uk travel advice");
        assert!(url.contains("site%3Agov.uk"));
    }

    #[test]
    fn test_feed_urls_cover_every_query() {
        let urls = feed_urls();
        assert_eq!(urls.len(), SEARCH_QUERIES.len() + STATIC_FEEDS.len());
        assert!(urls.iter().all(|u| u.starts_with("https://")));
    }

    #[test]
    fn test_feed_urls_preserve_declared_order() {
        let urls = feed_urls();
        assert_eq!(urls[0], google_news_rss_url(SEARCH_QUERIES[0]));
        assert_eq!(
            urls[SEARCH_QUERIES.len() - 1],
            google_news_rss_url(SEARCH_QUERIES[SEARCH_QUERIES.len() - 1])
        );
    }
}
