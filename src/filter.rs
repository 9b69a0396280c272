//! Keyword and toponym relevance matching.
//!
//! An item is relevant only when its combined title+summary text mentions at
//! least one unrest keyword AND at least one Northern-Tanzania toponym, both
//! as case-insensitive substrings. The 15-mile-radius requirement around the
//! watched corridors is approximated by the toponym list; true geofencing
//! would need a geocoding API.

use once_cell::sync::Lazy;
use regex::Regex;

/// Watched toponyms. Declared order matters: when several toponyms start at
/// the same text position, the earlier list entry wins the location label.
pub const LOCATIONS: &[&str] = &[
    "Kilimanjaro International Airport",
    "Kilimanjaro Airport",
    "JRO",
    "Arusha National Park",
    "Arusha",
    "A23",
    "A104",
    "B144",
    "B 144",
    "Tloma",
    "Karatu",
    "Ngorongoro",
    "Ngorongoro Crater",
    "Tarangire National Park",
    "Lake Manyara",
    "Serengeti",
    "Mbali Mbali Soroi Serengeti Lodge",
    "Soroi Serengeti",
];

/// Political-unrest and security-alert terms.
pub const KEYWORDS: &[&str] = &[
    "protest",
    "protests",
    "protester",
    "demonstration",
    "demonstrations",
    "unrest",
    "clashes",
    "clash",
    "riot",
    "rioting",
    "violence",
    "violent",
    "attack",
    "attacks",
    "assault",
    "arson",
    "political",
    "election",
    "campaign rally",
    "march",
    "security alert",
    "travel advisory",
    "travel warning",
    "curfew",
    "roadblock",
    "road block",
    "road blockade",
    "blockade",
    "closure",
    "closed",
    "disruption",
    "disturbance",
];

static KEYWORD_RE: Lazy<Regex> = Lazy::new(|| alternation(KEYWORDS));
static LOCATION_RE: Lazy<Regex> = Lazy::new(|| alternation(LOCATIONS));

/// Compile a case-insensitive alternation over the term list, preserving
/// declared order so leftmost-first matching resolves ties.
fn alternation(terms: &[&str]) -> Regex {
    let pattern = terms
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!("(?i){pattern}")).unwrap()
}

/// True when the text mentions both an unrest keyword and a watched toponym.
pub fn looks_relevant(text: &str) -> bool {
    KEYWORD_RE.is_match(text) && LOCATION_RE.is_match(text)
}

/// Return the first toponym matched in the text, for the compact SMS label.
///
/// Falls back to "Northern TZ" when nothing matches. Items are only retained
/// when the location predicate holds, so the fallback is unreachable in the
/// normal pipeline path.
pub fn summarize_location(text: &str) -> String {
    match LOCATION_RE.find(text) {
        Some(m) => m.as_str().to_string(),
        None => "Northern TZ".to_string(),
    }
}
