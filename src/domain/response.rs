use std::collections::BTreeMap;

/// Successful `shorturl` result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedUrl {
    pub short_url: String,
    /// Page title as resolved (or echoed) by the server. Not every server version returns it.
    pub title: Option<String>,
    pub keyword: Option<String>,
    pub message: Option<String>,
}

/// Per-link statistics as returned by `url-stats` and inside `stats`.
///
/// Known fields are typed; anything else the server sends is kept in `extra`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkStats {
    pub short_url: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub timestamp: Option<String>,
    pub ip: Option<String>,
    pub clicks: Option<u64>,
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Aggregate counters (`db-stats`, and the `stats` object of the `stats` action).
///
/// A counter the server sent in a non-numeric form is `None` here and its raw
/// text is kept in `extra` under the wire name. `LinkStats::clicks` follows the same rule.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DbStats {
    pub total_links: Option<u64>,
    pub total_clicks: Option<u64>,
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Result of the `stats` action: the selected links in server order plus totals.
#[derive(Debug, Clone, PartialEq)]
pub struct StatsReport {
    pub links: Vec<LinkStats>,
    pub stats: DbStats,
}
