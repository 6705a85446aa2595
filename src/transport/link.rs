use std::collections::BTreeMap;

use serde::Deserialize;

use super::number::TransportNumber;
use crate::domain::{DbStats, LinkStats};

#[derive(Debug, Clone, Deserialize)]
pub struct LinkStatsJson {
    #[serde(default)]
    shorturl: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    timestamp: Option<String>,
    #[serde(default)]
    ip: Option<String>,
    #[serde(default)]
    clicks: Option<TransportNumber>,
    #[serde(flatten)]
    extra: BTreeMap<String, serde_json::Value>,
}

impl LinkStatsJson {
    pub fn into_link_stats(self) -> LinkStats {
        let mut extra = self.extra;
        let clicks = count_or_keep("clicks", self.clicks, &mut extra);
        LinkStats {
            short_url: self.shorturl,
            url: self.url,
            title: self.title,
            timestamp: self.timestamp,
            ip: self.ip,
            clicks,
            extra,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DbStatsJson {
    #[serde(default)]
    total_links: Option<TransportNumber>,
    #[serde(default)]
    total_clicks: Option<TransportNumber>,
}

impl DbStatsJson {
    pub fn into_db_stats(self) -> DbStats {
        let mut extra = BTreeMap::new();
        let total_links = count_or_keep("total_links", self.total_links, &mut extra);
        let total_clicks = count_or_keep("total_clicks", self.total_clicks, &mut extra);
        DbStats {
            total_links,
            total_clicks,
            extra,
        }
    }
}

/// Parses a counter, moving its raw text into `extra` when it is not a non-negative integer.
fn count_or_keep(
    field: &str,
    value: Option<TransportNumber>,
    extra: &mut BTreeMap<String, serde_json::Value>,
) -> Option<u64> {
    let value = value?;
    let count = value.as_u64();
    if count.is_none() {
        extra.insert(
            field.to_owned(),
            serde_json::Value::String(value.as_str().to_owned()),
        );
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_keeps_unknown_fields() {
        let json = r#"
        {
          "shorturl": "http://sho.rt/ex",
          "url": "http://example.com/",
          "title": "Example",
          "timestamp": "2024-03-01 10:00:00",
          "ip": "127.0.0.1",
          "clicks": "7",
          "keyword": "ex"
        }
        "#;
        let link: LinkStatsJson = serde_json::from_str(json).unwrap();
        let link = link.into_link_stats();
        assert_eq!(link.clicks, Some(7));
        assert_eq!(link.title.as_deref(), Some("Example"));
        assert_eq!(
            link.extra.get("keyword"),
            Some(&serde_json::Value::String("ex".to_owned()))
        );
        assert!(!link.extra.contains_key("clicks"));
    }

    #[test]
    fn db_stats_accepts_numbers_or_strings() {
        let json = r#"{ "total_links": "12", "total_clicks": 40 }"#;
        let stats: DbStatsJson = serde_json::from_str(json).unwrap();
        assert_eq!(
            stats.into_db_stats(),
            DbStats {
                total_links: Some(12),
                total_clicks: Some(40),
                extra: BTreeMap::new(),
            }
        );
    }

    #[test]
    fn unparseable_clicks_are_kept_in_extra() {
        let json = r#"{ "shorturl": "http://sho.rt/ex", "clicks": "1.5k" }"#;
        let link: LinkStatsJson = serde_json::from_str(json).unwrap();
        let link = link.into_link_stats();
        assert_eq!(link.clicks, None);
        assert_eq!(
            link.extra.get("clicks"),
            Some(&serde_json::Value::String("1.5k".to_owned()))
        );
    }

    #[test]
    fn unparseable_totals_are_kept_in_extra() {
        let json = r#"{ "total_links": -1, "total_clicks": "n/a" }"#;
        let stats: DbStatsJson = serde_json::from_str(json).unwrap();
        let stats = stats.into_db_stats();
        assert_eq!(stats.total_links, None);
        assert_eq!(stats.total_clicks, None);
        assert_eq!(
            stats.extra.get("total_links"),
            Some(&serde_json::Value::String("-1".to_owned()))
        );
        assert_eq!(
            stats.extra.get("total_clicks"),
            Some(&serde_json::Value::String("n/a".to_owned()))
        );
    }
}
