use std::fmt;
use std::str::FromStr;

use crate::domain::validation::ConfigurationError;
use crate::domain::value::{Keyword, LongUrl, Title};

/// Number of links requested by `stats` when the caller does not say otherwise.
pub const DEFAULT_STATS_LIMIT: u32 = 10;

/// Response format requested from YOURLS (`format`).
///
/// Only [`OutputFormat::Json`] can be decoded by this crate. The other values are
/// accepted so that a client can be configured with them, but every operation on
/// such a client fails before sending a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Jsonp,
    Xml,
    Simple,
}

impl OutputFormat {
    /// Form field name used by YOURLS (`format`).
    pub const FIELD: &'static str = "format";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Jsonp => "jsonp",
            Self::Xml => "xml",
            Self::Simple => "simple",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim() {
            "json" => Self::Json,
            "jsonp" => Self::Jsonp,
            "xml" => Self::Xml,
            "simple" => Self::Simple,
            _ => {
                return Err(ConfigurationError::UnsupportedFormat {
                    input: value.to_owned(),
                });
            }
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API action names (`action`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    ShortUrl,
    Expand,
    UrlStats,
    Stats,
    DbStats,
}

impl Action {
    /// Form field name used by YOURLS (`action`).
    pub const FIELD: &'static str = "action";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ShortUrl => "shorturl",
            Self::Expand => "expand",
            Self::UrlStats => "url-stats",
            Self::Stats => "stats",
            Self::DbStats => "db-stats",
        }
    }
}

/// Link ordering used by the `stats` action (`filter`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatsFilter {
    /// Most clicked links first.
    Top,
    /// Least clicked links first.
    Bottom,
    /// Random selection.
    Rand,
    /// Most recently created links first.
    Last,
}

impl StatsFilter {
    /// Form field name used by YOURLS (`filter`).
    pub const FIELD: &'static str = "filter";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Rand => "rand",
            Self::Last => "last",
        }
    }
}

impl FromStr for StatsFilter {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Ok(match value.trim() {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "rand" => Self::Rand,
            "last" => Self::Last,
            _ => {
                return Err(ConfigurationError::UnsupportedFilter {
                    input: value.to_owned(),
                });
            }
        })
    }
}

impl fmt::Display for StatsFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated `shorturl` request.
#[derive(Debug, Clone)]
pub struct Shorten {
    url: LongUrl,
    keyword: Option<Keyword>,
    title: Option<Title>,
}

impl Shorten {
    /// Build a request. Blank `keyword`/`title` values are treated as absent.
    pub fn new(
        url: impl Into<String>,
        keyword: Option<&str>,
        title: Option<&str>,
    ) -> Result<Self, ConfigurationError> {
        let url = LongUrl::new(url)?;
        let keyword = keyword
            .filter(|value| !value.trim().is_empty())
            .map(Keyword::new)
            .transpose()?;
        let title = title
            .filter(|value| !value.trim().is_empty())
            .map(Title::new)
            .transpose()?;
        Ok(Self {
            url,
            keyword,
            title,
        })
    }

    pub fn url(&self) -> &LongUrl {
        &self.url
    }

    pub fn keyword(&self) -> Option<&Keyword> {
        self.keyword.as_ref()
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }
}

/// A validated `stats` request. A `limit` of zero leaves the server default in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    filter: StatsFilter,
    limit: u32,
}

impl Stats {
    /// Form field name used by YOURLS for the limit (`limit`).
    pub const LIMIT_FIELD: &'static str = "limit";

    pub fn new(filter: StatsFilter, limit: u32) -> Self {
        Self { filter, limit }
    }

    /// Parse the filter name and build a request.
    pub fn parse(filter: &str, limit: u32) -> Result<Self, ConfigurationError> {
        Ok(Self::new(filter.parse()?, limit))
    }

    pub fn filter(&self) -> StatsFilter {
        self.filter
    }

    pub fn limit(&self) -> Option<u32> {
        (self.limit != 0).then_some(self.limit)
    }
}
