use std::collections::BTreeMap;

use serde::Deserialize;

use super::link::{DbStatsJson, LinkStatsJson};
use super::number::TransportNumber;
use super::outcome::{
    Outcome, TransportError, is_status_ok, missing_field, rejected_by_status,
};
use crate::domain::{Action, DbStats, Stats, StatsFilter, StatsReport};

#[derive(Debug, Clone, Deserialize)]
struct StatsJsonResponse {
    #[serde(default, rename = "errorCode")]
    error_code: Option<TransportNumber>,
    #[serde(default, rename = "statusCode")]
    status_code: Option<TransportNumber>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    links: Option<TransportLinks>,
    #[serde(default)]
    stats: Option<DbStatsJson>,
}

#[derive(Debug, Clone, Deserialize)]
struct DbStatsJsonResponse {
    #[serde(default, rename = "errorCode")]
    error_code: Option<TransportNumber>,
    #[serde(default, rename = "statusCode")]
    status_code: Option<TransportNumber>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default, rename = "db-stats")]
    db_stats: Option<DbStatsJson>,
}

/// `links` is an object keyed `link_1..link_N`, or `[]` when nothing matched.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum TransportLinks {
    Keyed(BTreeMap<String, LinkStatsJson>),
    List(Vec<LinkStatsJson>),
}

impl TransportLinks {
    fn into_ordered(self) -> Vec<LinkStatsJson> {
        match self {
            Self::List(links) => links,
            Self::Keyed(links) => {
                let mut links = links.into_iter().collect::<Vec<_>>();
                // BTreeMap order puts `link_10` before `link_2`.
                links.sort_by_key(|(key, _)| link_index(key));
                links.into_iter().map(|(_, link)| link).collect()
            }
        }
    }
}

fn link_index(key: &str) -> u64 {
    key.strip_prefix("link_")
        .and_then(|index| index.parse::<u64>().ok())
        .unwrap_or(u64::MAX)
}

pub fn encode_stats_form(request: &Stats) -> Vec<(String, String)> {
    let mut params = vec![
        (Action::FIELD.to_owned(), Action::Stats.as_str().to_owned()),
        (
            StatsFilter::FIELD.to_owned(),
            request.filter().as_str().to_owned(),
        ),
    ];
    if let Some(limit) = request.limit() {
        params.push((Stats::LIMIT_FIELD.to_owned(), limit.to_string()));
    }
    params
}

pub fn encode_db_stats_form() -> Vec<(String, String)> {
    vec![(Action::FIELD.to_owned(), Action::DbStats.as_str().to_owned())]
}

pub fn decode_stats_json_response(json: &str) -> Result<Outcome<StatsReport>, TransportError> {
    let parsed: StatsJsonResponse = serde_json::from_str(json)?;

    if let Some(code) = parsed.error_code {
        return Ok(Outcome::api_error(code, parsed.message));
    }
    if !is_status_ok(parsed.status_code.as_ref()) {
        return Ok(rejected_by_status(parsed.status_code, parsed.message));
    }

    let Some(stats) = parsed.stats else {
        return Ok(missing_field("stats"));
    };

    let links = parsed
        .links
        .map(TransportLinks::into_ordered)
        .unwrap_or_default()
        .into_iter()
        .map(LinkStatsJson::into_link_stats)
        .collect();

    Ok(Outcome::Success(StatsReport {
        links,
        stats: stats.into_db_stats(),
    }))
}

pub fn decode_db_stats_json_response(json: &str) -> Result<Outcome<DbStats>, TransportError> {
    let parsed: DbStatsJsonResponse = serde_json::from_str(json)?;

    if let Some(code) = parsed.error_code {
        return Ok(Outcome::api_error(code, parsed.message));
    }
    if !is_status_ok(parsed.status_code.as_ref()) {
        return Ok(rejected_by_status(parsed.status_code, parsed.message));
    }

    Ok(match parsed.db_stats {
        Some(stats) => Outcome::Success(stats.into_db_stats()),
        None => missing_field("db-stats"),
    })
}
