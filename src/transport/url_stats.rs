use serde::Deserialize;

use super::link::LinkStatsJson;
use super::number::TransportNumber;
use super::outcome::{
    Outcome, TransportError, is_status_ok, missing_field, rejected_by_status,
};
use crate::domain::{Action, LinkStats, ShortUrl};

#[derive(Debug, Clone, Deserialize)]
struct UrlStatsJsonResponse {
    #[serde(default, rename = "errorCode")]
    error_code: Option<TransportNumber>,
    #[serde(default, rename = "statusCode")]
    status_code: Option<TransportNumber>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    link: Option<LinkStatsJson>,
}

pub fn encode_url_stats_form(short_url: &ShortUrl) -> Vec<(String, String)> {
    vec![
        (Action::FIELD.to_owned(), Action::UrlStats.as_str().to_owned()),
        (ShortUrl::FIELD.to_owned(), short_url.as_str().to_owned()),
    ]
}

pub fn decode_url_stats_json_response(json: &str) -> Result<Outcome<LinkStats>, TransportError> {
    let parsed: UrlStatsJsonResponse = serde_json::from_str(json)?;

    if let Some(code) = parsed.error_code {
        return Ok(Outcome::api_error(code, parsed.message));
    }
    if !is_status_ok(parsed.status_code.as_ref()) {
        return Ok(rejected_by_status(parsed.status_code, parsed.message));
    }

    Ok(match parsed.link {
        Some(link) => Outcome::Success(link.into_link_stats()),
        None => missing_field("link"),
    })
}
