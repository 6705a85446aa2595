use serde::Deserialize;

use super::number::TransportNumber;
use super::outcome::{Outcome, TransportError};
use crate::domain::{Action, Keyword, LongUrl, Shorten, ShortenedUrl, Title};

/// `code` value YOURLS uses when a requested keyword is taken or reserved.
pub const KEYWORD_TAKEN_CODE: &str = "error:keyword";

#[derive(Debug, Clone, Deserialize)]
struct ShortenJsonResponse {
    #[serde(default, rename = "errorCode")]
    error_code: Option<TransportNumber>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    shorturl: Option<String>,
    #[serde(default)]
    title: Option<String>,
    // An object on success and on `error:url`; shape is not guaranteed otherwise.
    #[serde(default)]
    url: Option<serde_json::Value>,
}

pub fn encode_shorten_form(request: &Shorten) -> Vec<(String, String)> {
    let mut params = vec![
        (Action::FIELD.to_owned(), Action::ShortUrl.as_str().to_owned()),
        (LongUrl::FIELD.to_owned(), request.url().as_str().to_owned()),
    ];
    if let Some(keyword) = request.keyword() {
        params.push((Keyword::FIELD.to_owned(), keyword.as_str().to_owned()));
    }
    if let Some(title) = request.title() {
        params.push((Title::FIELD.to_owned(), title.as_str().to_owned()));
    }
    params
}

pub fn decode_shorten_json_response(json: &str) -> Result<Outcome<ShortenedUrl>, TransportError> {
    let parsed: ShortenJsonResponse = serde_json::from_str(json)?;

    if let Some(code) = parsed.error_code {
        return Ok(Outcome::api_error(code, parsed.message));
    }

    if parsed.status.as_deref() == Some("fail") && parsed.code.as_deref() == Some(KEYWORD_TAKEN_CODE)
    {
        return Ok(Outcome::Rejected {
            code: parsed.code,
            message: parsed.message,
        });
    }

    let Some(short_url) = parsed.shorturl else {
        return Ok(Outcome::Incomplete {
            message: parsed.message,
        });
    };

    let keyword = parsed
        .url
        .as_ref()
        .and_then(|url| url.get("keyword"))
        .and_then(serde_json::Value::as_str)
        .map(str::to_owned);

    Ok(Outcome::Success(ShortenedUrl {
        short_url,
        title: parsed.title,
        keyword,
        message: parsed.message,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_includes_only_supplied_optionals() {
        let request = Shorten::new("http://example.com/", None, None).unwrap();
        assert_eq!(
            encode_shorten_form(&request),
            vec![
                ("action".to_owned(), "shorturl".to_owned()),
                ("url".to_owned(), "http://example.com/".to_owned()),
            ]
        );

        let request =
            Shorten::new("http://example.com/", Some("ex"), Some("An example")).unwrap();
        assert_eq!(
            encode_shorten_form(&request),
            vec![
                ("action".to_owned(), "shorturl".to_owned()),
                ("url".to_owned(), "http://example.com/".to_owned()),
                ("keyword".to_owned(), "ex".to_owned()),
                ("title".to_owned(), "An example".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_success_payload() {
        let json = r#"
        {
          "url": {
            "keyword": "ex",
            "url": "http://example.com/",
            "title": "Example Domain",
            "date": "2024-03-01 10:00:00",
            "ip": "127.0.0.1"
          },
          "status": "success",
          "message": "http://example.com/ added to database",
          "title": "Example Domain",
          "shorturl": "http://sho.rt/ex",
          "statusCode": 200
        }
        "#;

        let outcome = decode_shorten_json_response(json).unwrap();
        assert_eq!(
            outcome,
            Outcome::Success(ShortenedUrl {
                short_url: "http://sho.rt/ex".to_owned(),
                title: Some("Example Domain".to_owned()),
                keyword: Some("ex".to_owned()),
                message: Some("http://example.com/ added to database".to_owned()),
            })
        );
    }

    #[test]
    fn decode_existing_url_still_returns_short_url() {
        let json = r#"
        {
          "status": "fail",
          "code": "error:url",
          "url": { "keyword": "old", "url": "http://example.com/" },
          "message": "http://example.com/ already exists in database",
          "title": "Example Domain",
          "shorturl": "http://sho.rt/old",
          "statusCode": 200
        }
        "#;

        let outcome = decode_shorten_json_response(json).unwrap();
        assert!(matches!(
            outcome,
            Outcome::Success(ShortenedUrl { ref short_url, .. }) if short_url == "http://sho.rt/old"
        ));
    }

    #[test]
    fn decode_keyword_conflict() {
        let json = r#"
        {
          "status": "fail",
          "code": "error:keyword",
          "message": "Short URL taken already exists in database or is reserved",
          "statusCode": 200
        }
        "#;

        let outcome = decode_shorten_json_response(json).unwrap();
        assert_eq!(
            outcome,
            Outcome::Rejected {
                code: Some("error:keyword".to_owned()),
                message: Some(
                    "Short URL taken already exists in database or is reserved".to_owned()
                ),
            }
        );
    }

    #[test]
    fn decode_error_code_wins_over_other_fields() {
        let json = r#"
        {
          "errorCode": 403,
          "message": "Please log in",
          "shorturl": "http://sho.rt/ignored"
        }
        "#;

        let outcome = decode_shorten_json_response(json).unwrap();
        assert_eq!(
            outcome,
            Outcome::ApiError {
                code: "403".to_owned(),
                message: Some("Please log in".to_owned()),
            }
        );
    }

    #[test]
    fn decode_missing_short_url_is_incomplete() {
        let json = r#"{ "status": "fail", "code": "error:nourl", "message": "Missing URL input" }"#;
        let outcome = decode_shorten_json_response(json).unwrap();
        assert_eq!(
            outcome,
            Outcome::Incomplete {
                message: Some("Missing URL input".to_owned()),
            }
        );
    }

    #[test]
    fn decode_rejects_invalid_json() {
        assert!(matches!(
            decode_shorten_json_response("<html>"),
            Err(TransportError::Json(_))
        ));
    }
}
