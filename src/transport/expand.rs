use serde::Deserialize;

use super::number::TransportNumber;
use super::outcome::{Outcome, TransportError};
use crate::domain::{Action, ShortUrl};

#[derive(Debug, Clone, Deserialize)]
struct ExpandJsonResponse {
    #[serde(default, rename = "errorCode")]
    error_code: Option<TransportNumber>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    longurl: Option<String>,
}

pub fn encode_expand_form(short_url: &ShortUrl) -> Vec<(String, String)> {
    vec![
        (Action::FIELD.to_owned(), Action::Expand.as_str().to_owned()),
        (ShortUrl::FIELD.to_owned(), short_url.as_str().to_owned()),
    ]
}

pub fn decode_expand_json_response(json: &str) -> Result<Outcome<String>, TransportError> {
    let parsed: ExpandJsonResponse = serde_json::from_str(json)?;

    if let Some(code) = parsed.error_code {
        return Ok(Outcome::api_error(code, parsed.message));
    }

    Ok(match parsed.longurl {
        Some(long_url) => Outcome::Success(long_url),
        None => Outcome::Incomplete {
            message: parsed.message,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_sends_short_url() {
        let short_url = ShortUrl::new("http://sho.rt/ex").unwrap();
        assert_eq!(
            encode_expand_form(&short_url),
            vec![
                ("action".to_owned(), "expand".to_owned()),
                ("shorturl".to_owned(), "http://sho.rt/ex".to_owned()),
            ]
        );
    }

    #[test]
    fn decode_found_link() {
        let json = r#"
        {
          "keyword": "ex",
          "shorturl": "http://sho.rt/ex",
          "longurl": "http://original/",
          "title": "Original",
          "message": "success",
          "statusCode": 200
        }
        "#;
        assert_eq!(
            decode_expand_json_response(json).unwrap(),
            Outcome::Success("http://original/".to_owned())
        );
    }

    #[test]
    fn decode_not_found_without_error_code() {
        let json = r#"
        {
          "keyword": "nope",
          "message": "Error: short URL not found",
          "statusCode": 404
        }
        "#;
        assert_eq!(
            decode_expand_json_response(json).unwrap(),
            Outcome::Incomplete {
                message: Some("Error: short URL not found".to_owned()),
            }
        );
    }

    #[test]
    fn decode_null_long_url_is_incomplete() {
        let json = r#"{ "longurl": null, "message": "Error: short URL not found" }"#;
        assert!(matches!(
            decode_expand_json_response(json).unwrap(),
            Outcome::Incomplete { .. }
        ));
    }

    #[test]
    fn decode_error_code() {
        let json = r#"{ "errorCode": "403", "message": "Invalid username or password" }"#;
        assert_eq!(
            decode_expand_json_response(json).unwrap(),
            Outcome::ApiError {
                code: "403".to_owned(),
                message: Some("Invalid username or password".to_owned()),
            }
        );
    }
}
