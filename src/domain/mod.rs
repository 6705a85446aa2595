//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{Action, DEFAULT_STATS_LIMIT, OutputFormat, Shorten, Stats, StatsFilter};
pub use response::{DbStats, LinkStats, ShortenedUrl, StatsReport};
pub use validation::ConfigurationError;
pub use value::{ApiUrl, Keyword, LongUrl, Password, ShortUrl, SignatureToken, Title, Username};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_url_rejects_empty() {
        assert!(matches!(
            ApiUrl::new("   "),
            Err(ConfigurationError::Empty {
                field: ApiUrl::FIELD
            })
        ));
    }

    #[test]
    fn api_url_rejects_relative_paths() {
        assert!(matches!(
            ApiUrl::new("yourls-api.php"),
            Err(ConfigurationError::InvalidApiUrl { .. })
        ));
        assert_eq!(
            ApiUrl::new(" http://sho.rt/yourls-api.php ")
                .unwrap()
                .as_str(),
            "http://sho.rt/yourls-api.php"
        );
    }

    #[test]
    fn password_rejects_empty_but_keeps_whitespace() {
        assert!(matches!(
            Password::new(""),
            Err(ConfigurationError::Empty {
                field: Password::FIELD
            })
        ));
        assert_eq!(Password::new(" pw ").unwrap().as_str(), " pw ");
    }

    #[test]
    fn values_are_stored_untrimmed() {
        assert_eq!(Username::new(" admin ").unwrap().as_str(), " admin ");
        assert_eq!(SignatureToken::new("tok\n").unwrap().as_str(), "tok\n");
        assert_eq!(
            LongUrl::new(" http://example.com/ ").unwrap().as_str(),
            " http://example.com/ "
        );
        assert_eq!(ShortUrl::new("ex ").unwrap().as_str(), "ex ");
        assert_eq!(Keyword::new(" ex").unwrap().as_str(), " ex");
        assert!(matches!(
            Username::new(" \t "),
            Err(ConfigurationError::Empty {
                field: Username::FIELD
            })
        ));
    }

    #[test]
    fn secrets_are_redacted_in_debug_output() {
        let password = Password::new("hunter2").unwrap();
        let token = SignatureToken::new("abc123").unwrap();
        assert!(!format!("{password:?}").contains("hunter2"));
        assert!(!format!("{token:?}").contains("abc123"));
    }

    #[test]
    fn output_format_accepts_known_values_only() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("jsonp".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonp);
        assert_eq!("xml".parse::<OutputFormat>().unwrap(), OutputFormat::Xml);
        assert_eq!(
            "simple".parse::<OutputFormat>().unwrap(),
            OutputFormat::Simple
        );
        assert!(matches!(
            "yaml".parse::<OutputFormat>(),
            Err(ConfigurationError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn stats_filter_rejects_unknown_names() {
        assert_eq!(Stats::parse("top", 5).unwrap().filter(), StatsFilter::Top);
        assert!(matches!(
            Stats::parse("bogus", 5),
            Err(ConfigurationError::UnsupportedFilter { input }) if input == "bogus"
        ));
    }

    #[test]
    fn stats_limit_zero_means_server_default() {
        assert_eq!(Stats::new(StatsFilter::Last, 0).limit(), None);
        assert_eq!(Stats::new(StatsFilter::Last, 25).limit(), Some(25));
    }

    #[test]
    fn shorten_treats_blank_optionals_as_absent() {
        let request = Shorten::new("http://example.com/", Some(""), Some("  ")).unwrap();
        assert!(request.keyword().is_none());
        assert!(request.title().is_none());

        let request = Shorten::new("http://example.com/", Some("ex"), Some("Example")).unwrap();
        assert_eq!(request.keyword().map(Keyword::as_str), Some("ex"));
        assert_eq!(request.title().map(Title::as_str), Some("Example"));
    }

    #[test]
    fn shorten_requires_url() {
        assert!(matches!(
            Shorten::new(" ", None, None),
            Err(ConfigurationError::Empty {
                field: LongUrl::FIELD
            })
        ));
    }
}
