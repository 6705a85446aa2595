//! One-shot helpers that build a client from loose arguments and run a single call.
//!
//! Handy for scripts; long-lived code should build a [`YourlsClient`] once and reuse it.

use crate::client::{YourlsClient, YourlsError};
use crate::domain::{DbStats, LinkStats, ShortenedUrl, StatsReport};

/// Connection arguments as they typically arrive from flags or environment variables.
///
/// Empty strings are treated the same as absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerArgs {
    pub api_url: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub token: Option<String>,
}

impl ServerArgs {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    pub fn with_login(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|value| !value.is_empty())
}

/// Build a JSON client from [`ServerArgs`].
pub fn get_server(args: &ServerArgs) -> Result<YourlsClient, YourlsError> {
    let mut builder = YourlsClient::builder(args.api_url.as_str());
    if let Some(username) = non_empty(args.username.as_ref()) {
        builder = builder.username(username);
    }
    if let Some(password) = non_empty(args.password.as_ref()) {
        builder = builder.password(password);
    }
    if let Some(token) = non_empty(args.token.as_ref()) {
        builder = builder.signature(token);
    }
    builder.build()
}

/// See [`YourlsClient::shorten`].
pub fn shorten(
    args: &ServerArgs,
    url: &str,
    keyword: Option<&str>,
    title: Option<&str>,
) -> Result<ShortenedUrl, YourlsError> {
    get_server(args)?.shorten(url, keyword, title)
}

/// See [`YourlsClient::expand`].
pub fn expand(args: &ServerArgs, short_url: &str) -> Result<String, YourlsError> {
    get_server(args)?.expand(short_url)
}

/// See [`YourlsClient::url_stats`].
pub fn url_stats(args: &ServerArgs, short_url: &str) -> Result<LinkStats, YourlsError> {
    get_server(args)?.url_stats(short_url)
}

/// See [`YourlsClient::stats`].
pub fn stats(args: &ServerArgs, filter: &str, limit: u32) -> Result<StatsReport, YourlsError> {
    get_server(args)?.stats(filter, limit)
}

/// See [`YourlsClient::db_stats`].
pub fn db_stats(args: &ServerArgs) -> Result<DbStats, YourlsError> {
    get_server(args)?.db_stats()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Auth;
    use crate::domain::ConfigurationError;

    const API_URL: &str = "https://example.invalid/yourls-api.php";

    #[test]
    fn get_server_uses_login_when_complete() {
        let args = ServerArgs::new(API_URL)
            .with_login("user", "pass")
            .with_token("token");
        let client = get_server(&args).unwrap();
        assert_eq!(client.auth(), &Auth::login_password("user", "pass").unwrap());
        assert_eq!(client.api_url().as_str(), API_URL);
    }

    #[test]
    fn get_server_treats_empty_strings_as_absent() {
        let args = ServerArgs::new(API_URL)
            .with_login("", "pass")
            .with_token("token");
        let client = get_server(&args).unwrap();
        assert_eq!(client.auth(), &Auth::signature("token").unwrap());

        let args = ServerArgs::new(API_URL).with_token("");
        assert!(matches!(
            get_server(&args).unwrap_err(),
            YourlsError::Configuration(ConfigurationError::MissingCredentials)
        ));
    }

    #[test]
    fn stats_rejects_unknown_filter_before_connecting() {
        let args = ServerArgs::new(API_URL).with_token("token");
        let err = stats(&args, "bogus", 10).unwrap_err();
        assert!(err.is_configuration());
    }

    #[test]
    fn helpers_surface_configuration_errors() {
        let args = ServerArgs::default();
        assert!(expand(&args, "http://x/1").unwrap_err().is_configuration());
        assert!(db_stats(&args).unwrap_err().is_configuration());
    }
}
