//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::domain::{
    Action, ApiUrl, ConfigurationError, DbStats, LinkStats, OutputFormat, Password, ShortUrl,
    Shorten, ShortenedUrl, SignatureToken, Stats, StatsReport, Username,
};
use crate::transport::{
    Outcome, TransportError, decode_db_stats_json_response, decode_expand_json_response,
    decode_shorten_json_response, decode_stats_json_response, decode_url_stats_json_response,
    encode_db_stats_form, encode_expand_form, encode_shorten_form, encode_stats_form,
    encode_url_stats_form,
};

const DEFAULT_USER_AGENT: &str = concat!("yourls-rs/", env!("CARGO_PKG_VERSION"));

/// Error subject used for `db-stats`, which has no URL or filter of its own.
const DB_STATS_SUBJECT: &str = "db-stats";

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn post_form(
        &self,
        url: &str,
        params: Vec<(String, String)>,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport for ReqwestTransport {
    fn post_form(
        &self,
        url: &str,
        params: Vec<(String, String)>,
    ) -> Result<HttpResponse, Box<dyn StdError + Send + Sync>> {
        let response = self.client.post(url).form(&params).send()?;
        let status = response.status().as_u16();
        let body = response.text()?;
        Ok(HttpResponse { status, body })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Authentication credentials sent with every YOURLS request.
///
/// Use [`Auth::login_password`] for an account login, or [`Auth::signature`] for a
/// pre-shared signature token.
pub enum Auth {
    /// Authenticate via `username` + `password`.
    LoginPassword {
        username: Username,
        password: Password,
    },
    /// Authenticate via `signature`.
    Signature(SignatureToken),
}

impl Auth {
    /// Create [`Auth::LoginPassword`] and validate that both parts are non-empty.
    pub fn login_password(
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self::LoginPassword {
            username: Username::new(username)?,
            password: Password::new(password)?,
        })
    }

    /// Create [`Auth::Signature`] and validate that the token is non-empty after trimming.
    pub fn signature(token: impl Into<String>) -> Result<Self, ConfigurationError> {
        Ok(Self::Signature(SignatureToken::new(token)?))
    }

    /// Pick the authentication mode from loosely supplied parts.
    ///
    /// A complete username/password pair wins, and any token is then ignored.
    /// Otherwise a non-empty token is used. Anything else is
    /// [`ConfigurationError::MissingCredentials`].
    pub fn from_parts(
        username: Option<&str>,
        password: Option<&str>,
        token: Option<&str>,
    ) -> Result<Self, ConfigurationError> {
        if let (Some(username), Some(password)) = (username, password) {
            if let Ok(auth) = Self::login_password(username, password) {
                return Ok(auth);
            }
        }

        token
            .and_then(|token| Self::signature(token).ok())
            .ok_or(ConfigurationError::MissingCredentials)
    }

    fn push_form_params(&self, params: &mut Vec<(String, String)>) {
        match self {
            Self::LoginPassword { username, password } => {
                params.push((Username::FIELD.to_owned(), username.as_str().to_owned()));
                params.push((Password::FIELD.to_owned(), password.as_str().to_owned()));
            }
            Self::Signature(token) => {
                params.push((SignatureToken::FIELD.to_owned(), token.as_str().to_owned()));
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`YourlsClient`].
///
/// Two kinds matter to callers:
/// - [`YourlsError::Configuration`]: invalid static input, raised before any request,
/// - [`YourlsError::Operation`]: the call was attempted but did not succeed
///   (transport failure, `errorCode`, non-200 `statusCode`, missing result field).
pub enum YourlsError {
    /// Invalid endpoint, credentials, output format or stats filter.
    #[error("configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// The remote call failed. `subject` is the URL, keyword or filter the call was about.
    #[error("error with url '{subject}' - {message}")]
    Operation { subject: String, message: String },

    /// Response body could not be decoded as the JSON document the action returns.
    #[error("could not decode response for '{subject}': {source}")]
    Parse {
        subject: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The client was configured with a format this crate cannot decode.
    #[error("unsupported response format: {0} (only json responses can be decoded)")]
    UnsupportedResponseFormat(OutputFormat),

    /// The underlying HTTP client could not be initialised (TLS backend, etc).
    #[error("failed to initialise HTTP client: {0}")]
    HttpClient(#[source] Box<dyn StdError + Send + Sync>),
}

impl YourlsError {
    /// `true` for errors caused by invalid static input.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// `true` for failed remote calls.
    pub fn is_operation(&self) -> bool {
        matches!(self, Self::Operation { .. })
    }

    /// URL, keyword or filter the failed call was about, when there was one.
    pub fn subject(&self) -> Option<&str> {
        match self {
            Self::Operation { subject, .. } | Self::Parse { subject, .. } => Some(subject),
            _ => None,
        }
    }
}

#[derive(Clone)]
/// Builder for [`YourlsClient`].
///
/// Credentials may be given as username + password, as a signature token, or both;
/// see [`Auth::from_parts`] for how the mode is picked.
pub struct YourlsClientBuilder {
    api_url: String,
    username: Option<String>,
    password: Option<String>,
    signature: Option<String>,
    auth: Option<Auth>,
    format: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl YourlsClientBuilder {
    /// Create a builder for the given API script URL, requesting JSON responses.
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            username: None,
            password: None,
            signature: None,
            auth: None,
            format: OutputFormat::Json.as_str().to_owned(),
            timeout: None,
            user_agent: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn signature(mut self, token: impl Into<String>) -> Self {
        self.signature = Some(token.into());
        self
    }

    /// Use already validated credentials; loose username/password/signature values are ignored.
    pub fn auth(mut self, auth: Auth) -> Self {
        self.auth = Some(auth);
        self
    }

    /// Set the `format` parameter by name (`json`, `jsonp`, `xml` or `simple`).
    ///
    /// The name is validated by [`YourlsClientBuilder::build`].
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.format = format.as_str().to_owned();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the configuration and build a [`YourlsClient`].
    ///
    /// Checks run in order: output format, endpoint, credentials. No request is sent.
    pub fn build(self) -> Result<YourlsClient, YourlsError> {
        let format = self.format.parse::<OutputFormat>()?;
        let api_url = ApiUrl::new(self.api_url)?;
        let auth = match self.auth {
            Some(auth) => auth,
            None => Auth::from_parts(
                self.username.as_deref(),
                self.password.as_deref(),
                self.signature.as_deref(),
            )?,
        };

        let mut builder = reqwest::blocking::Client::builder().user_agent(
            self.user_agent
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned()),
        );
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|err| YourlsError::HttpClient(Box::new(err)))?;

        Ok(YourlsClient {
            api_url,
            auth,
            format,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// Blocking YOURLS API client.
///
/// Configuration is fixed at construction. Every operation sends exactly one
/// form-encoded POST to the API script, carrying the standing parameters
/// (credentials and `format`) merged with the operation's own parameters.
/// Nothing is cached between calls.
pub struct YourlsClient {
    api_url: ApiUrl,
    auth: Auth,
    format: OutputFormat,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for YourlsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("YourlsClient")
            .field("api_url", &self.api_url)
            .field("auth", &self.auth)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl YourlsClient {
    /// Create a JSON client for `api_url` with the given credentials.
    ///
    /// For more customization, use [`YourlsClient::builder`].
    pub fn new(api_url: impl Into<String>, auth: Auth) -> Result<Self, YourlsError> {
        Self::builder(api_url).auth(auth).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(api_url: impl Into<String>) -> YourlsClientBuilder {
        YourlsClientBuilder::new(api_url)
    }

    pub fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format
    }

    /// Shorten `url`, optionally requesting a custom `keyword` and passing a `title`.
    ///
    /// Blank `keyword`/`title` values are not sent. If the server already knows the
    /// URL it returns the existing short URL, which is treated as success.
    ///
    /// Errors:
    /// - [`YourlsError::Configuration`] if `url` is blank,
    /// - [`YourlsError::Operation`] when the keyword is taken or reserved, the server
    ///   reports an `errorCode`, or no `shorturl` comes back.
    pub fn shorten(
        &self,
        url: &str,
        keyword: Option<&str>,
        title: Option<&str>,
    ) -> Result<ShortenedUrl, YourlsError> {
        let request = Shorten::new(url, keyword, title)?;
        let subject = request.url().as_str();

        let body = self.send(Action::ShortUrl, subject, encode_shorten_form(&request))?;
        let outcome =
            decode_shorten_json_response(&body).map_err(|err| parse_error(subject, err))?;

        if let Outcome::Incomplete { message } = outcome {
            return Err(operation_error(
                subject,
                format!("Unknown error: {}", describe(message)),
            ));
        }
        classify(Action::ShortUrl, subject, outcome)
    }

    /// Resolve a short URL (or bare keyword) to the long URL it points at.
    ///
    /// Errors: [`YourlsError::Operation`] when the server reports an `errorCode` or
    /// returns no `longurl` (unknown short URL).
    pub fn expand(&self, short_url: &str) -> Result<String, YourlsError> {
        let short_url = ShortUrl::new(short_url)?;
        let subject = short_url.as_str();

        let body = self.send(Action::Expand, subject, encode_expand_form(&short_url))?;
        let outcome =
            decode_expand_json_response(&body).map_err(|err| parse_error(subject, err))?;
        classify(Action::Expand, subject, outcome)
    }

    /// Fetch statistics for a single short URL (or bare keyword).
    ///
    /// Errors: [`YourlsError::Operation`] when the server reports an `errorCode` or a
    /// `statusCode` other than 200.
    pub fn url_stats(&self, short_url: &str) -> Result<LinkStats, YourlsError> {
        let short_url = ShortUrl::new(short_url)?;
        let subject = short_url.as_str();

        let body = self.send(Action::UrlStats, subject, encode_url_stats_form(&short_url))?;
        let outcome =
            decode_url_stats_json_response(&body).map_err(|err| parse_error(subject, err))?;
        classify(Action::UrlStats, subject, outcome)
    }

    /// Fetch up to `limit` links selected by `filter` (`top`, `bottom`, `rand`, `last`)
    /// together with the aggregate totals. A `limit` of zero leaves the server default.
    ///
    /// Errors:
    /// - [`YourlsError::Configuration`] for an unknown filter, before any request,
    /// - [`YourlsError::Operation`] for an `errorCode` or a `statusCode` other than 200.
    pub fn stats(&self, filter: &str, limit: u32) -> Result<StatsReport, YourlsError> {
        let request = Stats::parse(filter, limit)?;
        let subject = request.filter().as_str();

        let body = self.send(Action::Stats, subject, encode_stats_form(&request))?;
        let outcome =
            decode_stats_json_response(&body).map_err(|err| parse_error(subject, err))?;
        classify(Action::Stats, subject, outcome)
    }

    /// Fetch the aggregate link and click counters.
    pub fn db_stats(&self) -> Result<DbStats, YourlsError> {
        let body = self.send(Action::DbStats, DB_STATS_SUBJECT, encode_db_stats_form())?;
        let outcome = decode_db_stats_json_response(&body)
            .map_err(|err| parse_error(DB_STATS_SUBJECT, err))?;
        classify(Action::DbStats, DB_STATS_SUBJECT, outcome)
    }

    fn standing_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::<(String, String)>::new();
        self.auth.push_form_params(&mut params);
        params.push((
            OutputFormat::FIELD.to_owned(),
            self.format.as_str().to_owned(),
        ));
        params
    }

    fn send(
        &self,
        action: Action,
        subject: &str,
        params: Vec<(String, String)>,
    ) -> Result<String, YourlsError> {
        if self.format != OutputFormat::Json {
            return Err(YourlsError::UnsupportedResponseFormat(self.format));
        }

        let params = merge_params(self.standing_params(), params);
        debug!(
            endpoint = self.api_url.as_str(),
            action = action.as_str(),
            subject,
            "sending YOURLS request"
        );

        let response = self
            .http
            .post_form(self.api_url.as_str(), params)
            .map_err(|err| operation_error(subject, err.to_string()))?;

        debug!(
            action = action.as_str(),
            status = response.status,
            bytes = response.body.len(),
            "received YOURLS response"
        );

        // YOURLS reports 403/404 with a JSON body; any other error response is fatal here.
        if !(200..=299).contains(&response.status) && !is_json(&response.body) {
            return Err(operation_error(
                subject,
                format!("unexpected HTTP status: {}", response.status),
            ));
        }

        Ok(response.body)
    }
}

fn is_json(body: &str) -> bool {
    serde_json::from_str::<serde::de::IgnoredAny>(body).is_ok()
}

/// Overlay per-call parameters on the standing ones; per-call values win.
fn merge_params(
    standing: Vec<(String, String)>,
    call: Vec<(String, String)>,
) -> Vec<(String, String)> {
    let mut merged = BTreeMap::<String, String>::new();
    merged.extend(standing);
    merged.extend(call);
    merged.into_iter().collect()
}

fn classify<T>(action: Action, subject: &str, outcome: Outcome<T>) -> Result<T, YourlsError> {
    match outcome {
        Outcome::Success(value) => Ok(value),
        Outcome::ApiError { code, message } => {
            warn!(
                action = action.as_str(),
                subject,
                error_code = %code,
                "YOURLS reported an error"
            );
            Err(operation_error(subject, describe(message)))
        }
        Outcome::Rejected { code, message } => {
            warn!(
                action = action.as_str(),
                subject,
                code = code.as_deref().unwrap_or("none"),
                "YOURLS rejected the request"
            );
            let message = message.unwrap_or_else(|| match code {
                Some(code) => format!("request rejected with code {code}"),
                None => "request rejected without a status code".to_owned(),
            });
            Err(operation_error(subject, message))
        }
        Outcome::Incomplete { message } => Err(operation_error(subject, describe(message))),
    }
}

fn describe(message: Option<String>) -> String {
    message.unwrap_or_else(|| "no message in response".to_owned())
}

fn operation_error(subject: &str, message: impl Into<String>) -> YourlsError {
    YourlsError::Operation {
        subject: subject.to_owned(),
        message: message.into(),
    }
}

fn parse_error(subject: &str, err: TransportError) -> YourlsError {
    YourlsError::Parse {
        subject: subject.to_owned(),
        source: Box::new(err),
    }
}
