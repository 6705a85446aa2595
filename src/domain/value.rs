use crate::domain::validation::ConfigurationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Location of the YOURLS API script (usually `.../yourls-api.php`).
///
/// Invariant: non-empty after trimming and parseable as an absolute URL.
pub struct ApiUrl(String);

impl ApiUrl {
    /// Name used for this value in error messages.
    pub const FIELD: &'static str = "api_url";

    /// Create a validated [`ApiUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }
        url::Url::parse(trimmed).map_err(|_| ConfigurationError::InvalidApiUrl {
            input: trimmed.to_owned(),
        })?;
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// YOURLS account username.
///
/// Invariant: non-empty after trimming. Stored and sent as provided.
pub struct Username(String);

impl Username {
    /// Form field name used by YOURLS (`username`).
    pub const FIELD: &'static str = "username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// YOURLS account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
pub struct Password(String);

impl Password {
    /// Form field name used by YOURLS (`password`).
    pub const FIELD: &'static str = "password";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Pre-shared signature token, usable instead of username + password.
///
/// Invariant: non-empty after trimming. Stored and sent as provided.
pub struct SignatureToken(String);

impl SignatureToken {
    /// Form field name used by YOURLS (`signature`).
    pub const FIELD: &'static str = "signature";

    /// Create a validated [`SignatureToken`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SignatureToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SignatureToken(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Long URL submitted for shortening (`url`).
///
/// Invariant: non-empty after trimming. Stored and sent as provided.
pub struct LongUrl(String);

impl LongUrl {
    /// Form field name used by YOURLS (`url`).
    pub const FIELD: &'static str = "url";

    /// Create a validated [`LongUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Short URL or bare keyword identifying an existing link (`shorturl`).
///
/// YOURLS accepts either form for `expand` and `url-stats`. Blank input is
/// rejected; anything else is sent as provided.
pub struct ShortUrl(String);

impl ShortUrl {
    /// Form field name used by YOURLS (`shorturl`).
    pub const FIELD: &'static str = "shorturl";

    /// Create a validated [`ShortUrl`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated short URL.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Custom keyword requested for a new short URL (`keyword`).
pub struct Keyword(String);

impl Keyword {
    /// Form field name used by YOURLS (`keyword`).
    pub const FIELD: &'static str = "keyword";

    /// Create a validated [`Keyword`].
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Explicit page title (`title`); saves the server from fetching the target page.
pub struct Title(String);

impl Title {
    /// Form field name used by YOURLS (`title`).
    pub const FIELD: &'static str = "title";

    /// Create a validated [`Title`]. The original value (including whitespace) is preserved.
    pub fn new(value: impl Into<String>) -> Result<Self, ConfigurationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ConfigurationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
