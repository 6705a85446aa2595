use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    Empty { field: &'static str },
    InvalidApiUrl { input: String },
    MissingCredentials,
    UnsupportedFormat { input: String },
    UnsupportedFilter { input: String },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::InvalidApiUrl { input } => write!(f, "invalid api url: {input}"),
            Self::MissingCredentials => {
                write!(f, "username and password or signature token are required")
            }
            Self::UnsupportedFormat { input } => write!(
                f,
                "unsupported output format: {input} (expected json, jsonp, xml or simple)"
            ),
            Self::UnsupportedFilter { input } => write!(
                f,
                "unsupported stats filter: {input} (expected top, bottom, rand or last)"
            ),
        }
    }
}

impl std::error::Error for ConfigurationError {}
