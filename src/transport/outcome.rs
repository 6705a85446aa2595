use super::number::TransportNumber;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Classified response of a single API action.
///
/// Every decoder reduces the loosely-shaped YOURLS payload to one of these
/// variants, in this precedence: `errorCode` first, then the action-specific
/// rejection marker, then presence of the success field.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    /// The payload carried a top-level `errorCode` (bad credentials, unknown action, ...).
    ApiError {
        code: String,
        message: Option<String>,
    },
    /// The server handled the request but refused it (`status: fail` with a known
    /// code, or a `statusCode` other than 200).
    Rejected {
        code: Option<String>,
        message: Option<String>,
    },
    /// The payload looked successful but the expected result field was absent.
    Incomplete { message: Option<String> },
}

impl<T> Outcome<T> {
    pub(super) fn api_error(code: TransportNumber, message: Option<String>) -> Self {
        Self::ApiError {
            code: code.as_str().to_owned(),
            message,
        }
    }
}

/// Builds a [`Outcome::Incomplete`] naming the result field a `statusCode: 200` payload lacked.
pub(super) fn missing_field<T>(field: &str) -> Outcome<T> {
    Outcome::Incomplete {
        message: Some(format!("missing '{field}' in response")),
    }
}

/// Returns `true` when YOURLS reported `statusCode == 200`.
pub(super) fn is_status_ok(status_code: Option<&TransportNumber>) -> bool {
    status_code.and_then(TransportNumber::as_u64) == Some(200)
}

/// Builds a [`Outcome::Rejected`] from a non-200 `statusCode`.
pub(super) fn rejected_by_status<T>(
    status_code: Option<TransportNumber>,
    message: Option<String>,
) -> Outcome<T> {
    Outcome::Rejected {
        code: status_code.map(|code| code.as_str().to_owned()),
        message,
    }
}
