use serde::Deserialize;

/// Numeric field that YOURLS sends either as a JSON number or as a string.
///
/// Server versions disagree (`"statusCode": 200` vs `"clicks": "12"`), so the
/// textual form is kept and parsed on demand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "TransportNumberRepr")]
pub struct TransportNumber(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum TransportNumberRepr {
    Number(serde_json::Number),
    String(String),
}

impl From<TransportNumberRepr> for TransportNumber {
    fn from(value: TransportNumberRepr) -> Self {
        match value {
            TransportNumberRepr::Number(value) => Self(value.to_string()),
            TransportNumberRepr::String(value) => Self(value),
        }
    }
}

impl TransportNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_u64(&self) -> Option<u64> {
        self.0.trim().parse::<u64>().ok()
    }
}
