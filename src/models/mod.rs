use serde::Serialize;
use serde_json::Value;

/// Uniform response wrapper for every endpoint.
///
/// `data` is present iff `is_success` is true; `error` iff false.
/// `official_email` is always echoed from the process configuration.
#[derive(Debug, Serialize)]
pub struct Envelope {
    pub is_success: bool,
    pub official_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Envelope {
    pub fn success(official_email: &str, data: Value) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(official_email: &str, error: impl Into<String>) -> Self {
        Self {
            is_success: false,
            official_email: official_email.to_string(),
            data: None,
            error: Some(error.into()),
        }
    }

    /// Health responses echo the email with no data payload.
    pub fn healthy(official_email: &str) -> Self {
        Self {
            is_success: true,
            official_email: official_email.to_string(),
            data: None,
            error: None,
        }
    }
}
