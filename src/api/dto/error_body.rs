//! Error body returned by the service on non-2xx responses.

use serde::Deserialize;
use serde_json::Value;

/// Lenient view of an error response: `{"detail": ...}` or `{"error": ...}`.
///
/// Either field may be a string or any other JSON value.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,

    #[serde(default)]
    pub error: Option<Value>,
}

impl ApiErrorBody {
    /// Parses raw response bytes. Bodies that are not a JSON object yield an empty body.
    pub fn parse(bytes: &[u8]) -> Self {
        serde_json::from_slice(bytes).unwrap_or_default()
    }

    /// The human-readable cause, preferring `detail` over `error`.
    pub fn message(&self) -> Option<String> {
        [&self.detail, &self.error]
            .into_iter()
            .flatten()
            .find_map(value_to_message)
    }
}

fn value_to_message(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
