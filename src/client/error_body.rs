//! Extraction of the `detail` message from backend error bodies.

use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Value,
}

/// Pulls a user-facing message out of a non-2xx response body.
///
/// Accepts `{"detail": "..."}` and the list shape produced for request
/// validation failures (`{"detail": [{"msg": "..."}, ...]}`), whose messages
/// are joined with `"; "`. Returns `None` for anything else.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    let detail = match parsed.detail {
        Value::String(s) => s,
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.as_str()),
                other => other.get("msg").and_then(Value::as_str),
            })
            .collect::<Vec<_>>()
            .join("; "),
        _ => return None,
    };
    let detail = detail.trim();
    (!detail.is_empty()).then(|| detail.to_string())
}
