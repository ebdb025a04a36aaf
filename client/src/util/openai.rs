//! Tolerant normalization of stored classifier output.
//!
//! DESIGN
//! ======
//! Older backend rows store `openai_response` as a JSON-encoded string,
//! newer ones as an already structured object, and hand-edited rows can hold
//! plain prose. Normalization is total: every input maps to a displayable
//! structure, parse failures fold into a fallback object instead of raising.

#[cfg(test)]
#[path = "openai_test.rs"]
mod openai_test;

use serde_json::{Value, json};

/// Internal classification of a raw `openai_response` value.
enum Normalized {
    /// Already structured, or successfully parsed from JSON text.
    Parsed(Value),
    /// Text that is not valid JSON; carried verbatim into the fallback.
    Fallback(String),
}

fn classify(raw: &Value) -> Normalized {
    match raw {
        Value::String(text) => serde_json::from_str(text)
            .map(Normalized::Parsed)
            .unwrap_or_else(|_| Normalized::Fallback(text.clone())),
        other => Normalized::Parsed(other.clone()),
    }
}

/// Produce a structured value for display from a raw `openai_response`.
///
/// JSON text parses to its structure; non-JSON text becomes
/// `{"response": <text>, "status": "unknown"}`; anything non-textual is
/// returned unchanged. Never panics.
pub fn normalize_openai_response(raw: &Value) -> Value {
    match classify(raw) {
        Normalized::Parsed(value) => value,
        Normalized::Fallback(text) => json!({ "response": text, "status": "unknown" }),
    }
}

/// The classifier's own verdict, when the normalized value carries one.
pub fn verdict_status(raw: &Value) -> Option<String> {
    normalize_openai_response(raw)
        .get("status")
        .and_then(Value::as_str)
        .map(str::to_owned)
}
