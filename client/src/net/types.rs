//! Wire DTOs for the moderation backend API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's message rows one-to-one so serde can
//! decode `/api/messages/all` payloads without a mapping layer. Everything
//! beyond the identity/status/text core is defaulted, since older rows omit
//! columns that were added over time.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Moderation decision attached to a message.
///
/// The backend only ever writes `ok` and `restricted`, but the catch-all
/// variant keeps one exotic row from failing the whole list decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    /// Accepted for delivery.
    Ok,
    /// Rejected by a moderator or the classifier.
    Restricted,
    /// Any status string this client does not know.
    #[serde(other)]
    Unknown,
}

impl MessageStatus {
    /// The lowercase wire spelling of this status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Restricted => "restricted",
            Self::Unknown => "unknown",
        }
    }

    pub fn is_ok(self) -> bool {
        self == Self::Ok
    }
}

/// A user-submitted message awaiting (or past) human review.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Row id, the stable reference key for mutations.
    pub id: i64,
    /// Current moderation decision.
    pub status: MessageStatus,
    /// The submitted text shown to the operator.
    pub message_text: String,
    /// Submitter display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Submitter age, if provided.
    #[serde(default)]
    pub age: Option<i64>,
    /// Submitter gender, if provided.
    #[serde(default)]
    pub gender: Option<String>,
    /// Submitter mood, if provided.
    #[serde(default)]
    pub mood: Option<String>,
    /// Classifier output: a JSON-encoded string on older rows, an already
    /// structured object on newer ones. Normalized before display.
    #[serde(default)]
    pub openai_response: Option<serde_json::Value>,
    /// Submission timestamp (SQLite `YYYY-MM-DD HH:MM:SS` or ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,
    /// Whether the delivery worker already picked this message up.
    #[serde(default)]
    pub is_fetched: bool,
    /// When the delivery worker picked it up, if it has.
    #[serde(default)]
    pub fetched_at: Option<String>,
}

/// JSON body for `PATCH /api/messages/{id}/status`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    /// Target decision; the backend accepts only `ok` and `restricted`.
    pub status: MessageStatus,
}
