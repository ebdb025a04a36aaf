//! REST helpers for the moderation backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning the matching error variant, since the
//! backend is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Exactly two error kinds exist: a failed list refresh and a failed status
//! update. Callers decide how loud each one is — refresh failures keep stale
//! data on screen, mutation failures are surfaced to the operator.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{Message, MessageStatus};
#[cfg(feature = "hydrate")]
use super::types::UpdateStatusRequest;

/// Failure of one of the two backend calls.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The message-list refresh failed (network error or non-2xx response).
    #[error("message list fetch failed: {0}")]
    Fetch(String),
    /// A status update failed (network error or non-2xx response).
    #[error("status update failed: {0}")]
    Mutation(String),
}

/// Fallback origin used by debug builds when no override is configured.
#[cfg(any(test, feature = "hydrate"))]
const DEV_API_BASE: &str = "http://localhost:8000";

/// Resolve the backend origin once per build.
///
/// Priority: non-empty `MODQUEUE_API_URL` from the build environment, then
/// the local development origin in debug builds, then the page's own origin
/// (empty prefix, relative URLs).
#[cfg(any(test, feature = "hydrate"))]
pub fn api_base() -> String {
    resolve_api_base(option_env!("MODQUEUE_API_URL"), cfg!(debug_assertions))
}

#[cfg(any(test, feature = "hydrate"))]
fn resolve_api_base(override_url: Option<&str>, dev_build: bool) -> String {
    match override_url {
        Some(url) if !url.is_empty() => url.to_owned(),
        _ if dev_build => DEV_API_BASE.to_owned(),
        _ => String::new(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn messages_endpoint(base: &str) -> String {
    format!("{base}/api/messages/all")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_endpoint(base: &str, id: i64) -> String {
    format!("{base}/api/messages/{id}/status")
}

#[cfg(any(test, feature = "hydrate"))]
fn http_status_detail(status: u16) -> String {
    format!("status {status}")
}

/// Fetch the full message list from `GET /api/messages/all`.
///
/// # Errors
///
/// Returns [`ApiError::Fetch`] on network failure, a non-2xx response, or an
/// undecodable body.
pub async fn fetch_messages() -> Result<Vec<Message>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = messages_endpoint(&api_base());
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Fetch(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Fetch(http_status_detail(resp.status())));
        }
        resp.json::<Vec<Message>>().await.map_err(|e| ApiError::Fetch(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Fetch("not available on server".to_owned()))
    }
}

/// Request a status change via `PATCH /api/messages/{id}/status`.
///
/// The response body is ignored; only the status code matters.
///
/// # Errors
///
/// Returns [`ApiError::Mutation`] on network failure or a non-2xx response.
pub async fn update_message_status(id: i64, status: MessageStatus) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = status_endpoint(&api_base(), id);
        let resp = gloo_net::http::Request::patch(&url)
            .json(&UpdateStatusRequest { status })
            .map_err(|e| ApiError::Mutation(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Mutation(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Mutation(http_status_detail(resp.status())));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, status);
        Err(ApiError::Mutation("not available on server".to_owned()))
    }
}
