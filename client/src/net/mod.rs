//! Networking modules for the moderation backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the list fetch and status PATCH calls, `types` defines the
//! wire schema those calls exchange with the backend.

pub mod api;
pub mod types;
