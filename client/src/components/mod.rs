//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render individual moderation affordances while the page owns
//! orchestration and shared state wiring.

pub mod message_card;
