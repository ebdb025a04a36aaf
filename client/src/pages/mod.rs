//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The dashboard is a single screen; the page owns polling, mutation
//! dispatch, and layout, and delegates card rendering to `components`.

pub mod moderation;
