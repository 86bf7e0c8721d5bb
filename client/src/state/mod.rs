//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`orientation`, `chat`, `slides`, `site`) so
//! components depend on small focused models that are testable without a
//! browser.

pub mod chat;
pub mod orientation;
pub mod site;
pub mod slides;
