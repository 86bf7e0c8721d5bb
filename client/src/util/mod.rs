//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (scrolling, the
//! address fragment, timers, third-party scripts) from page and component
//! logic to improve reuse and testability.

pub mod embed;
pub mod hash_route;
pub mod reply_timer;
pub mod scroll;
