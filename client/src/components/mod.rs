//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the deck chrome and interactive slides while reading and
//! writing shared state from Leptos context providers.

pub mod checkout_embed;
pub mod demo_chat;
pub mod floating_elements;
pub mod join_button;
pub mod orientation_toggle;
pub mod slide_deck;
pub mod waitlist_form;
