//! Order domain module.
//!
//! This crate turns cart contents into the outbound order: a human-readable
//! summary, the full message text, and the messaging deep link.

pub mod handoff;
pub mod summary;

pub use handoff::{handoff_url, Handoff};
pub use summary::{order_message, OrderSummary};
