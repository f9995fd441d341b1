//! Storefront session module.
//!
//! One session per visitor: an explicit state struct owning the filter
//! criteria, page state, and cart, with user-intent entry points that
//! mutate it and read-only derived views for a presentation layer.

pub mod session;

pub use session::{BrowseView, StorefrontSession};
