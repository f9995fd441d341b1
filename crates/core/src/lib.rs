//! `petalcart-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the storefront
//! crates (no IO, no presentation concerns).

pub mod config;
pub mod error;

pub use config::StoreConfig;
pub use error::{DomainError, DomainResult};
