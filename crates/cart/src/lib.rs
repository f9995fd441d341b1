//! Cart domain module.
//!
//! This crate contains the single-session cart aggregator, implemented
//! purely as deterministic domain logic (no IO, no presentation).

pub mod cart;

pub use cart::{Cart, CartLine};
