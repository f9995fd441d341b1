//! Catalog domain module.
//!
//! This crate contains the immutable product catalog and the pure
//! derivations over it (filtering, pagination), implemented as deterministic
//! domain logic (no IO, no presentation).

pub mod filter;
pub mod page;
pub mod product;
pub mod store;

pub use filter::{filter, CategorySelector, FilterCriteria};
pub use page::{paginate, visible_pages, Page, PageMarker, PageSize};
pub use product::{Product, ProductId, MAX_RATING};
pub use store::Catalog;
