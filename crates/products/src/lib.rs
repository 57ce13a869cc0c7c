//! Products/catalog domain module.
//!
//! This crate contains the catalog filtering and comparison engine, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage), plus the
//! deterministic mock generators and the local/remote merge used to build a
//! catalog.

pub mod compare;
pub mod filter;
pub mod generator;
pub mod merge;
pub mod product;

#[cfg(test)]
pub(crate) mod testing;

pub use compare::{
    AttributeDiff, Comparison, IDENTICAL_MESSAGE, SELECT_TWO_PROMPT, compare, compare_by_id,
};
pub use filter::{CategoryFilter, FilterRequest, PriceBound, filter, results_label};
pub use generator::{DEFAULT_LOCAL_COUNT, DEFAULT_REMOTE_COUNT, generate_local, generate_remote};
pub use merge::merge_catalogs;
pub use product::{CURRENCY, Category, Product, stock_label};
pub use shopfront_core::ProductId;
