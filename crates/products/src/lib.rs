//! Products domain module.
//!
//! This crate contains the business rules for a single stocked product,
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod product;

pub use product::Product;
