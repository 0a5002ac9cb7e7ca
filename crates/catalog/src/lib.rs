//! Catalog entities: products and suppliers.
//!
//! This crate contains the entity records the warehouse registry stores,
//! implemented purely as data + accessors (no IO, no storage).

pub mod product;
pub mod supplier;

pub use product::Product;
pub use supplier::Supplier;
