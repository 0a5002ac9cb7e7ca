//! Warehouse registry: the authoritative in-memory store of products and
//! suppliers.
//!
//! All mutation and query operations live on [`Warehouse`]. Each operation is
//! a single atomic step over the two mappings; there is no internal state
//! machine. [`SharedWarehouse`] wraps the registry in one lock for embedders
//! that need to mutate it from more than one thread.

pub mod shared;
pub mod warehouse;

pub use shared::SharedWarehouse;
pub use warehouse::Warehouse;
