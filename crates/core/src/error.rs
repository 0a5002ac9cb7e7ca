//! Domain error model.

use thiserror::Error;

/// Result type used across the registry.
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Registry-level error.
///
/// Keep this focused on deterministic, domain failures. The registry performs
/// no IO, so there is nothing infrastructural to report here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An identifier was invalid (e.g. blank sku or supplier name).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// The referenced entity does not exist in the registry.
    #[error("not found")]
    NotFound,
}

impl RegistryError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}
