//! Strongly-typed identifiers used across the registry.
//!
//! Both identifiers are caller-supplied text: a sku for products and a plain
//! name for suppliers. The newtypes exist so the two key spaces cannot be
//! mixed up at a call site.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Unique textual identifier of a product.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

/// Unique textual identifier of a supplier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierName(String);

macro_rules! impl_text_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create an identifier from already-validated text.
            ///
            /// The registry trusts callers for content here (spec'd behavior:
            /// no validation beyond type parsing); use `from_str` when the
            /// text comes straight from user input.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = RegistryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                if s.trim().is_empty() {
                    return Err(RegistryError::invalid_id(concat!(
                        $name,
                        " cannot be blank"
                    )));
                }
                Ok(Self(s.to_owned()))
            }
        }
    };
}

impl_text_id!(Sku, "Sku");
impl_text_id!(SupplierName, "SupplierName");
