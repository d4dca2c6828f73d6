//! Strongly-typed identifiers used across the inventory core.
//!
//! All identifiers are store-assigned sequence numbers: strictly increasing
//! per entity type, starting at 1, never reused. Callers never mint ids
//! themselves outside of tests.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::InventoryError;

/// Identifier of a warehouse (storage site).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WarehouseId(u64);

/// Identifier of a product currently (or formerly) stored in a warehouse.
///
/// A product id belongs to exactly one lifecycle: once the product is
/// exported, the id is retired and never reissued.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(u64);

/// Identifier of a transaction-log entry (strictly increasing append order).
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(u64);

macro_rules! impl_sequence_id {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap a raw sequence number.
            ///
            /// Ids are assigned by the store's per-entity-type counter;
            /// constructing one by hand is meant for tests and seeding.
            pub fn new(value: u64) -> Self {
                Self(value)
            }

            pub fn value(&self) -> u64 {
                self.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<u64> for $t {
            fn from(value: u64) -> Self {
                Self(value)
            }
        }

        impl From<$t> for u64 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = InventoryError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let value = u64::from_str(s)
                    .map_err(|e| InventoryError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(value))
            }
        }
    };
}

impl_sequence_id!(WarehouseId, "WarehouseId");
impl_sequence_id!(ProductId, "ProductId");
impl_sequence_id!(EntryId, "EntryId");
