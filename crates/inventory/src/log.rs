//! Transaction-log records.
//!
//! Entries are facts: append-only, never updated, never deleted. One entry
//! exists for every committed import and every committed export, and for
//! nothing else.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockyard_core::{EntryId, WarehouseId};

/// Direction of a committed stock movement.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Import,
    Export,
}

/// One committed stock movement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Strictly increasing in insertion order.
    pub id: EntryId,
    pub kind: EntryKind,
    pub category: String,
    pub warehouse_id: WarehouseId,
    pub quantity_changed: i64,
    /// Commit time from the store's monotonic clock; never decreases across
    /// consecutive entries.
    pub recorded_at: DateTime<Utc>,
}

/// Filter for transaction-log queries. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub warehouse_id: Option<WarehouseId>,
    pub kind: Option<EntryKind>,
}

impl LogFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_warehouse(warehouse_id: WarehouseId) -> Self {
        Self {
            warehouse_id: Some(warehouse_id),
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: EntryKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn matches(&self, entry: &LogEntry) -> bool {
        if let Some(warehouse_id) = self.warehouse_id {
            if entry.warehouse_id != warehouse_id {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if entry.kind != kind {
                return false;
            }
        }
        true
    }
}
