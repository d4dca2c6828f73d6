//! Cooperative cancellation for mutation operations.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{InventoryError, InventoryResult};

/// Cheap, cloneable cancellation handle.
///
/// All clones observe the same flag. Operations consult the token at their
/// documented cancellation points only; once an operation has passed its
/// atomic commit point, cancellation is no longer honored.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Idempotent.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Fail with [`InventoryError::Cancelled`] once `cancel()` was called.
    pub fn check(&self) -> InventoryResult<()> {
        if self.is_cancelled() {
            Err(InventoryError::Cancelled)
        } else {
            Ok(())
        }
    }
}
