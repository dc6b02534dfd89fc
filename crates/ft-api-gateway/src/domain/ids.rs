//! Record id allocation.
//!
//! Ids are decimal millisecond timestamps. Two allocations in the same
//! millisecond (or after the clock steps back) get `last + 1`, so ids stay
//! unique and strictly increasing for the life of the process.

use crate::ports::{SystemTimeSource, TimeSource};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Allocates strictly increasing timestamp ids.
pub struct RecordIdAllocator {
    clock: Arc<dyn TimeSource>,
    last: AtomicU64,
}

impl RecordIdAllocator {
    pub fn new(clock: Arc<dyn TimeSource>) -> Self {
        Self {
            clock,
            last: AtomicU64::new(0),
        }
    }

    /// Next id as a number
    pub fn next_raw(&self) -> u64 {
        let now = self.clock.now_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(observed) => last = observed,
            }
        }
    }

    /// Next id
    pub fn next_id(&self) -> String {
        self.next_raw().to_string()
    }

    /// Current time from the allocator's clock, in milliseconds
    pub fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }
}

impl Default for RecordIdAllocator {
    fn default() -> Self {
        Self::new(Arc::new(SystemTimeSource))
    }
}

impl std::fmt::Debug for RecordIdAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordIdAllocator")
            .field("last", &self.last.load(Ordering::Relaxed))
            .finish()
    }
}
