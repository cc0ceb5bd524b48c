//! Clock-derived identifiers for records created locally

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::{SystemTime, UNIX_EPOCH},
};

/// Hands out identifiers derived from wall-clock milliseconds. Every id is
/// strictly greater than the previous one, so calls landing in the same
/// millisecond never collide.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    /// Returns a new generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next identifier, guaranteed to exceed both `floor` and
    /// every identifier this generator issued before. Returns `None` once
    /// no such identifier fits in a `u64`.
    pub fn next_id(&self, floor: u64) -> Option<u64> {
        let now = now_millis();
        let above_floor = floor.checked_add(1)?;
        let mut prev = self.last.load(Ordering::Relaxed);
        loop {
            let above_prev = prev.checked_add(1)?;
            let candidate = now.max(above_prev).max(above_floor);
            match self.last.compare_exchange_weak(
                prev,
                candidate,
                Ordering::AcqRel,
                Ordering::Relaxed,
            ) {
                Ok(_) => return Some(candidate),
                Err(actual) => prev = actual,
            }
        }
    }
}

fn now_millis() -> u64 {
    // a clock before the epoch yields 0 and falls back to the counter
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "./id_tests.rs"]
mod tests;
