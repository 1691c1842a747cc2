//! Unique identifier generation for command entities.

use std::sync::atomic::{AtomicU64, Ordering};

/// Produces a fresh, globally unique token on every call.
///
/// Implementations must never hand the same token to two callers, even
/// when called concurrently.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random UUID v4 identifiers.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Monotonic `<prefix>-<n>` identifiers, starting at 1.
#[derive(Debug)]
pub struct SequentialIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("cmd")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{n}", self.prefix)
    }
}
