//! Append-only diagnostic sink.
//!
//! Content processing absorbs every front-matter failure instead of raising
//! it, so diagnostics are the only trace an operator gets of a degraded
//! document. `Diagnostics` is a cloneable handle over a shared append-only
//! buffer: processing code records entries, tests and operators read them
//! back, and nothing in the engine ever branches on them.
//!
//! Handles are cheap to clone and share one buffer, so a pipeline and the
//! test asserting on it can hold the same sink. Callers that process many
//! documents clear the sink between documents (or use one handle per
//! document) to keep entries attributable.
//!
//! # Example
//!
//! ```rust
//! use markpress_core::Diagnostics;
//!
//! let diagnostics = Diagnostics::new();
//! diagnostics.record("YAML parse error in front matter");
//!
//! let entries = diagnostics.entries();
//! assert_eq!(entries.len(), 1);
//!
//! diagnostics.clear();
//! assert!(diagnostics.is_empty());
//! ```

use std::sync::{Arc, Mutex};

/// Cloneable handle to a shared, append-only diagnostic buffer.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    entries: Arc<Mutex<Vec<String>>>,
}

impl Diagnostics {
    /// Create a new, empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry. Also mirrored to the `log` facade at warn level.
    pub fn record(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("{message}");
        self.lock().push(message);
    }

    /// Snapshot of all entries recorded since the last clear.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Remove and return all entries recorded since the last clear.
    pub fn drain(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock())
    }

    /// Discard all entries.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the sink holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether any entry contains the given needle. Convenience for tests
    /// and operator tooling scanning for a known marker.
    pub fn any_contains(&self, needle: &str) -> bool {
        self.lock().iter().any(|entry| entry.contains(needle))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A poisoned lock only means a panicking writer; the buffer itself
        // is still a valid Vec<String>.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// ============================================================================
// Tests
// ============================================================================
