#![forbid(unsafe_code)]

//! Theme-change notification.
//!
//! The toolkit callback only bumps a generation counter. Whoever owns the
//! caches compares the generation it last saw against the current one before
//! serving a query, so any number of notifications between two queries cost
//! one rebuild. Each adapter owns its own notifier; nothing is process-wide.

use std::cell::Cell;
use std::rc::Rc;

/// Shared, single-threaded change counter.
#[derive(Debug, Clone, Default)]
pub struct ChangeNotifier {
    generation: Rc<Cell<u64>>,
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the native theme changed.
    pub fn notify(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    /// Number of notifications so far.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.get()
    }
}
