//! Step navigation over a recorded trace.

use crate::types::{Configuration, Trace};

/// A position within a `Trace`, moved one step at a time.
///
/// The index is clamped to the trace: moving past either end leaves it where it is.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TraceCursor {
    trace: Trace,
    index: usize,
}

impl TraceCursor {
    /// Creates a cursor at the first configuration of `trace`.
    pub fn new(trace: Trace) -> Self {
        Self { trace, index: 0 }
    }

    /// Returns the configuration under the cursor, or `None` for an empty trace.
    pub fn current(&self) -> Option<&Configuration> {
        self.trace.get(self.index)
    }

    /// Advances one step. Returns `true` if the cursor moved.
    pub fn step_forward(&mut self) -> bool {
        if self.can_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Goes back one step. Returns `true` if the cursor moved.
    pub fn step_back(&mut self) -> bool {
        if self.can_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    pub fn first(&mut self) {
        self.index = 0;
    }

    pub fn last(&mut self) {
        self.index = self.trace.len().saturating_sub(1);
    }

    pub fn can_next(&self) -> bool {
        self.index + 1 < self.trace.len()
    }

    pub fn can_previous(&self) -> bool {
        self.index > 0
    }

    /// Checks if the cursor is on the last configuration (or the trace is empty).
    pub fn is_at_end(&self) -> bool {
        !self.can_next()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }
}
