// SPDX-License-Identifier: MPL-2.0
//! Sequence navigation over the feed.
//!
//! Tracks which record is active and moves through the sequence without
//! wraparound. The controller never holds the records themselves, only the
//! active index and the sequence length, so it stays trivially cloneable.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationController {
    active_index: usize,
    len: usize,
}

impl NavigationController {
    /// Creates a controller for a sequence of `len` records, starting at
    /// the first one.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            active_index: 0,
            len,
        }
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.active_index + 1 < self.len
    }

    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.active_index > 0
    }

    /// Jumps to `index`, clamped to the valid range.
    ///
    /// Returns the new index if it actually changed, `None` for a no-op
    /// (already there, or the sequence is empty).
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let clamped = index.min(self.len - 1);
        if clamped == self.active_index {
            return None;
        }
        self.active_index = clamped;
        Some(clamped)
    }

    /// Advances to the next record. No wraparound: a no-op at the end.
    pub fn next(&mut self) -> Option<usize> {
        if self.has_next() {
            self.active_index += 1;
            Some(self.active_index)
        } else {
            None
        }
    }

    /// Steps back to the previous record. No wraparound: a no-op at the
    /// start.
    pub fn previous(&mut self) -> Option<usize> {
        if self.has_previous() {
            self.active_index -= 1;
            Some(self.active_index)
        } else {
            None
        }
    }

    /// Adjusts to a new sequence length, pulling the active index back in
    /// range if the sequence shrank.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.active_index = 0;
        } else if self.active_index >= len {
            self.active_index = len - 1;
        }
    }
}
