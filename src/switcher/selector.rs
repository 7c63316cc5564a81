//! Selection cursor over the display window
//!
//! The selector only stores an index. Every operation takes the current
//! window length, so the index is always interpreted against the window
//! that is on screen and never against the full match set.

/// Cursor into the display window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selector {
    index: usize,
}

impl Selector {
    /// Create a selector at the top of the window
    #[must_use]
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// Current index
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Move one row down, stopping at the last row
    pub const fn move_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        if self.index + 1 < len {
            self.index += 1;
        } else {
            self.index = len - 1;
        }
    }

    /// Move one row up, stopping at the first row
    pub const fn move_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.index = self.index.saturating_sub(1);
    }

    /// Jump back to the first row
    pub const fn reset(&mut self) {
        self.index = 0;
    }

    /// Pull the index back inside a window of `len` rows
    pub const fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.index = 0;
        } else if self.index >= len {
            self.index = len - 1;
        }
    }

    /// Point at `index` if it is inside a window of `len` rows
    ///
    /// Returns whether the selection changed.
    pub const fn select(&mut self, index: usize, len: usize) -> bool {
        if index < len && index != self.index {
            self.index = index;
            true
        } else {
            false
        }
    }
}
