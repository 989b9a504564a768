//! Immutable pagination window value object.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Inclusive range of page indices selected for display, plus the cursor
/// position inside it.
///
/// A pagination component shows a series of page links; this type carries
/// the first, last, and currently viewed index of that series. It is zero
/// based: index 0 represents page 1 for display purposes. Start and end are
/// both inclusive, so a control listing pages 1, 2, 3 holds
/// `start_index = 0` and `end_index = 2`.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct PaginationWindow {
    start_index: usize,
    end_index: usize,
    current_index: usize,
}

impl PaginationWindow {
    /// Construct a window from inclusive start/end indices and the cursor.
    ///
    /// # Panics
    ///
    /// Panics when `start_index` exceeds `end_index` or when
    /// `current_index` falls outside `[start_index, end_index]`. Either
    /// indicates a calculator bug or caller misuse, not a recoverable
    /// runtime condition.
    pub fn new(start_index: usize, end_index: usize, current_index: usize) -> Self {
        assert!(
            start_index <= end_index,
            "start_index {start_index} must not exceed end_index {end_index}"
        );
        assert!(
            current_index >= start_index,
            "current_index {current_index} must not precede start_index {start_index}"
        );
        assert!(
            current_index <= end_index,
            "current_index {current_index} must not exceed end_index {end_index}"
        );

        Self {
            start_index,
            end_index,
            current_index,
        }
    }

    /// First page index in the window, inclusive.
    pub const fn start_index(&self) -> usize {
        self.start_index
    }

    /// Last page index in the window, inclusive.
    pub const fn end_index(&self) -> usize {
        self.end_index
    }

    /// Currently viewed page index, always within the window.
    pub const fn current_index(&self) -> usize {
        self.current_index
    }
}

impl fmt::Display for PaginationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PaginationWindow [start_index = {}, end_index = {}, current_index = {}]",
            self.start_index, self.end_index, self.current_index
        )
    }
}
