//! Fixed-width pagination window calculation.
//!
//! Computes the bounded window of page indices a pagination control should
//! display, given the cursor position and total page count. Pure math, no
//! I/O, safe to share across concurrent callers.

mod calculator;
mod page;
mod window;

pub use calculator::{DEFAULT_WIDTH, FixedWidthCalculator, WindowCalculator};
pub use page::{clamp_index, item_span, total_pages};
pub use window::PaginationWindow;
