//! Page-request descriptors built from primitive inputs and a compact
//! sort-string syntax.
//!
//! Peripheral to the window calculation in `pager-window`: the calculator
//! never sees these types. They describe which page of data to fetch and in
//! what order, for consumption by a data-access layer.

mod request;
mod sort;

pub use request::{DEFAULT_PAGE_SIZE, PageRequest, PageRequestBuilder};
pub use sort::{Direction, SortOrder, parse_sort_str};
