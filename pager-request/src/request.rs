//! Page-request descriptor construction.

use serde::{Deserialize, Serialize};

use crate::sort::{SortOrder, parse_sort_str};

/// Default page size used when the caller does not specify one.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Descriptor for one page of data to request from a data-access layer.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct PageRequest {
    /// Zero-based page number to request.
    pub page_number: usize,
    /// Maximum number of elements in the page.
    pub page_size: usize,
    /// Ordering criteria, outermost first. Empty when unsorted.
    pub sort_orders: Vec<SortOrder>,
}

/// Builder for [`PageRequest`] values with a configurable default page size.
///
/// Holds no state beyond its configuration and can be shared freely across
/// callers.
#[derive(Clone, Copy, Debug)]
pub struct PageRequestBuilder {
    default_page_size: usize,
}

impl PageRequestBuilder {
    /// Create a builder with the given default page size.
    ///
    /// A size of zero is floored to one.
    pub fn new(default_page_size: usize) -> Self {
        Self {
            default_page_size: default_page_size.max(1),
        }
    }

    /// Page size applied when the caller does not pass one explicitly.
    pub const fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    /// Build a page request with an optional sort string.
    ///
    /// The sort string, when provided, must be in the format
    /// `field: direction,field: direction`, e.g. `id: ASC,name: DESC`.
    /// Unparseable segments are dropped, so the result is never an error.
    pub fn page_request(
        &self,
        page_number: usize,
        page_size: usize,
        sort_str: Option<&str>,
    ) -> PageRequest {
        let sort_orders = sort_str.map(parse_sort_str).unwrap_or_default();

        PageRequest {
            page_number,
            page_size,
            sort_orders,
        }
    }

    /// Build a page request using the configured default page size.
    pub fn page_request_with_default_size(
        &self,
        page_number: usize,
        sort_str: Option<&str>,
    ) -> PageRequest {
        self.page_request(page_number, self.default_page_size, sort_str)
    }
}

impl Default for PageRequestBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}
