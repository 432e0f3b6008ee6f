//! Input parameters for a window computation.

use serde::{Deserialize, Serialize};

/// Largest number of pages that may be pinned at either extremity.
pub const MAX_EDGE_COUNT: u64 = 3;

/// Which extremities receive pinned edge pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgePolicy {
    /// Pin `edge_count` pages at both the start and the end.
    #[default]
    Both,
    /// Pin pages at the end only. Used by the `show_last_page` form.
    TrailingOnly,
}

/// Request parameters for a single window computation.
///
/// Values are taken as given here; [`compute_window`](crate::window::compute_window)
/// clamps them into range before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationRequest {
    /// Page being viewed (1-based).
    pub current_page: u64,
    /// Total number of pages.
    pub total_pages: u64,
    /// Slot budget shared by the window, edge pages, and ellipses.
    pub max_visible: u64,
    /// Number of pages pinned at each extremity (0-3).
    #[serde(default)]
    pub edge_count: u64,
    /// Which extremities the edge pages apply to.
    #[serde(default)]
    pub edge_policy: EdgePolicy,
}

impl PaginationRequest {
    /// Create a request with no pinned edge pages.
    pub fn new(current_page: u64, total_pages: u64, max_visible: u64) -> Self {
        Self {
            current_page,
            total_pages,
            max_visible,
            edge_count: 0,
            edge_policy: EdgePolicy::Both,
        }
    }

    /// Create a request from an item count and page size.
    ///
    /// A zero page size is treated as 1 and an empty collection still has
    /// one page.
    pub fn from_item_count(
        current_page: u64,
        total_items: u64,
        page_size: u64,
        max_visible: u64,
    ) -> Self {
        Self::new(current_page, total_pages_for(total_items, page_size), max_visible)
    }

    /// Pin `count` pages at both extremities.
    pub fn with_edges(mut self, count: u64) -> Self {
        self.edge_count = count;
        self.edge_policy = EdgePolicy::Both;
        self
    }

    /// `showLastPage` compatibility form: when `true`, force the final page into view
    /// behind an ellipsis without pinning the first page.
    pub fn show_last_page(mut self, show: bool) -> Self {
        if show {
            self.edge_count = 1;
            self.edge_policy = EdgePolicy::TrailingOnly;
        } else {
            self.edge_count = 0;
            self.edge_policy = EdgePolicy::Both;
        }
        self
    }

    /// Return a copy of this request pointed at another page.
    pub fn at_page(mut self, page: u64) -> Self {
        self.current_page = page;
        self
    }
}

/// Number of pages needed to hold `total_items` at `page_size` per page.
pub fn total_pages_for(total_items: u64, page_size: u64) -> u64 {
    let page_size = page_size.max(1);
    if total_items == 0 {
        1
    } else {
        total_items.div_ceil(page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_for() {
        assert_eq!(total_pages_for(0, 25), 1);
        assert_eq!(total_pages_for(1, 25), 1);
        assert_eq!(total_pages_for(25, 25), 1);
        assert_eq!(total_pages_for(26, 25), 2);
        assert_eq!(total_pages_for(10, 0), 10);
    }

    #[test]
    fn test_show_last_page_sets_trailing_policy() {
        let req = PaginationRequest::new(3, 15, 10).show_last_page(true);
        assert_eq!(req.edge_count, 1);
        assert_eq!(req.edge_policy, EdgePolicy::TrailingOnly);

        let off = req.show_last_page(false);
        assert_eq!(off.edge_count, 0);
        assert_eq!(off.edge_policy, EdgePolicy::Both);
    }

    #[test]
    fn test_deserialize_defaults_edges() {
        let req: PaginationRequest =
            serde_json::from_str(r#"{"currentPage":2,"totalPages":9,"maxVisible":5}"#)
                .expect("valid request");
        assert_eq!(req, PaginationRequest::new(2, 9, 5));
    }
}
