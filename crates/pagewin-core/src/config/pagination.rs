//! Default display constraints for pagination controls.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{MAX_EDGE_COUNT, PaginationRequest, total_pages_for};

/// Default display constraints applied when a host does not supply its own.
#[derive(Debug, Clone, PartialEq, Eq, Validate, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    /// Slot budget shared by the window, edge pages, and ellipses.
    #[validate(range(min = 1, max = 50))]
    pub max_visible: u64,
    /// Pages pinned at each extremity.
    #[validate(range(max = 3))]
    pub edge_count: u64,
    /// Pin edge pages at the end only (the `show_last_page` form).
    pub trailing_edge_only: bool,
    /// Items per page when pages are derived from an item count.
    #[validate(range(min = 1, max = 100))]
    pub page_size: u64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            max_visible: default_max_visible(),
            edge_count: 0,
            trailing_edge_only: false,
            page_size: default_page_size(),
        }
    }
}

impl PaginationConfig {
    /// Build a request for `current_page` of `total_pages` using these defaults.
    pub fn request(&self, current_page: u64, total_pages: u64) -> PaginationRequest {
        let request = PaginationRequest::new(current_page, total_pages, self.max_visible);
        let edges = self.edge_count.min(MAX_EDGE_COUNT);
        if self.trailing_edge_only && edges > 0 {
            let mut request = request.show_last_page(true);
            request.edge_count = edges;
            request
        } else {
            request.with_edges(edges)
        }
    }

    /// Build a request from an item count, paging by `page_size`.
    pub fn request_for_items(&self, current_page: u64, total_items: u64) -> PaginationRequest {
        self.request(current_page, total_pages_for(total_items, self.page_size))
    }
}

fn default_max_visible() -> u64 {
    10
}

fn default_page_size() -> u64 {
    25
}
