//! Render-ready output of a window computation.

use serde::{Deserialize, Serialize};

/// Target of a previous/next control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageLink {
    /// Page the control navigates to.
    pub page: u64,
}

/// A single entry in the rendered page list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PageItem {
    /// A numbered page link.
    Page {
        /// Page number (1-based).
        page: u64,
        /// Whether this is the page being viewed.
        #[serde(rename = "isCurrent")]
        is_current: bool,
    },
    /// A placeholder for an elided run of pages.
    Ellipsis,
}

impl PageItem {
    /// Page number, or `None` for an ellipsis.
    pub fn page(&self) -> Option<u64> {
        match self {
            Self::Page { page, .. } => Some(*page),
            Self::Ellipsis => None,
        }
    }

    /// Whether this item marks the current page.
    pub fn is_current(&self) -> bool {
        matches!(self, Self::Page { is_current: true, .. })
    }
}

/// Controls to render for one page of a paginated view.
///
/// An empty result (no links, no items) means nothing should be rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationResult {
    /// Previous-page control, absent on the first page.
    pub previous: Option<PageLink>,
    /// Next-page control, absent on the last page.
    pub next: Option<PageLink>,
    /// Page links and ellipses in display order.
    pub items: Vec<PageItem>,
}

impl PaginationResult {
    /// Whether there is nothing to render.
    pub fn is_empty(&self) -> bool {
        self.previous.is_none() && self.next.is_none() && self.items.is_empty()
    }

    /// The page marked current, if any.
    pub fn current_page(&self) -> Option<u64> {
        self.items
            .iter()
            .find(|item| item.is_current())
            .and_then(PageItem::page)
    }

    /// Numbered pages in display order.
    pub fn pages(&self) -> Vec<u64> {
        self.items.iter().filter_map(PageItem::page).collect()
    }

    /// Number of ellipsis placeholders.
    pub fn ellipsis_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, PageItem::Ellipsis))
            .count()
    }
}
