//! Page window calculation.
//!
//! [`compute_window`] turns a [`PaginationRequest`] into the ordered list of
//! controls a host should render: previous/next links, a run of page numbers
//! centered on the current page, pinned edge pages, and ellipses for the
//! elided runs in between.
//!
//! The slot budget (`max_visible`) covers everything in `items`. When edge
//! pages are requested, the edge pages and one ellipsis per pinned side are
//! reserved out of it and the remainder ("display slots") is the width of the
//! centered window. The leading edge run, the window, and the trailing edge
//! run are merged where they touch or overlap. A gap of exactly one page is
//! never elided; that page is rendered in the ellipsis slot instead.

use tracing::{debug, trace};

use crate::types::{
    EdgePolicy, MAX_EDGE_COUNT, PageItem, PageLink, PaginationRequest, PaginationResult,
};

/// Request after clamping every field into its valid range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Normalized {
    current: u64,
    total: u64,
    max_visible: u64,
    edges: u64,
    policy: EdgePolicy,
}

impl Normalized {
    fn from_request(request: &PaginationRequest) -> Self {
        let total = request.total_pages.max(1);
        let current = request.current_page.clamp(1, total);
        let edges = request.edge_count.min(MAX_EDGE_COUNT);
        let policy = request.edge_policy;
        let max_visible = request.max_visible.max(reserved_slots(edges, policy) + 1);

        if current != request.current_page {
            trace!(
                requested = request.current_page,
                clamped = current,
                "Clamped current page"
            );
        }
        if max_visible != request.max_visible {
            trace!(
                requested = request.max_visible,
                clamped = max_visible,
                "Raised max_visible to fit edge reservations"
            );
        }

        Self {
            current,
            total,
            max_visible,
            edges,
            policy,
        }
    }

    fn reserved(&self) -> u64 {
        reserved_slots(self.edges, self.policy)
    }

    fn display_slots(&self) -> u64 {
        (self.max_visible - self.reserved()).max(1)
    }

    fn leading_edges(&self) -> u64 {
        match self.policy {
            EdgePolicy::Both => self.edges,
            EdgePolicy::TrailingOnly => 0,
        }
    }
}

/// Slots taken by edge pages plus one ellipsis per pinned side.
fn reserved_slots(edges: u64, policy: EdgePolicy) -> u64 {
    if edges == 0 {
        return 0;
    }
    match policy {
        EdgePolicy::Both => edges * 2 + 2,
        EdgePolicy::TrailingOnly => edges + 1,
    }
}

/// Compute the pagination controls for `request`.
///
/// Out-of-range inputs are clamped, never rejected. A single page yields an
/// empty result.
pub fn compute_window(request: &PaginationRequest) -> PaginationResult {
    let n = Normalized::from_request(request);

    if n.total == 1 {
        debug!(current = n.current, "Single page, no controls");
        return PaginationResult::default();
    }

    let previous = (n.current > 1).then(|| PageLink { page: n.current - 1 });
    let next = (n.current < n.total).then(|| PageLink { page: n.current + 1 });

    if n.total <= n.max_visible {
        debug!(
            current = n.current,
            total = n.total,
            max_visible = n.max_visible,
            "All pages fit"
        );
        return PaginationResult {
            previous,
            next,
            items: (1..=n.total).map(|page| page_item(page, n.current)).collect(),
        };
    }

    let slots = n.display_slots();
    let (start, end) = window_bounds(n.current, n.total, slots);

    debug!(
        current = n.current,
        total = n.total,
        max_visible = n.max_visible,
        edges = n.edges,
        policy = ?n.policy,
        slots,
        start,
        end,
        "Computed page window"
    );

    let mut runs = Runs::new(n.current);
    runs.push(1, n.leading_edges());
    runs.push(start, end);
    if n.edges > 0 {
        runs.push(n.total - n.edges + 1, n.total);
    }

    PaginationResult {
        previous,
        next,
        items: runs.items,
    }
}

/// Accumulates ascending page runs, filling the space between them.
struct Runs {
    current: u64,
    last: u64,
    items: Vec<PageItem>,
}

impl Runs {
    fn new(current: u64) -> Self {
        Self {
            current,
            last: 0,
            items: Vec::new(),
        }
    }

    /// Emit `from..=to`, skipping pages already emitted.
    fn push(&mut self, from: u64, to: u64) {
        if to < from || to <= self.last {
            return;
        }
        let from = from.max(self.last + 1);
        if self.last > 0 {
            match from - self.last {
                1 => {}
                2 => self.items.push(page_item(self.last + 1, self.current)),
                _ => self.items.push(PageItem::Ellipsis),
            }
        }
        self.items.extend((from..=to).map(|page| page_item(page, self.current)));
        self.last = to;
    }
}

/// Inclusive bounds of a `slots`-wide window centered on `current`.
///
/// Requires `slots < total`.
fn window_bounds(current: u64, total: u64, slots: u64) -> (u64, u64) {
    let last_start = total - slots + 1;
    let start = current.saturating_sub(slots / 2).clamp(1, last_start);
    (start, start + slots - 1)
}

fn page_item(page: u64, current: u64) -> PageItem {
    PageItem::Page {
        page,
        is_current: page == current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Option<u64> = None;

    /// Flatten items to `Some(page)` / `None` for ellipsis.
    fn layout(result: &PaginationResult) -> Vec<Option<u64>> {
        result.items.iter().map(PageItem::page).collect()
    }

    fn pages(range: std::ops::RangeInclusive<u64>) -> Vec<Option<u64>> {
        range.map(Some).collect()
    }

    #[test]
    fn test_first_of_five() {
        let result = compute_window(&PaginationRequest::new(1, 5, 10));
        assert_eq!(layout(&result), pages(1..=5));
        assert_eq!(result.previous, None);
        assert_eq!(result.next, Some(PageLink { page: 2 }));
        assert_eq!(result.current_page(), Some(1));
    }

    #[test]
    fn test_middle_of_five() {
        let result = compute_window(&PaginationRequest::new(3, 5, 10));
        assert_eq!(layout(&result), pages(1..=5));
        assert_eq!(result.current_page(), Some(3));
        assert_eq!(result.previous, Some(PageLink { page: 2 }));
        assert_eq!(result.next, Some(PageLink { page: 4 }));
    }

    #[test]
    fn test_window_clamped_at_start() {
        let result = compute_window(&PaginationRequest::new(5, 20, 10));
        assert_eq!(layout(&result), pages(1..=10));
        assert_eq!(result.current_page(), Some(5));
        assert_eq!(result.ellipsis_count(), 0);
    }

    #[test]
    fn test_window_centered() {
        let result = compute_window(&PaginationRequest::new(12, 20, 5));
        assert_eq!(layout(&result), pages(10..=14));
    }

    #[test]
    fn test_window_clamped_at_end() {
        let result = compute_window(&PaginationRequest::new(19, 20, 10));
        assert_eq!(layout(&result), pages(11..=20));
        assert_eq!(result.next, Some(PageLink { page: 20 }));
    }

    #[test]
    fn test_show_last_page() {
        let request = PaginationRequest::new(3, 15, 10).show_last_page(true);
        let result = compute_window(&request);

        let mut want = pages(1..=8);
        want.extend([E, Some(15)]);
        assert_eq!(layout(&result), want);
        assert_eq!(result.current_page(), Some(3));
    }

    #[test]
    fn test_show_last_page_never_pins_first() {
        let request = PaginationRequest::new(12, 30, 10).show_last_page(true);
        let result = compute_window(&request);

        let mut want = pages(8..=15);
        want.extend([E, Some(30)]);
        assert_eq!(layout(&result), want);
    }

    #[test]
    fn test_single_page_gap_is_rendered() {
        let request = PaginationRequest::new(6, 15, 10).with_edges(1);
        let result = compute_window(&request);

        let mut want = pages(1..=8);
        want.extend([E, Some(15)]);
        assert_eq!(layout(&result), want);
        assert_eq!(result.ellipsis_count(), 1);
    }

    #[test]
    fn test_both_ellipses() {
        let request = PaginationRequest::new(10, 20, 9).with_edges(1);
        let result = compute_window(&request);

        let mut want = vec![Some(1), E];
        want.extend(pages(8..=12));
        want.extend([E, Some(20)]);
        assert_eq!(layout(&result), want);
        assert_eq!(result.items.len(), 9);
    }

    #[test]
    fn test_two_edges_each_side() {
        let request = PaginationRequest::new(25, 50, 11).with_edges(2);
        let result = compute_window(&request);

        let mut want = vec![Some(1), Some(2), E];
        want.extend(pages(23..=27));
        want.extend([E, Some(49), Some(50)]);
        assert_eq!(layout(&result), want);
        assert_eq!(result.items.len(), 11);
    }

    #[test]
    fn test_trailing_edges_clipped_near_end() {
        let request = PaginationRequest::new(49, 50, 11).with_edges(2);
        let result = compute_window(&request);

        let mut want = vec![Some(1), Some(2), E];
        want.extend(pages(46..=50));
        assert_eq!(layout(&result), want);
    }

    #[test]
    fn test_single_page_is_empty() {
        for current in [0, 1, 7] {
            let request = PaginationRequest::new(current, 1, 10).with_edges(2);
            assert!(compute_window(&request).is_empty());
        }
    }

    #[test]
    fn test_out_of_range_inputs_are_clamped() {
        let high = compute_window(&PaginationRequest::new(99, 5, 10));
        assert_eq!(high.current_page(), Some(5));
        assert_eq!(high.next, None);

        let low = compute_window(&PaginationRequest::new(0, 5, 10));
        assert_eq!(low.current_page(), Some(1));
        assert_eq!(low.previous, None);

        let no_pages = compute_window(&PaginationRequest::new(3, 0, 10));
        assert!(no_pages.is_empty());
    }

    #[test]
    fn test_max_visible_raised_for_edges() {
        // Edges of 5 clamp to 3, so the budget is raised to 3*2 + 3.
        let request = PaginationRequest::new(50, 100, 1).with_edges(5);
        let result = compute_window(&request);

        let mut want = vec![Some(1), Some(2), Some(3), E, Some(50), E];
        want.extend([Some(98), Some(99), Some(100)]);
        assert_eq!(layout(&result), want);
    }

    #[test]
    fn test_window_inside_leading_edges() {
        let request = PaginationRequest::new(2, 20, 9).with_edges(3);
        let result = compute_window(&request);

        let want = vec![Some(1), Some(2), Some(3), E, Some(18), Some(19), Some(20)];
        assert_eq!(layout(&result), want);
        assert_eq!(result.current_page(), Some(2));
    }

    #[test]
    fn test_zero_max_visible_shows_current() {
        let result = compute_window(&PaginationRequest::new(4, 9, 0));
        assert_eq!(layout(&result), vec![Some(4)]);
    }

    #[test]
    fn test_idempotent() {
        let request = PaginationRequest::new(7, 40, 9).with_edges(2);
        assert_eq!(compute_window(&request), compute_window(&request));
    }
}
