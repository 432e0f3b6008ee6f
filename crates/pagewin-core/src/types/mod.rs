//! Request and result types for window computation.

pub mod pagination;
pub mod request;

pub use pagination::{PageItem, PageLink, PaginationResult};
pub use request::{EdgePolicy, MAX_EDGE_COUNT, PaginationRequest, total_pages_for};
