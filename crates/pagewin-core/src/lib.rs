//! # pagewin-core
//!
//! Pagination window calculation for page-list controls. Given the current
//! page, the page count, and a slot budget, [`compute_window`] returns the
//! previous/next links, page numbers, pinned edge pages, and ellipses a host
//! should render.
//!
//! Also holds the configuration schema and the unified error type used by
//! the `pagewin` command-line host.

pub mod config;
pub mod error;
pub mod result;
pub mod types;
pub mod window;

pub use error::AppError;
pub use result::AppResult;
pub use types::{EdgePolicy, PageItem, PageLink, PaginationRequest, PaginationResult};
pub use window::compute_window;
