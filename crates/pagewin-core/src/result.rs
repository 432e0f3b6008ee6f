//! Convenience result type alias for pagewin.

use crate::error::AppError;

/// A specialized `Result` type for the fallible parts of pagewin.
pub type AppResult<T> = Result<T, AppError>;
