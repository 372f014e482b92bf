//! Convenience result type alias for CurseAPI.

use crate::error::AppError;

/// A specialized `Result` type for CurseAPI operations.
pub type AppResult<T> = Result<T, AppError>;
