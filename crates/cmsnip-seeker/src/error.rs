//! Error types for the seeker crate.

use thiserror::Error;

/// Errors that can occur when building pages.
#[derive(Debug, Error)]
pub enum SeekerError {
    /// Page numbers start at 1.
    #[error("page number must be at least 1")]
    ZeroPage,

    /// A page must hold at least one record.
    #[error("page limit must be at least 1")]
    ZeroLimit,
}

/// Result type for seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
