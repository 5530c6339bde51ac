//! Error types for cache construction.
//!
//! Lookups never fail: a miss is `None`. The only recoverable error is an
//! invalid construction argument.

use thiserror::Error;

/// Errors returned when building a cache.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CacheError {
    /// A construction argument was out of range, e.g. a capacity that is
    /// zero, negative, or does not fit in `usize`.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// Convenience `Result` type for this crate.
pub type Result<T> = core::result::Result<T, CacheError>;
