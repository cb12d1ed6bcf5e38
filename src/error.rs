//! Error types for countcopy.
//!
//! This module provides the [`Error`] enum containing all possible errors
//! that can occur during copy operations, and the [`Result`] type alias.
//!
//! # Error Categories
//!
//! | Category | Errors |
//! |----------|--------|
//! | IO | [`Error::Io`] |
//! | Validation | [`Error::InvalidChunkSize`] |
//! | Control | [`Error::Cancelled`] |

use std::io;
use thiserror::Error;

/// Result type for countcopy operations.
///
/// This is a type alias for `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during copy operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// IO error while reading from the source or writing to the destination.
    ///
    /// The copy loop aborts on the first failed read or write; no completion
    /// hook fires and the byte totals at the point of failure are not
    /// reported.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The requested chunk size was zero.
    ///
    /// A zero-sized buffer would make end-of-stream indistinguishable from
    /// an empty read, so it is rejected before any I/O happens.
    #[error("chunk size must be at least 1 byte")]
    InvalidChunkSize,

    /// The operation was cancelled via its cancellation token.
    ///
    /// Only returned by [`copy_cancellable`](crate::copy_cancellable). Both
    /// streams have been closed by the routine; how many bytes reached the
    /// destination before the cancellation point is unspecified.
    #[error("copy cancelled before end of stream")]
    Cancelled,
}
