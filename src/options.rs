//! Configuration options for copy operations.
//!
//! This module provides [`CopyOptions`] for configuring the chunk size and
//! the optional progress callbacks, plus the boxed callback type aliases.
//!
//! # Example
//!
//! ```
//! use countcopy::CopyOptions;
//!
//! let options = CopyOptions::default()
//!     .with_chunk_size(64 * 1024)
//!     .on_read(|read| eprintln!("read {read} bytes"));
//! ```

use std::fmt;

/// Default chunk size used when none is configured: 8 KiB.
pub const DEFAULT_CHUNK_SIZE: usize = 8 * 1024;

/// Read-progress callback, invoked with the cumulative read byte count
/// after each chunk is read.
pub type ReadProgress = Box<dyn FnMut(u64)>;

/// Write-progress callback, invoked with the cumulative written byte count
/// after each chunk is written.
pub type WriteProgress = Box<dyn FnMut(u64)>;

/// Completion hook, invoked exactly once per successful copy with the final
/// (bytes read, bytes written) pair.
pub type FinishHook = Box<dyn FnOnce(u64, u64)>;

/// Options for copy operations.
///
/// Use [`Default::default()`] for an 8 KiB chunk size and no callbacks,
/// then customize using the builder methods. Absent callbacks are no-ops.
///
/// # Default Values
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `chunk_size` | 8192 | Bytes moved per loop iteration |
/// | `on_read` | `None` | Cumulative read-progress callback |
/// | `on_write` | `None` | Cumulative write-progress callback |
/// | `on_finish` | `None` | Completion hook with final counts |
///
/// # Example
///
/// ```
/// use countcopy::CopyOptions;
///
/// let options = CopyOptions::default()
///     .with_chunk_size(1024)
///     .on_finish(|read, written| println!("done: {read} read, {written} written"));
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CopyOptions {
    /// Number of bytes moved per loop iteration (default: 8192)
    ///
    /// The copy routines reject a chunk size of zero with
    /// [`Error::InvalidChunkSize`](crate::Error::InvalidChunkSize).
    pub chunk_size: usize,

    /// Cumulative read-progress callback
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) on_read: Option<ReadProgress>,

    /// Cumulative write-progress callback
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) on_write: Option<WriteProgress>,

    /// Completion hook with the final (read, written) pair
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) on_finish: Option<FinishHook>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            on_read: None,
            on_write: None,
            on_finish: None,
        }
    }
}

impl CopyOptions {
    /// Set the chunk size in bytes.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the read-progress callback.
    ///
    /// Invoked synchronously after each chunk is read, with the cumulative
    /// number of bytes read so far in this operation.
    #[must_use]
    pub fn on_read(mut self, callback: impl FnMut(u64) + 'static) -> Self {
        self.on_read = Some(Box::new(callback));
        self
    }

    /// Set the write-progress callback.
    ///
    /// Invoked synchronously after each chunk is written, with the
    /// cumulative number of bytes written so far in this operation.
    #[must_use]
    pub fn on_write(mut self, callback: impl FnMut(u64) + 'static) -> Self {
        self.on_write = Some(Box::new(callback));
        self
    }

    /// Set the completion hook.
    ///
    /// Invoked exactly once when the source reaches end-of-stream, with the
    /// final (bytes read, bytes written) pair. Never invoked for a failed or
    /// cancelled copy.
    #[must_use]
    pub fn on_finish(mut self, callback: impl FnOnce(u64, u64) + 'static) -> Self {
        self.on_finish = Some(Box::new(callback));
        self
    }
}

// Boxed closures are not Debug; report presence only.
impl fmt::Debug for CopyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CopyOptions")
            .field("chunk_size", &self.chunk_size)
            .field("on_read", &self.on_read.is_some())
            .field("on_write", &self.on_write.is_some())
            .field("on_finish", &self.on_finish.is_some())
            .finish()
    }
}
