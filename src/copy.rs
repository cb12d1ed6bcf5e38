//! Core copy operations.
//!
//! This module provides the chunked counting-copy loop and its two public
//! entry points: the blocking [`copy`] and the cooperatively cancellable
//! [`copy_cancellable`].

use crate::error::{Error, Result};
use crate::options::CopyOptions;
use std::io::{self, Read, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// How one pass of the copy loop ended.
enum Outcome {
    /// End-of-stream reached; final byte totals.
    Finished { bytes_read: u64, bytes_written: u64 },
    /// The cancel token was observed set at an iteration boundary.
    Cancelled,
}

/// The counting-copy loop shared by both entry points.
///
/// Reads up to `options.chunk_size` bytes per iteration, writes exactly the
/// valid prefix, and fires the progress callbacks with cumulative totals.
/// The cancel token, when present, is polled once per iteration before the
/// read; an in-flight read or write is never interrupted.
fn copy_chunks<R, W>(
    source: &mut R,
    dest: &mut W,
    options: &mut CopyOptions,
    cancel: Option<&AtomicBool>,
) -> Result<Outcome>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    // A zero-sized buffer would make every read return Ok(0) and the loop
    // would mistake that for end-of-stream.
    if options.chunk_size == 0 {
        return Err(Error::InvalidChunkSize);
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(chunk_size = options.chunk_size, "starting chunked copy");

    let mut buffer = vec![0u8; options.chunk_size];
    let mut bytes_read: u64 = 0;
    let mut bytes_written: u64 = 0;

    loop {
        if let Some(token) = cancel {
            if token.load(Ordering::Relaxed) {
                #[cfg(feature = "tracing")]
                tracing::debug!(bytes_read, bytes_written, "copy cancelled");
                return Ok(Outcome::Cancelled);
            }
        }

        // Short reads are expected; Ok(0) with a non-empty buffer means
        // end-of-stream.
        let read = match source.read(&mut buffer) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };

        bytes_read += read as u64;
        if let Some(on_read) = options.on_read.as_mut() {
            on_read(bytes_read);
        }

        dest.write_all(&buffer[..read])?;

        bytes_written += read as u64;
        if let Some(on_write) = options.on_write.as_mut() {
            on_write(bytes_written);
        }
    }

    if let Some(on_finish) = options.on_finish.take() {
        on_finish(bytes_read, bytes_written);
    }

    Ok(Outcome::Finished {
        bytes_read,
        bytes_written,
    })
}

/// Copy all remaining bytes from `source` to `dest`, blocking until done.
///
/// Bytes are moved in chunks of `options.chunk_size`. After each chunk the
/// read callback fires with the cumulative read total, then the chunk is
/// written and the write callback fires with the cumulative written total.
/// When the source reaches end-of-stream the completion hook (if set) fires
/// once with the final `(read, written)` pair; the two totals are always
/// equal on this path.
///
/// The streams are borrowed: this routine neither opens nor closes them.
///
/// # Errors
///
/// Returns an error if:
/// - `options.chunk_size` is zero ([`Error::InvalidChunkSize`])
/// - A read or write fails ([`Error::Io`]); the loop aborts on the first
///   failure and no completion hook fires
///
/// # Example
///
/// ```
/// use countcopy::{CopyOptions, copy};
/// use std::io::Cursor;
///
/// let mut source = Cursor::new(b"hello world".to_vec());
/// let mut dest = Vec::new();
///
/// copy(&mut source, &mut dest, CopyOptions::default())?;
/// assert_eq!(dest, b"hello world");
/// # Ok::<(), countcopy::Error>(())
/// ```
pub fn copy<R, W>(source: &mut R, dest: &mut W, mut options: CopyOptions) -> Result<()>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    match copy_chunks(source, dest, &mut options, None)? {
        Outcome::Finished { .. } => Ok(()),
        // No token is supplied on this path, so the loop never observes a
        // cancellation.
        Outcome::Cancelled => Err(Error::Cancelled),
    }
}

/// Copy all remaining bytes from `source` to `dest`, stopping early if the
/// cancel token is set.
///
/// The same counting loop as [`copy`], with two differences:
///
/// - `cancel` is polled at each iteration boundary. Cancellation is
///   cooperative: an in-flight read or write always completes, but no
///   further iteration begins once the token is observed set.
/// - The streams are taken by value. On cancellation this routine closes
///   both by dropping them (close-time errors have nowhere to go and are
///   ignored) and returns [`Error::Cancelled`]; no counts are reported and
///   no further callbacks fire. On normal completion the streams are
///   likewise dropped after the final write.
///
/// On normal completion returns the final `(bytes_read, bytes_written)`
/// pair exactly once, matching what the completion hook (if set) received.
///
/// # Errors
///
/// Returns an error if:
/// - `options.chunk_size` is zero ([`Error::InvalidChunkSize`])
/// - A read or write fails ([`Error::Io`])
/// - The token is observed set before end-of-stream ([`Error::Cancelled`])
///
/// # Example
///
/// ```
/// use countcopy::{CopyOptions, copy_cancellable};
/// use std::io::Cursor;
/// use std::sync::Arc;
/// use std::sync::atomic::AtomicBool;
///
/// let cancel = Arc::new(AtomicBool::new(false));
/// let source = Cursor::new(vec![0u8; 4096]);
/// let dest: Vec<u8> = Vec::new();
///
/// let (read, written) =
///     copy_cancellable(source, dest, CopyOptions::default().with_chunk_size(1024), cancel)?;
/// assert_eq!((read, written), (4096, 4096));
/// # Ok::<(), countcopy::Error>(())
/// ```
pub fn copy_cancellable<R, W>(
    mut source: R,
    mut dest: W,
    mut options: CopyOptions,
    cancel: Arc<AtomicBool>,
) -> Result<(u64, u64)>
where
    R: Read,
    W: Write,
{
    match copy_chunks(&mut source, &mut dest, &mut options, Some(&cancel))? {
        Outcome::Finished {
            bytes_read,
            bytes_written,
        } => Ok((bytes_read, bytes_written)),
        Outcome::Cancelled => {
            // Closing is dropping; a close failure cannot mask the
            // cancellation outcome.
            drop(source);
            drop(dest);
            Err(Error::Cancelled)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
