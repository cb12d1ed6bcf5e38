//! # countcopy
//!
//! Chunked stream-to-stream copying with byte-counting progress callbacks
//! and cooperative cancellation.
//!
//! ## Core Features
//!
//! - **Counting copy loop**: Moves bytes from any [`std::io::Read`] to any
//!   [`std::io::Write`] in fixed-size chunks, tracking cumulative read and
//!   write totals as it goes
//! - **Progress callbacks**: Optional per-chunk read/write hooks receive the
//!   running byte totals, and a completion hook receives the final pair
//! - **Cooperative cancellation**: A cancellable variant polls an
//!   `Arc<AtomicBool>` token between chunks and tears down both streams when
//!   cancellation is observed
//! - **Short-read safe**: Never assumes a full buffer per read; only the
//!   valid prefix of each chunk is written
//!
//! ## Quick Start
//!
//! ```
//! use countcopy::{CopyOptions, copy};
//! use std::io::Cursor;
//!
//! let mut source = Cursor::new(vec![7u8; 10_000]);
//! let mut dest = Vec::new();
//!
//! let options = CopyOptions::default()
//!     .with_chunk_size(1024)
//!     .on_write(|written| eprintln!("{written} bytes so far"))
//!     .on_finish(|read, written| assert_eq!((read, written), (10_000, 10_000)));
//!
//! copy(&mut source, &mut dest, options)?;
//! assert_eq!(dest.len(), 10_000);
//! # Ok::<(), countcopy::Error>(())
//! ```
//!
//! ## Cancellable Copy
//!
//! The cancellable variant takes ownership of both streams and a cancel
//! token. Setting the token from another thread (or a Ctrl+C handler) stops
//! the copy at the next chunk boundary; both streams are closed by the
//! routine and [`Error::Cancelled`] is returned instead of a byte count.
//!
//! ```
//! use countcopy::{CopyOptions, copy_cancellable};
//! use std::io::Cursor;
//! use std::sync::Arc;
//! use std::sync::atomic::AtomicBool;
//!
//! let cancel = Arc::new(AtomicBool::new(false));
//! let source = Cursor::new(b"stream me".to_vec());
//! let dest: Vec<u8> = Vec::new();
//!
//! let (read, written) = copy_cancellable(source, dest, CopyOptions::default(), cancel)?;
//! assert_eq!((read, written), (9, 9));
//! # Ok::<(), countcopy::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! For every chunk, the read callback fires strictly before the write for
//! that chunk, and the write callback fires strictly before the next read.
//! Callbacks run synchronously on the calling thread; nothing is deferred or
//! batched. A failed or cancelled copy fires no completion hook and returns
//! no counts; callers must treat the destination as holding an unspecified
//! prefix of the source.
//!
//! ## Optional Features
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `progress` | Progress bar support with indicatif |
//! | `tracing` | Structured logging with the tracing crate |
//! | `serde` | Serialize/Deserialize for [`CopyOptions`] |
//! | `full` | Enable all optional features |

#![cfg_attr(docsrs, feature(doc_cfg))]

mod copy;
mod error;
mod options;

#[cfg(feature = "progress")]
mod progress;

pub use copy::{copy, copy_cancellable};
pub use error::{Error, Result};
pub use options::{CopyOptions, DEFAULT_CHUNK_SIZE, FinishHook, ReadProgress, WriteProgress};

#[cfg(feature = "progress")]
#[cfg_attr(docsrs, doc(cfg(feature = "progress")))]
pub use progress::create_progress_bar;
