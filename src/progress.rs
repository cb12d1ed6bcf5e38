//! Progress reporting support (requires `progress` feature)

use indicatif::{ProgressBar, ProgressStyle};

/// Create a default byte-progress bar for a copy of known total size.
///
/// Wire the bar into a copy through the write-progress callback:
///
/// ```no_run
/// use countcopy::{CopyOptions, copy, create_progress_bar};
/// # let mut source = std::io::empty();
/// # let mut dest = std::io::sink();
///
/// let pb = create_progress_bar(10_240);
/// let bar = pb.clone();
/// let options = CopyOptions::default().on_write(move |written| bar.set_position(written));
/// copy(&mut source, &mut dest, options)?;
/// pb.finish_and_clear();
/// # Ok::<(), countcopy::Error>(())
/// ```
#[must_use]
pub fn create_progress_bar(total_bytes: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_bytes);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}, {eta})")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-"),
    );
    pb
}
