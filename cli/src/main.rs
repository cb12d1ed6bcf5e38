//! ccp - Counting Copy
//!
//! A single-file copy command with byte-level progress, powered by countcopy.

use clap::{Parser, ValueEnum};
use countcopy::{
    CopyOptions, DEFAULT_CHUNK_SIZE, Error as CountcopyError, copy_cancellable,
    create_progress_bar,
};
use indicatif::ProgressBar;
use serde_json::json;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use thiserror::Error;

/// ccp - Counting copy
///
/// Copy a single file chunk by chunk, reporting byte-level progress.
/// Ctrl+C cancels cleanly at the next chunk boundary and removes the
/// partial destination.
#[derive(Parser, Debug)]
#[command(name = "ccp", version, about, long_about = None)]
struct Args {
    /// Source file
    source: PathBuf,

    /// Destination file
    destination: PathBuf,

    /// Chunk size in bytes for each read/write
    #[arg(short = 'b', long, default_value_t = DEFAULT_CHUNK_SIZE)]
    chunk_size: usize,

    /// Overwrite the destination if it already exists
    #[arg(short, long)]
    force: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "human")]
    output: OutputMode,

    /// Disable the progress bar
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
enum CliError {
    #[error("Source does not exist: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Source is a directory (ccp copies single files): {path}")]
    SourceIsDirectory { path: PathBuf },

    #[error("Failed to read source metadata: {path}: {source}")]
    SourceMetadata { path: PathBuf, source: io::Error },

    #[error("Destination already exists (use --force to overwrite): {path}")]
    DestinationExists { path: PathBuf },

    #[error("Failed to open source: {path}: {source}")]
    OpenSource { path: PathBuf, source: io::Error },

    #[error("Failed to create destination: {path}: {source}")]
    CreateDestination { path: PathBuf, source: io::Error },

    #[error("Failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        source: CountcopyError,
    },

    #[error("Failed to serialize JSON output: {source}")]
    JsonSerialize { source: serde_json::Error },
}

fn is_cancelled(error: &CliError) -> bool {
    matches!(
        error,
        CliError::Copy {
            source: CountcopyError::Cancelled,
            ..
        }
    )
}

fn exit_code_for(error: &CliError) -> i32 {
    match error {
        CliError::SourceNotFound { .. }
        | CliError::SourceIsDirectory { .. }
        | CliError::DestinationExists { .. }
        | CliError::Copy {
            source: CountcopyError::InvalidChunkSize,
            ..
        } => 2,
        _ => 1,
    }
}

fn main() {
    if let Err(error) = run() {
        if is_cancelled(&error) {
            eprintln!("Cancelled; partial destination removed.");
            std::process::exit(130);
        }
        eprintln!("error: {}", error);
        std::process::exit(exit_code_for(&error));
    }
}

fn run() -> CliResult<()> {
    let args = Args::parse();

    let src_meta = match args.source.metadata() {
        Ok(meta) => meta,
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            return Err(CliError::SourceNotFound { path: args.source });
        }
        Err(source) => {
            return Err(CliError::SourceMetadata {
                path: args.source,
                source,
            });
        }
    };
    if src_meta.is_dir() {
        return Err(CliError::SourceIsDirectory { path: args.source });
    }

    if args.destination.exists() && !args.force {
        return Err(CliError::DestinationExists {
            path: args.destination,
        });
    }

    let src_file = File::open(&args.source).map_err(|source| CliError::OpenSource {
        path: args.source.clone(),
        source,
    })?;
    let dst_file = File::create(&args.destination).map_err(|source| CliError::CreateDestination {
        path: args.destination.clone(),
        source,
    })?;

    let cancel = Arc::new(AtomicBool::new(false));
    {
        let cancel_clone = cancel.clone();
        ctrlc::set_handler(move || {
            if cancel_clone.load(Ordering::Relaxed) {
                eprintln!("\nForce quit.");
                std::process::exit(130);
            }
            cancel_clone.store(true, Ordering::Relaxed);
            eprintln!(
                "\nCancelling... finishing the current chunk. Press Ctrl+C again to abort immediately."
            );
        })
        .ok();
    }

    let pb = if args.output == OutputMode::Human && !args.quiet {
        create_progress_bar(src_meta.len())
    } else {
        ProgressBar::hidden()
    };
    let bar = pb.clone();
    let options = CopyOptions::default()
        .with_chunk_size(args.chunk_size)
        .on_write(move |written| bar.set_position(written));

    let copy_result = copy_cancellable(src_file, dst_file, options, cancel);

    pb.finish_and_clear();

    match copy_result {
        Ok((bytes_read, bytes_written)) => {
            report_success(&args, bytes_read, bytes_written)?;
            Ok(())
        }
        Err(source) => {
            // copy_cancellable already closed both files on cancellation;
            // drop the partial destination so a cancelled copy leaves no
            // half-written file behind.
            if matches!(source, CountcopyError::Cancelled) {
                let _ = fs::remove_file(&args.destination);
            }
            Err(CliError::Copy {
                path: args.source,
                source,
            })
        }
    }
}

fn report_success(args: &Args, bytes_read: u64, bytes_written: u64) -> CliResult<()> {
    match args.output {
        OutputMode::Human => {
            println!(
                "Copied {} -> {} ({})",
                args.source.display(),
                args.destination.display(),
                format_bytes(bytes_written)
            );
            Ok(())
        }
        OutputMode::Json => {
            let payload = json!({
                "schema_version": "1.0",
                "source": args.source.display().to_string(),
                "destination": args.destination.display().to_string(),
                "bytes_read": bytes_read,
                "bytes_written": bytes_written,
            });
            let serialized = serde_json::to_string(&payload)
                .map_err(|source| CliError::JsonSerialize { source })?;
            println!("{serialized}");
            Ok(())
        }
    }
}

fn format_bytes(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
