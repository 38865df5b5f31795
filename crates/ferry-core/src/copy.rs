//! Chunked file copy with per-chunk progress snapshots

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// Chunk size for the copy loop. Small enough to keep the UI update
/// frequency high, large enough to keep syscall overhead reasonable.
pub const CHUNK_SIZE: usize = 4096;

/// A request to copy one file into a destination directory
#[derive(Debug, Clone)]
pub struct CopyRequest {
    /// File to copy; must be an existing regular file
    pub source: PathBuf,
    /// Directory to copy into; must be an existing writable directory
    pub destination_dir: PathBuf,
}

impl CopyRequest {
    pub fn new(source: impl Into<PathBuf>, destination_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination_dir: destination_dir.into(),
        }
    }
}

/// Options controlling copy behavior
#[derive(Debug, Clone, Default)]
pub struct CopyOptions {
    /// Delete a destination file the copy created if the copy fails partway.
    /// Off by default: a failed copy leaves the partial file on disk.
    /// Cleanup never removes a path that already existed before the copy.
    pub remove_partial_on_error: bool,
}

/// Progress snapshot handed to the caller after every chunk
#[derive(Debug, Clone, Copy)]
pub struct CopyProgress {
    /// Bytes written to the destination so far
    pub bytes_copied: u64,
    /// Size of the source file at the start of the copy
    pub total_bytes: u64,
    /// Time elapsed since the copy started
    pub elapsed: Duration,
}

impl CopyProgress {
    /// Completion percentage in 0..=100. An empty source counts as
    /// already complete, so a zero total never divides.
    pub fn percent(&self) -> f64 {
        if self.total_bytes == 0 {
            100.0
        } else {
            self.bytes_copied as f64 / self.total_bytes as f64 * 100.0
        }
    }

    /// Completion fraction in 0..=1, for progress bar widgets
    pub fn fraction(&self) -> f32 {
        (self.percent() / 100.0) as f32
    }

    pub fn remaining_bytes(&self) -> u64 {
        self.total_bytes.saturating_sub(self.bytes_copied)
    }

    /// Average throughput in bytes per second, 0 until time has elapsed
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.bytes_copied as f64 / secs
        } else {
            0.0
        }
    }

    /// Estimated seconds remaining, None until throughput is known
    pub fn eta_seconds(&self) -> Option<f64> {
        let throughput = self.throughput();
        if throughput > 0.0 && self.bytes_copied < self.total_bytes {
            Some(self.remaining_bytes() as f64 / throughput)
        } else {
            None
        }
    }
}

/// Result of a successful copy
#[derive(Debug, Clone)]
pub struct CopyOutcome {
    /// Final path of the copied file
    pub destination: PathBuf,
    /// Number of bytes written
    pub bytes_copied: u64,
}

/// Copy `request.source` to `request.destination_dir/basename(source)`,
/// overwriting an existing file at that path.
///
/// `on_progress` is invoked with a fresh snapshot after every chunk, and
/// once more after the last byte, so even an empty source produces one
/// snapshot reporting 100%. On success, permissions and file times are
/// carried over to the destination.
pub fn copy_file(
    request: &CopyRequest,
    options: &CopyOptions,
    mut on_progress: impl FnMut(&CopyProgress),
) -> Result<CopyOutcome> {
    let source_meta = fs::metadata(&request.source).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::SourceNotFound(request.source.clone())
        } else {
            Error::Io(e)
        }
    })?;
    if !source_meta.is_file() {
        return Err(Error::SourceNotAFile(request.source.clone()));
    }

    let dest_meta = fs::metadata(&request.destination_dir).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::DestinationNotFound(request.destination_dir.clone())
        } else {
            Error::Io(e)
        }
    })?;
    if !dest_meta.is_dir() {
        return Err(Error::DestinationNotADirectory(
            request.destination_dir.clone(),
        ));
    }

    let file_name = request
        .source
        .file_name()
        .ok_or_else(|| Error::InvalidSourceName(request.source.clone()))?;
    let destination = request.destination_dir.join(file_name);
    let existed_before = destination.symlink_metadata().is_ok();

    let total_bytes = source_meta.len();
    debug!(
        source = %request.source.display(),
        destination = %destination.display(),
        total_bytes,
        "Starting copy"
    );

    let mut reader = File::open(&request.source)?;
    let mut writer = File::create(&destination)?;

    let start = Instant::now();
    let result = run_copy_loop(
        &mut reader,
        &mut writer,
        total_bytes,
        start,
        &mut on_progress,
    );
    drop(writer);

    let bytes_copied = match result {
        Ok(n) => n,
        Err(e) => {
            if options.remove_partial_on_error && !existed_before {
                if let Err(rm_err) = fs::remove_file(&destination) {
                    warn!(path = %destination.display(), error = %rm_err, "Failed to remove partial file");
                } else {
                    debug!(path = %destination.display(), "Removed partial file after failed copy");
                }
            }
            return Err(e);
        }
    };

    apply_metadata(&source_meta, &destination)?;

    info!(
        destination = %destination.display(),
        bytes_copied,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Copy completed"
    );

    Ok(CopyOutcome {
        destination,
        bytes_copied,
    })
}

fn run_copy_loop(
    reader: &mut File,
    writer: &mut File,
    total_bytes: u64,
    start: Instant,
    on_progress: &mut impl FnMut(&CopyProgress),
) -> Result<u64> {
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut bytes_copied: u64 = 0;

    loop {
        let read = reader.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        writer.write_all(&buffer[..read])?;
        bytes_copied += read as u64;

        on_progress(&CopyProgress {
            bytes_copied,
            total_bytes,
            elapsed: start.elapsed(),
        });
    }
    writer.flush()?;

    // Final snapshot, so an empty source still reports completion
    on_progress(&CopyProgress {
        bytes_copied,
        total_bytes,
        elapsed: start.elapsed(),
    });

    Ok(bytes_copied)
}

/// Carry permissions and file times over to the destination. Timestamp
/// failures are non-fatal.
fn apply_metadata(source_meta: &fs::Metadata, destination: &Path) -> Result<()> {
    fs::set_permissions(destination, source_meta.permissions())?;

    if let (Ok(accessed), Ok(modified)) = (source_meta.accessed(), source_meta.modified()) {
        if let Err(e) = filetime::set_file_times(
            destination,
            filetime::FileTime::from_system_time(accessed),
            filetime::FileTime::from_system_time(modified),
        ) {
            warn!(path = %destination.display(), error = %e, "Failed to set file times");
        }
    }

    Ok(())
}
