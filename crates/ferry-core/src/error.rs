//! Error types for ferry-core

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the copy engine
#[derive(Error, Debug)]
pub enum Error {
    /// Source path does not exist
    #[error("Source file not found: {0}")]
    SourceNotFound(PathBuf),

    /// Source exists but is not a regular file
    #[error("Source is not a regular file: {0}")]
    SourceNotAFile(PathBuf),

    /// Destination directory does not exist
    #[error("Destination directory not found: {0}")]
    DestinationNotFound(PathBuf),

    /// Destination exists but is not a directory
    #[error("Destination is not a directory: {0}")]
    DestinationNotADirectory(PathBuf),

    /// Source path has no resolvable file name component
    #[error("Cannot determine file name for: {0}")]
    InvalidSourceName(PathBuf),

    /// I/O failure while opening, reading or writing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
