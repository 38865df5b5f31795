//! Core copy engine for ferry
//!
//! This crate implements the chunked file copy loop with per-chunk progress
//! snapshots, plus the throughput/ETA tracking and the human-readable
//! formatters the GUI renders. No UI types appear here; progress flows out
//! through a plain callback.

pub mod copy;
pub mod error;
pub mod progress;

pub use copy::{copy_file, CopyOptions, CopyOutcome, CopyProgress, CopyRequest, CHUNK_SIZE};
pub use error::{Error, Result};
pub use progress::{format_duration, format_size, format_speed, ProgressTracker};
