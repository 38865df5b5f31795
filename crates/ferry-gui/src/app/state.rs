//! Application state

use crossbeam_channel::Receiver;
use egui_notify::Toasts;
use std::path::PathBuf;

use crate::animation::Reveal;
use crate::theme::FerryTheme;
use crate::worker::Worker;

/// UI state machine. Progress widgets are visible iff `Copying`; the
/// copy trigger is enabled iff `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiState {
    Idle,
    Copying,
}

/// Blocking modal dialogs; while one is open the rest of the window is
/// disabled.
#[derive(Debug, Clone)]
pub enum Modal {
    /// Source or destination field was empty when the copy was triggered
    MissingInput,
    /// Copy succeeded; carries the final destination path
    Success(PathBuf),
    /// Copy failed; carries the human-readable error text
    Failure(String),
}

/// Main application structure
pub struct FerryApp {
    /// Current state; transitioned only on copy start and on the
    /// worker's finished message
    pub(super) state: UiState,
    /// Source file path field
    pub(super) source_input: String,
    /// Destination directory path field
    pub(super) dest_input: String,
    /// Delete a partially-written destination file if the copy fails
    pub(super) remove_partial_on_error: bool,
    /// Background worker handle
    pub(super) worker: Worker,
    /// Completion fraction of the active copy (0.0 to 1.0)
    pub(super) fraction: f32,
    pub(super) bytes_copied: u64,
    pub(super) total_bytes: u64,
    pub(super) speed_bps: f64,
    pub(super) eta_seconds: Option<f64>,
    /// Name of the file being copied
    pub(super) copying_name: String,
    /// Animated reveal/collapse of the progress section
    pub(super) progress_reveal: Reveal,
    /// Currently open modal dialog, if any
    pub(super) modal: Option<Modal>,
    /// Toast notifications
    pub(super) toasts: Toasts,
    /// Log messages with level
    pub(super) logs: Vec<(tracing::Level, String)>,
    pub(super) show_log_panel: bool,
    /// Receiver for log messages from tracing
    pub(super) log_receiver: Receiver<(tracing::Level, String)>,
    pub(super) theme: FerryTheme,
}
