//! Event handling for the Ferry GUI application

use super::{FerryApp, Modal, UiState};
use crate::worker::{Command, CopyStatus};
use ferry_core::{CopyOptions, CopyRequest};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// What the copy trigger should do, given the current state and fields
#[derive(Debug)]
pub(super) enum CopyDecision {
    /// A copy is already running; the trigger is ignored outright
    Ignore,
    /// A path field was empty; block with a validation dialog
    MissingInput,
    /// Hand this request to the worker
    Start(CopyRequest),
}

/// Decide whether a copy may start. Only `Idle` can start one, so a
/// second trigger while a copy runs can never reach the worker.
/// Filesystem checks are left to the worker.
pub(super) fn copy_decision(state: UiState, source: &str, destination: &str) -> CopyDecision {
    if state != UiState::Idle {
        return CopyDecision::Ignore;
    }
    match validated_request(source, destination) {
        Some(request) => CopyDecision::Start(request),
        None => CopyDecision::MissingInput,
    }
}

/// Build a copy request from the two path fields. Returns `None` when
/// either field is empty after trimming.
fn validated_request(source: &str, destination: &str) -> Option<CopyRequest> {
    let source = source.trim();
    let destination = destination.trim();
    if source.is_empty() || destination.is_empty() {
        return None;
    }
    Some(CopyRequest::new(source, destination))
}

/// Where a file dialog should open: the current field's parent when one
/// is set, otherwise the mount root on macOS or the home directory.
pub(super) fn dialog_start_dir(current: &str) -> Option<PathBuf> {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        if let Some(parent) = Path::new(trimmed).parent() {
            if !parent.as_os_str().is_empty() && parent.is_dir() {
                return Some(parent.to_path_buf());
            }
        }
    }

    #[cfg(target_os = "macos")]
    {
        Some(PathBuf::from("/Volumes"))
    }
    #[cfg(not(target_os = "macos"))]
    {
        dirs::home_dir()
    }
}

impl FerryApp {
    /// Open the OS file picker for the source field
    pub(super) fn browse_source(&mut self) {
        let mut dialog = rfd::FileDialog::new();
        if let Some(dir) = dialog_start_dir(&self.source_input) {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_file() {
            self.source_input = path.display().to_string();
        }
    }

    /// Open the OS folder picker for the destination field
    pub(super) fn browse_destination(&mut self) {
        let mut dialog = rfd::FileDialog::new();
        if let Some(dir) = dialog_start_dir(&self.dest_input) {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.pick_folder() {
            self.dest_input = path.display().to_string();
        }
    }

    /// Idle -> Copying. The trigger is disabled while Copying, but the
    /// decision check keeps a second copy impossible regardless.
    pub(super) fn start_copy(&mut self) {
        let request = match copy_decision(self.state, &self.source_input, &self.dest_input) {
            CopyDecision::Ignore => return,
            CopyDecision::MissingInput => {
                warn!("Copy triggered with missing input");
                self.modal = Some(Modal::MissingInput);
                return;
            }
            CopyDecision::Start(request) => request,
        };

        let name = request
            .source
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();

        let options = CopyOptions {
            remove_partial_on_error: self.remove_partial_on_error,
        };

        if self.worker.send(Command::Copy { request, options }).is_ok() {
            self.state = UiState::Copying;
            self.fraction = 0.0;
            self.bytes_copied = 0;
            self.total_bytes = 0;
            self.speed_bps = 0.0;
            self.eta_seconds = None;
            self.copying_name = name.clone();
            self.progress_reveal.set(true);
            info!(file = %name, "Copy started");
            self.toasts.info(format!("Copying {}...", name));
        } else {
            warn!("Failed to send copy command to background thread");
            self.toasts
                .error("Failed to start copy: background thread not responding");
        }
    }

    /// Copying -> Idle. Single cleanup path for both outcomes, so the
    /// window can never stay stuck showing in-progress state.
    pub(super) fn finish_copy(&mut self, status: CopyStatus) {
        self.state = UiState::Idle;
        self.fraction = 0.0;
        self.bytes_copied = 0;
        self.total_bytes = 0;
        self.speed_bps = 0.0;
        self.eta_seconds = None;
        self.copying_name.clear();
        self.progress_reveal.set(false);

        match status {
            CopyStatus::Success { destination } => {
                info!(destination = %destination.display(), "Copy succeeded");
                self.toasts.success("File copied");
                self.modal = Some(Modal::Success(destination));
            }
            CopyStatus::Error(message) => {
                warn!(error = %message, "Copy failed");
                self.toasts.error("Copy failed");
                self.modal = Some(Modal::Failure(message));
            }
        }
    }
}
