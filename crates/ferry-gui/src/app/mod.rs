//! Ferry GUI application module

mod events;
mod state;
mod ui;

pub use state::{FerryApp, Modal, UiState};

use crossbeam_channel::Receiver;
use egui_notify::Toasts;

use crate::animation::Reveal;
use crate::theme::FerryTheme;
use crate::worker::Worker;

impl FerryApp {
    /// Create a new application instance
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        log_receiver: Receiver<(tracing::Level, String)>,
    ) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self {
            state: UiState::Idle,
            source_input: String::new(),
            dest_input: String::new(),
            remove_partial_on_error: false,
            worker: Worker::spawn(),
            fraction: 0.0,
            bytes_copied: 0,
            total_bytes: 0,
            speed_bps: 0.0,
            eta_seconds: None,
            copying_name: String::new(),
            progress_reveal: Reveal::new(false),
            modal: None,
            toasts: Toasts::default(),
            logs: Vec::new(),
            show_log_panel: false,
            log_receiver,
            theme: FerryTheme::default(),
        }
    }
}
