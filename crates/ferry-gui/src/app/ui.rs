//! UI rendering and update logic for the Ferry GUI application

use eframe::egui;
use tracing::Level;

use super::{FerryApp, Modal, UiState};
use crate::worker::Event;
use ferry_core::{format_duration, format_size, format_speed};

impl FerryApp {
    /// Drain pending worker events and tracing messages
    pub(super) fn process_messages(&mut self) {
        while let Ok((level, message)) = self.log_receiver.try_recv() {
            let stamped = format!("[{}] {}", chrono::Local::now().format("%H:%M:%S%.3f"), message);
            self.logs.push((level, stamped));
            if self.logs.len() > 1000 {
                self.logs.drain(0..100);
            }
        }

        while let Some(event) = self.worker.try_recv() {
            match event {
                Event::Progress(update) => {
                    self.fraction = update.fraction;
                    self.bytes_copied = update.bytes_copied;
                    self.total_bytes = update.total_bytes;
                    self.speed_bps = update.speed_bps;
                    self.eta_seconds = update.eta_seconds;
                }
                Event::Finished(status) => {
                    self.finish_copy(status);
                }
            }
        }
    }

    fn draw_path_inputs(&mut self, ui: &mut egui::Ui) {
        let idle = self.state == UiState::Idle;

        egui::Grid::new("path_inputs")
            .num_columns(3)
            .spacing([8.0, 8.0])
            .show(ui, |ui| {
                ui.label("Source file:");
                ui.add_enabled(
                    idle,
                    egui::TextEdit::singleline(&mut self.source_input)
                        .desired_width(320.0)
                        .hint_text("Select a file to copy"),
                );
                if ui
                    .add_enabled(idle, egui::Button::new("Browse..."))
                    .clicked()
                {
                    self.browse_source();
                }
                ui.end_row();

                ui.label("Destination folder:");
                ui.add_enabled(
                    idle,
                    egui::TextEdit::singleline(&mut self.dest_input)
                        .desired_width(320.0)
                        .hint_text("Select a destination"),
                );
                if ui
                    .add_enabled(idle, egui::Button::new("Browse..."))
                    .clicked()
                {
                    self.browse_destination();
                }
                ui.end_row();
            });

        ui.add_space(4.0);
        ui.add_enabled(
            idle,
            egui::Checkbox::new(
                &mut self.remove_partial_on_error,
                "Remove partially copied file if the copy fails",
            ),
        );
    }

    fn draw_progress_section(&mut self, ui: &mut egui::Ui) {
        let openness = self.progress_reveal.value();
        if openness <= 0.0 {
            return;
        }

        ui.add_space(12.0 * openness);
        ui.scope(|ui| {
            ui.set_opacity(openness);

            if !self.copying_name.is_empty() {
                ui.label(
                    egui::RichText::new(format!(
                        "{} {}",
                        egui_phosphor::regular::FILE,
                        self.copying_name
                    ))
                    .color(self.theme.colors.text_weak),
                );
            }

            ui.add(egui::ProgressBar::new(self.fraction).show_percentage());
            ui.add_space(4.0);

            let time_remaining = self
                .eta_seconds
                .map(format_duration)
                .unwrap_or_else(|| "--".to_string());
            ui.label(format!("Time remaining: {}", time_remaining));

            let remaining = self.total_bytes.saturating_sub(self.bytes_copied);
            ui.label(format!(
                "Size remaining: {} of {}",
                format_size(remaining),
                format_size(self.total_bytes)
            ));

            ui.label(format!("Speed: {}", format_speed(self.speed_bps)));
        });
    }

    fn draw_modal(&mut self, ctx: &egui::Context) {
        let Some(modal) = self.modal.clone() else {
            return;
        };

        let (title, text, color) = match &modal {
            Modal::MissingInput => (
                "Error",
                "Please select both source and destination.".to_string(),
                self.theme.colors.error,
            ),
            Modal::Success(destination) => (
                "Success",
                format!("File copied successfully to {}", destination.display()),
                self.theme.colors.success,
            ),
            Modal::Failure(message) => (
                "Error",
                format!("An error occurred: {}", message),
                self.theme.colors.error,
            ),
        };

        let mut close = false;
        egui::Window::new(title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.add_space(4.0);
                ui.colored_label(color, &text);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        close = true;
                    }
                });
            });

        if close {
            self.modal = None;
        }
    }

    fn draw_status_bar(&mut self, ctx: &egui::Context, enabled: bool) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_enabled_ui(enabled, |ui| {
                    ui.horizontal(|ui| {
                        ui.checkbox(&mut self.show_log_panel, "Show logs");

                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            let theme_icon = if self.theme.is_dark_mode() {
                                egui_phosphor::regular::MOON
                            } else {
                                egui_phosphor::regular::SUN
                            };
                            if ui.button(theme_icon).on_hover_text("Toggle theme").clicked() {
                                self.theme.toggle();
                            }

                            ui.separator();

                            if self.state == UiState::Copying {
                                ui.spinner();
                                ui.label("Copying...");
                            } else {
                                ui.weak("Ready");
                            }
                        });
                    });
                });
            });
    }

    fn draw_log_panel(&mut self, ctx: &egui::Context, enabled: bool) {
        if !self.show_log_panel {
            return;
        }

        egui::TopBottomPanel::bottom("log_panel")
            .resizable(true)
            .default_height(140.0)
            .min_height(80.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Logs");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add_enabled(enabled, egui::Button::new("Clear")).clicked() {
                            self.logs.clear();
                        }
                    });
                });
                ui.separator();

                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for (level, line) in &self.logs {
                            let color = match *level {
                                Level::ERROR => self.theme.colors.error,
                                Level::WARN => egui::Color32::from_rgb(250, 190, 80),
                                Level::DEBUG | Level::TRACE => self.theme.colors.text_weak,
                                Level::INFO => ui.style().visuals.text_color(),
                            };
                            ui.colored_label(color, egui::RichText::new(line).monospace());
                        }
                    });
            });
    }
}

impl eframe::App for FerryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.theme.apply(ctx);

        let title = match self.state {
            UiState::Copying => "Ferry - Copying...",
            UiState::Idle => "Ferry - File Copy",
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));

        // Dropped files fill the path fields: a file sets the source, a
        // directory sets the destination. Ignored while a copy runs.
        if self.state == UiState::Idle && self.modal.is_none() {
            ctx.input(|i| {
                for dropped in &i.raw.dropped_files {
                    if let Some(path) = &dropped.path {
                        if path.is_dir() {
                            self.dest_input = path.display().to_string();
                        } else {
                            self.source_input = path.display().to_string();
                        }
                    }
                }
            });
        }

        self.process_messages();

        // A blocking modal disables the panels along with the window body
        let panels_enabled = self.modal.is_none();
        self.draw_status_bar(ctx, panels_enabled);
        self.draw_log_panel(ctx, panels_enabled);

        egui::CentralPanel::default().show(ctx, |ui| {
            // A blocking modal disables the rest of the window
            ui.add_enabled_ui(self.modal.is_none(), |ui| {
                ui.add_space(12.0);
                ui.heading("File Copy Utility");
                ui.add_space(12.0);

                self.draw_path_inputs(ui);

                ui.add_space(12.0);
                let copy_enabled = self.state == UiState::Idle;
                if ui
                    .add_enabled(
                        copy_enabled,
                        egui::Button::new(format!(
                            "{} Copy File",
                            egui_phosphor::regular::COPY
                        ))
                        .min_size(egui::vec2(120.0, 32.0)),
                    )
                    .clicked()
                {
                    self.start_copy();
                }

                self.draw_progress_section(ui);
            });
        });

        self.draw_modal(ctx);
        self.toasts.show(ctx);

        // Keep painting while a copy runs or the reveal animates, so
        // progress renders without input events
        if self.state == UiState::Copying || self.progress_reveal.is_animating() {
            ctx.request_repaint();
        }
    }
}
