//! Ferry GUI - copy a file to a folder with live progress

use tracing::info;

mod animation;
mod app;
mod logging;
mod theme;
mod worker;

use app::FerryApp;

fn main() -> Result<(), eframe::Error> {
    let (log_sender, log_receiver) = crossbeam_channel::unbounded();
    logging::init_tracing(Some(log_sender));

    info!("Starting Ferry");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 400.0])
            .with_min_inner_size([480.0, 320.0]),
        centered: true,
        follow_system_theme: false,
        default_theme: eframe::Theme::Dark,
        ..Default::default()
    };

    eframe::run_native(
        "Ferry - File Copy",
        options,
        Box::new(move |cc| Ok(Box::new(FerryApp::new(cc, log_receiver)))),
    )
}
