use codehop::gui::LauncherApp;
use codehop::logging;
use codehop::settings::{Settings, SETTINGS_FILE};

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let settings = Settings::load(SETTINGS_FILE)?;
    logging::init(settings.debug_logging);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([560.0, 360.0])
            .with_min_inner_size([400.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        "codehop",
        native_options,
        Box::new(move |_cc| Box::new(LauncherApp::new(settings, SETTINGS_FILE.to_string()))),
    )
    .map_err(|e| anyhow::anyhow!("could not start UI: {e}"))
}
