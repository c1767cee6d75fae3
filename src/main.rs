mod app;
mod state;
mod ui;

use std::path::PathBuf;

use app::SampleLensApp;
use eframe::egui;
use state::AppState;

fn main() -> eframe::Result {
    env_logger::init();

    // Optional bunch file to open on startup.
    let mut state = AppState::default();
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        state.load_path(&path);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Sample Lens – Class Viewer",
        options,
        Box::new(|cc| {
            // The first class is always drawn black.
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(SampleLensApp::with_state(state)))
        }),
    )
}
