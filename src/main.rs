mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::AdVizApp;
use eframe::egui;
use state::AppState;

/// Dataset loaded at startup when present in the working directory.
const DEFAULT_DATASET: &str = "Advertising.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let mut state = AppState::default();
    let default_path = Path::new(DEFAULT_DATASET);
    if default_path.exists() {
        match data::loader::load_file(default_path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} observations from {DEFAULT_DATASET}",
                    dataset.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::warn!("Could not load {DEFAULT_DATASET}: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "AdViz – Advertising Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(AdVizApp::new(state)))),
    )
}
