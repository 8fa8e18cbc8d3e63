mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use eframe::egui;

use app::DashApp;
use data::store::DatasetStore;
use state::AppState;

/// The eight pre-aggregated exports live at a fixed relative path.
const DATA_DIR: &str = "data";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Startup is all-or-nothing: a missing or malformed dataset means the
    // dashboard does not come up.
    let store = DatasetStore::load(Path::new(DATA_DIR))
        .context("loading call-center datasets")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 850.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "211 inContact KPI Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(DashApp::new(AppState::new(store))))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard window: {e}"))
}
