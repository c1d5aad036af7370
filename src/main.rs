mod app;
mod color;
mod data;
mod forecast;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::ForecastApp;
use eframe::egui;
use state::AppState;

/// Workbook loaded at startup, relative to the working directory.
/// `cargo run --bin generate_sample` writes one.
const DEFAULT_WORKBOOK: &str = "projections.xlsx";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The startup load is fatal: without the source workbook there is
    // nothing to show.  Loads via File → Open… only surface in the UI.
    let sheet = data::loader::load_file(Path::new(DEFAULT_WORKBOOK))
        .with_context(|| format!("loading {DEFAULT_WORKBOOK}"))?;

    let mut state = AppState::default();
    state.set_sheet(sheet);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rusty Forecast – Income Statement Projections",
        options,
        Box::new(move |_cc| Ok(Box::new(ForecastApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe: {e}"))?;

    Ok(())
}
