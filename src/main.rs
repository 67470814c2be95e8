mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use app::LaunchDashApp;
use eframe::egui;
use state::AppState;

const DEFAULT_DATASET: &str = "spacex_launch_dash.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Dataset path from the first argument, or the conventional export name.
    let path: PathBuf = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET));

    // The dataset is loaded exactly once; a load failure is fatal.
    let dataset = data::loader::load_file(&path)
        .with_context(|| format!("loading launch records from {}", path.display()))?;
    log::info!(
        "Loaded {} launch records across {} sites (payload {}–{} kg)",
        dataset.len(),
        dataset.sites.len(),
        dataset.payload_min,
        dataset.payload_max
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launch Records Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(LaunchDashApp::new(AppState::new(dataset))))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
