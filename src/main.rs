mod app;
mod cli;
mod color;
mod data;
mod report;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::{Context, Result};
use app::RetentionApp;
use clap::Parser;
use cli::Args;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // The dataset is read once and shared read-only for the process lifetime.
    let dataset = data::loader::load_file(&args.input)
        .with_context(|| format!("loading aisle metrics from {}", args.input.display()))?;
    log::info!(
        "Loaded {} aisles from {} ({} rows read)",
        dataset.len(),
        args.input.display(),
        dataset.rows_read
    );

    let state = AppState::new(
        Arc::new(dataset),
        args.input.clone(),
        args.min_purchases,
        args.baseline.clone(),
    );

    if args.print {
        let view = state.view.as_ref().context("no view computed")?;
        let text = report::text::render_text(view).context("rendering report")?;
        print!("{text}");
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        report::TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(RetentionApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
