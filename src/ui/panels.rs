use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::report::format::format_unsigned_with_commas;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – controls
// ---------------------------------------------------------------------------

/// Render the left controls panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    // ---- Minimum purchases ----
    ui.strong("Minimum purchases (reduce noise)");
    let control = state.control;
    let mut min_purchases = state.min_purchases;
    let slider = Slider::new(&mut min_purchases, 0..=control.max)
        .step_by(control.step as f64)
        .custom_formatter(|v, _| format_unsigned_with_commas(v as u64))
        .custom_parser(|s| s.replace(',', "").trim().parse::<f64>().ok());
    if ui.add(slider).changed() {
        state.set_min_purchases(min_purchases);
    }
    ui.add_space(8.0);

    // ---- Baseline aisle ----
    ui.strong("Baseline aisle (for X× comparison)");
    let Some(view) = &state.view else {
        return;
    };
    if view.selector.options.is_empty() {
        ui.label(RichText::new("No aisles to compare.").italics());
        return;
    }

    let options = view.selector.options.clone();
    let current = state.baseline.clone().unwrap_or_default();
    let mut picked: Option<String> = None;
    egui::ComboBox::from_id_salt("baseline_aisle")
        .selected_text(&current)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for (rank, aisle) in options.iter().enumerate() {
                let label = format!("{}. {aisle}", rank + 1);
                if ui.selectable_label(current == *aisle, label).clicked() {
                    picked = Some(aisle.clone());
                }
            }
        });
    if !view.selector.contains(&current) {
        ui.label(RichText::new("Not in the current view; comparison hidden.").weak());
    }
    if let Some(aisle) = picked {
        state.set_baseline(aisle);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let (Some(ds), Some(view)) = (&state.dataset, &state.view) {
            if ds.is_empty() {
                ui.label("No usable rows in this file");
            } else {
                ui.label(format!(
                    "{} aisles loaded, {} shown",
                    ds.len(),
                    view.ranked.len()
                ));
            }
        }
        if let Some(source) = &state.source {
            ui.separator();
            ui.label(RichText::new(source.display().to_string()).weak());
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Replace the dataset with a user-picked file. A failed load keeps the
/// current dataset and reports the error in the top bar.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open aisle metrics")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} aisles from {} ({} rows read)",
                    dataset.len(),
                    path.display(),
                    dataset.rows_read
                );
                state.set_dataset(Arc::new(dataset), path);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
