use eframe::egui::{self, Align, Color32, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::probability_color;
use crate::data::loader::{AISLE, REORDER_PROBABILITY, TOTAL_PURCHASES, TOTAL_REORDERS};
use crate::data::model::AisleMetric;
use crate::report::format::{
    format_count, format_optional_count, format_probability, format_probability_cell,
};
use crate::report::{
    ReportView, ACTIONS, ACTIONS_HEADING, CAPTION, EDGE_ROWS, EXPLANATION, EXPLANATION_HEADING,
    INSIGHT_HEADING, NO_DATA, TABLE_HEADING, TITLE_HEADING,
};
use crate::state::AppState;

const ROW_HEIGHT: f32 = 20.0;
const FULL_TABLE_HEIGHT: f32 = 320.0;
const SUCCESS_FILL: Color32 = Color32::from_rgb(0x1f, 0x4e, 0x35);

// ---------------------------------------------------------------------------
// Report (central panel)
// ---------------------------------------------------------------------------

/// Render the report for the current view in the central panel.
pub fn report_panel(ui: &mut Ui, state: &AppState) {
    let Some(view) = &state.view else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a metrics file to begin  (File → Open…)");
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading(RichText::new(TITLE_HEADING).strong());
            ui.label(RichText::new(CAPTION).weak());
            ui.add_space(12.0);

            insight(ui, view);
            ui.add_space(12.0);
            guidance(ui);
            ui.add_space(12.0);

            ui.heading(TABLE_HEADING);
            ui.push_id("full_table", |ui: &mut Ui| {
                metrics_table(ui, &view.ranked, true);
            });
            ui.add_space(12.0);

            ui.columns(2, |cols| {
                cols[0].heading(format!("Top {EDGE_ROWS} aisles"));
                cols[0].push_id("top_table", |ui: &mut Ui| {
                    metrics_table(ui, view.head(), false);
                });
                cols[1].heading(format!("Bottom {EDGE_ROWS} aisles"));
                cols[1].push_id("bottom_table", |ui: &mut Ui| {
                    metrics_table(ui, view.tail(), false);
                });
            });
        });
}

/// Headline and optional comparison.
fn insight(ui: &mut Ui, view: &ReportView) {
    ui.heading(INSIGHT_HEADING);

    let Some(top) = view.top() else {
        ui.label(RichText::new(NO_DATA).italics());
        return;
    };

    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.label("Top retention aisle:");
        ui.label(RichText::new(&top.aisle).strong());
        ui.label("  |  Reorder probability:");
        ui.label(RichText::new(format_probability(top.reorder_probability)).strong());
        ui.label("  |  Purchases:");
        ui.label(RichText::new(format_count(top.total_purchases)).strong());
    });

    if let Some(sentence) = view.comparison_sentence() {
        ui.add_space(6.0);
        egui::Frame::group(ui.style())
            .fill(SUCCESS_FILL)
            .show(ui, |ui: &mut Ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(sentence).color(Color32::WHITE));
            });
    }
}

/// Static explanation and recommendations.
fn guidance(ui: &mut Ui) {
    ui.strong(EXPLANATION_HEADING);
    for line in EXPLANATION {
        ui.label(format!("• {line}"));
    }
    ui.add_space(12.0);

    ui.heading(ACTIONS_HEADING);
    for line in ACTIONS {
        ui.label(format!("• {line}"));
    }
}

/// One table of ranked records. The full table scrolls on its own; the
/// top / bottom tables are short enough to show in full.
fn metrics_table(ui: &mut Ui, rows: &[AisleMetric], scroll: bool) {
    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(160.0))
        .columns(Column::auto().at_least(110.0), 3);
    table = if scroll {
        table.min_scrolled_height(0.0).max_scroll_height(FULL_TABLE_HEIGHT)
    } else {
        table.vscroll(false)
    };

    table
        .header(ROW_HEIGHT, |mut header| {
            for title in [AISLE, REORDER_PROBABILITY, TOTAL_PURCHASES, TOTAL_REORDERS] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let r = &rows[row.index()];
                row.col(|ui| {
                    ui.label(&r.aisle);
                });
                row.col(|ui| {
                    ui.label(
                        RichText::new(format_probability_cell(r.reorder_probability))
                            .color(probability_color(r.reorder_probability)),
                    );
                });
                row.col(|ui| {
                    ui.label(format_count(r.total_purchases));
                });
                row.col(|ui| {
                    ui.label(format_optional_count(r.total_reorders));
                });
            });
        });
}
