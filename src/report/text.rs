use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::error::ArrowError;
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::data::loader::{AISLE, REORDER_PROBABILITY, TOTAL_PURCHASES, TOTAL_REORDERS};
use crate::data::model::AisleMetric;

use super::format::format_unsigned_with_commas;
use super::{
    ReportView, ACTIONS, ACTIONS_HEADING, CAPTION, EDGE_ROWS, EXPLANATION, EXPLANATION_HEADING,
    INSIGHT_HEADING, TABLE_HEADING, TITLE_HEADING,
};

// ---------------------------------------------------------------------------
// Plain-text rendering (headless `--print` mode)
// ---------------------------------------------------------------------------

/// Render the whole report as text, tables drawn by Arrow's pretty printer.
pub fn render_text(view: &ReportView) -> Result<String, ArrowError> {
    let mut lines = vec![
        TITLE_HEADING.to_string(),
        CAPTION.to_string(),
        String::new(),
        format!("Minimum purchases: {}", format_unsigned_with_commas(view.threshold)),
        String::new(),
        format!("== {INSIGHT_HEADING} =="),
        view.headline(),
    ];
    lines.extend(view.comparison_sentence());

    lines.push(String::new());
    lines.push(EXPLANATION_HEADING.to_string());
    lines.extend(EXPLANATION.iter().map(|l| format!("- {l}")));

    lines.push(String::new());
    lines.push(format!("== {ACTIONS_HEADING} =="));
    lines.extend(ACTIONS.iter().map(|l| format!("- {l}")));

    for (heading, rows) in [
        (TABLE_HEADING.to_string(), view.ranked.as_slice()),
        (format!("Top {EDGE_ROWS} aisles"), view.head()),
        (format!("Bottom {EDGE_ROWS} aisles"), view.tail()),
    ] {
        lines.push(String::new());
        lines.push(format!("== {heading} =="));
        lines.push(table(rows)?);
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

/// One record batch holding the displayed columns, in display order.
pub fn to_record_batch(rows: &[AisleMetric]) -> Result<RecordBatch, ArrowError> {
    let schema = Arc::new(Schema::new(vec![
        Field::new(AISLE, DataType::Utf8, false),
        Field::new(REORDER_PROBABILITY, DataType::Float64, false),
        Field::new(TOTAL_PURCHASES, DataType::Float64, false),
        Field::new(TOTAL_REORDERS, DataType::Float64, true),
    ]));

    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.aisle.as_str()))),
        Arc::new(Float64Array::from_iter_values(
            rows.iter().map(|r| r.reorder_probability),
        )),
        Arc::new(Float64Array::from_iter_values(
            rows.iter().map(|r| r.total_purchases),
        )),
        Arc::new(Float64Array::from_iter(rows.iter().map(|r| r.total_reorders))),
    ];
    RecordBatch::try_new(schema, columns)
}

fn table(rows: &[AisleMetric]) -> Result<String, ArrowError> {
    let batch = to_record_batch(rows)?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}
