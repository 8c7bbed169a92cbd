use std::path::PathBuf;
use std::sync::Arc;

use crate::data::compare::BaselineSelector;
use crate::data::filter::{filter_and_rank, ThresholdControl};
use crate::data::model::AisleDataset;
use crate::report::{render_ranked, ReportView};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset, shared read-only with every render call.
    pub dataset: Option<Arc<AisleDataset>>,

    /// File the dataset was read from.
    pub source: Option<PathBuf>,

    /// Bounds of the minimum-purchases slider for the current dataset.
    pub control: ThresholdControl,

    /// Current minimum-purchases threshold.
    pub min_purchases: u64,

    /// Current baseline selection.
    pub baseline: Option<String>,

    /// View for the current controls (cached until a control changes).
    pub view: Option<ReportView>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// State for a freshly loaded dataset with optional initial controls.
    /// The threshold is clamped; a missing baseline falls back to the default.
    pub fn new(
        dataset: Arc<AisleDataset>,
        source: PathBuf,
        min_purchases: Option<u64>,
        baseline: Option<String>,
    ) -> Self {
        let mut state = AppState::default();
        state.set_dataset(dataset, source);
        if let Some(value) = min_purchases {
            state.min_purchases = state.control.clamp(value);
        }
        state.baseline = baseline;
        state.view = None;
        state.refresh();
        state
    }

    /// Ingest a newly loaded dataset and reset the controls to their defaults.
    pub fn set_dataset(&mut self, dataset: Arc<AisleDataset>, source: PathBuf) {
        self.control = ThresholdControl::for_dataset(&dataset);
        self.min_purchases = self.control.default;
        self.baseline = None;
        self.view = None;
        self.dataset = Some(dataset);
        self.source = Some(source);
        self.status_message = None;
        self.refresh();
    }

    /// Move the threshold (clamped) and recompute the view.
    pub fn set_min_purchases(&mut self, value: u64) {
        let value = self.control.clamp(value);
        if value == self.min_purchases && self.view.is_some() {
            return;
        }
        self.min_purchases = value;
        self.refresh();
    }

    /// Select a baseline aisle and recompute the view.
    pub fn set_baseline(&mut self, aisle: String) {
        if self.baseline.as_deref() == Some(aisle.as_str()) {
            return;
        }
        self.baseline = Some(aisle);
        self.refresh();
    }

    /// Recompute `view` from the current controls.
    ///
    /// When the baseline candidates differ from the previous view's, the
    /// selection falls back to the new default; otherwise it is kept.
    pub fn refresh(&mut self) {
        let Some(dataset) = self.dataset.clone() else {
            return;
        };
        let previous = self.view.take().map(|v| v.selector);

        let ranked = filter_and_rank(&dataset, self.min_purchases);
        let options_changed =
            previous.is_some_and(|prev| prev != BaselineSelector::from_ranked(&ranked));
        let baseline = if options_changed {
            None
        } else {
            self.baseline.clone()
        };

        let view = render_ranked(ranked, self.min_purchases, baseline.as_deref());
        self.baseline = view.baseline.clone();
        self.view = Some(view);
    }
}
