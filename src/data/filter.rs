use std::cmp::Ordering;

use super::model::{AisleDataset, AisleMetric};

/// Starting value of the minimum-purchases control.
pub const DEFAULT_MIN_PURCHASES: u64 = 100_000;

/// Slider increment of the minimum-purchases control.
pub const MIN_PURCHASES_STEP: u64 = 50_000;

// ---------------------------------------------------------------------------
// Threshold control: bounds derived from the data
// ---------------------------------------------------------------------------

/// Bounds, step and default of the minimum-purchases control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdControl {
    pub max: u64,
    pub step: u64,
    pub default: u64,
}

impl ThresholdControl {
    /// Derive the control from the observed data. The default never exceeds
    /// the largest purchase count.
    pub fn for_dataset(dataset: &AisleDataset) -> Self {
        let max = dataset.max_purchases();
        ThresholdControl {
            max,
            step: MIN_PURCHASES_STEP,
            default: DEFAULT_MIN_PURCHASES.min(max),
        }
    }

    /// Clamp a requested threshold into `[0, max]`.
    pub fn clamp(&self, threshold: u64) -> u64 {
        threshold.min(self.max)
    }
}

impl Default for ThresholdControl {
    fn default() -> Self {
        ThresholdControl::for_dataset(&AisleDataset::default())
    }
}

// ---------------------------------------------------------------------------
// Filter & rank
// ---------------------------------------------------------------------------

/// Return indices of records with `total_purchases >= threshold`, ordered by
/// `reorder_probability` descending. Ties keep their source order.
pub fn ranked_indices(dataset: &AisleDataset, threshold: u64) -> Vec<usize> {
    let min = threshold as f64;
    let mut indices: Vec<usize> = dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, r)| r.total_purchases >= min)
        .map(|(i, _)| i)
        .collect();

    // `sort_by` is stable. NaN never survives loading, and -0.0 must tie with 0.0.
    indices.sort_by(|&a, &b| {
        let (a, b) = (&dataset.records[a], &dataset.records[b]);
        b.reorder_probability
            .partial_cmp(&a.reorder_probability)
            .unwrap_or(Ordering::Equal)
    });
    indices
}

/// The filtered, ranked view as owned records. The base dataset is untouched.
pub fn filter_and_rank(dataset: &AisleDataset, threshold: u64) -> Vec<AisleMetric> {
    ranked_indices(dataset, threshold)
        .into_iter()
        .map(|i| dataset.records[i].clone())
        .collect()
}
