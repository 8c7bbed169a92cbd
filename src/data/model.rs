// ---------------------------------------------------------------------------
// AisleMetric – one row of the metrics table
// ---------------------------------------------------------------------------

/// Precomputed retention metrics for a single aisle.
///
/// Counts are kept as `f64` because they pass through the same numeric
/// coercion as the probability column.
#[derive(Debug, Clone, PartialEq)]
pub struct AisleMetric {
    /// Category label, used as the lookup key (not guaranteed unique).
    pub aisle: String,
    pub reorder_probability: f64,
    pub total_purchases: f64,
    /// May be missing in individual rows; never used for filtering.
    pub total_reorders: Option<f64>,
}

// ---------------------------------------------------------------------------
// AisleDataset – the complete cleaned dataset
// ---------------------------------------------------------------------------

/// The full cleaned record set. Read-only once built; shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct AisleDataset {
    /// Retained records in source order.
    pub records: Vec<AisleMetric>,
    /// Number of data rows read from the source before cleaning.
    pub rows_read: usize,
}

impl AisleDataset {
    pub fn new(records: Vec<AisleMetric>, rows_read: usize) -> Self {
        AisleDataset { records, rows_read }
    }

    /// Rows discarded because a required numeric field was missing.
    pub fn rows_dropped(&self) -> usize {
        self.rows_read.saturating_sub(self.records.len())
    }

    /// Largest `total_purchases`, truncated to an integer. Upper bound of the
    /// minimum-purchases control.
    pub fn max_purchases(&self) -> u64 {
        self.records
            .iter()
            .map(|r| r.total_purchases)
            .fold(0.0_f64, f64::max)
            .trunc() as u64
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
