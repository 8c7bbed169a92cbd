/// Report view model: everything the window or the text printer shows for one
/// combination of controls.
///
/// ```text
///   Arc<AisleDataset> ──┐
///   min purchases ──────┼──▶ render() ──▶ ReportView ──▶ ui::report / text
///   baseline aisle ─────┘
/// ```
pub mod format;
pub mod text;

use crate::data::compare::{compare, BaselineSelector, Comparison};
use crate::data::filter::filter_and_rank;
use crate::data::model::{AisleDataset, AisleMetric};

use format::{format_count, format_probability};

pub const TITLE: &str = "Retention Driver Finder";
pub const TITLE_HEADING: &str = "🧠 Retention Driver Finder";
pub const INSIGHT_HEADING: &str = "🔥 Executive Insight";
pub const TABLE_HEADING: &str = "📊 Aisle performance table";
pub const CAPTION: &str = "Stakeholder-ready insight from reorder behavior by aisle.";

/// Rows shown in each of the top / bottom tables.
pub const EDGE_ROWS: usize = 10;

pub const NO_DATA: &str = "No aisles meet the minimum-purchase threshold.";

pub const EXPLANATION_HEADING: &str = "What this means (plain English):";
pub const EXPLANATION: [&str; 2] = [
    "High-retention aisles are replenishment categories (customers come back for them).",
    "These aisles drive repeat shopping behavior and should be protected from stockouts.",
];

pub const ACTIONS_HEADING: &str = "✅ Suggested actions";
pub const ACTIONS: [&str; 3] = [
    "Protect inventory in top retention aisles (avoid stockouts).",
    "Bundle low-retention items with high-retention staples.",
    "Use promos on mid-retention aisles to lift repeat buying.",
];

// ---------------------------------------------------------------------------
// ReportView
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    /// Threshold the view was computed with.
    pub threshold: u64,
    /// Filtered records, best reorder probability first.
    pub ranked: Vec<AisleMetric>,
    /// Baseline candidates for the current view.
    pub selector: BaselineSelector,
    /// Requested baseline, or the selector default when none was given.
    pub baseline: Option<String>,
    pub comparison: Option<Comparison>,
}

/// Compute the full view for one interaction. Pure: the dataset is only read.
///
/// `baseline = None` selects the selector default. A baseline that is not in
/// the filtered view is kept as requested but yields no comparison.
pub fn render(dataset: &AisleDataset, threshold: u64, baseline: Option<&str>) -> ReportView {
    render_ranked(filter_and_rank(dataset, threshold), threshold, baseline)
}

/// [`render`] for a view that was already filtered and ranked at `threshold`.
pub fn render_ranked(
    ranked: Vec<AisleMetric>,
    threshold: u64,
    baseline: Option<&str>,
) -> ReportView {
    let selector = BaselineSelector::from_ranked(&ranked);
    let baseline = baseline
        .or_else(|| selector.default_option())
        .map(str::to_string);
    let comparison = baseline.as_deref().and_then(|b| compare(&ranked, b));

    log::debug!(
        "rendered view: threshold={threshold} rows={} baseline={baseline:?} comparison={}",
        ranked.len(),
        comparison.is_some()
    );

    ReportView {
        threshold,
        ranked,
        selector,
        baseline,
        comparison,
    }
}

impl ReportView {
    /// Highest reorder probability in the view.
    pub fn top(&self) -> Option<&AisleMetric> {
        self.ranked.first()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// Headline sentence, or the explicit empty state.
    pub fn headline(&self) -> String {
        match self.top() {
            Some(top) => format!(
                "Top retention aisle: {}  |  Reorder probability: {}  |  Purchases: {}",
                top.aisle,
                format_probability(top.reorder_probability),
                format_count(top.total_purchases)
            ),
            None => NO_DATA.to_string(),
        }
    }

    /// Comparison sentence when a multiple could be computed.
    pub fn comparison_sentence(&self) -> Option<String> {
        let top = self.top()?;
        let cmp = self.comparison.as_ref()?;
        Some(format!(
            "Compared to {} (rp={}), {} is about {:.1}× higher, a strong retention driver.",
            cmp.baseline,
            format_probability(cmp.baseline_rp),
            top.aisle,
            cmp.multiple
        ))
    }

    /// First [`EDGE_ROWS`] ranked records.
    pub fn head(&self) -> &[AisleMetric] {
        &self.ranked[..self.ranked.len().min(EDGE_ROWS)]
    }

    /// Last [`EDGE_ROWS`] ranked records, still in rank order.
    pub fn tail(&self) -> &[AisleMetric] {
        &self.ranked[self.ranked.len().saturating_sub(EDGE_ROWS)..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(aisle: &str, rp: f64, purchases: f64, reorders: f64) -> AisleMetric {
        AisleMetric {
            aisle: aisle.to_string(),
            reorder_probability: rp,
            total_purchases: purchases,
            total_reorders: Some(reorders),
        }
    }

    fn produce_and_snacks() -> AisleDataset {
        AisleDataset::new(
            vec![
                metric("Produce", 0.85, 500_000.0, 425_000.0),
                metric("Snacks", 0.40, 200_000.0, 80_000.0),
            ],
            2,
        )
    }

    fn many(n: usize) -> AisleDataset {
        let records = (0..n)
            .map(|i| {
                metric(
                    &format!("aisle {i:02}"),
                    0.9 - i as f64 * 0.02,
                    100_000.0 + i as f64 * 10_000.0,
                    0.0,
                )
            })
            .collect();
        AisleDataset::new(records, n)
    }

    #[test]
    fn threshold_zero_keeps_both() {
        let view = render(&produce_and_snacks(), 0, None);
        let aisles: Vec<&str> = view.ranked.iter().map(|r| r.aisle.as_str()).collect();
        assert_eq!(aisles, ["Produce", "Snacks"]);
        assert_eq!(view.top().unwrap().aisle, "Produce");
        // Fewer than ten options: default is the last one.
        assert_eq!(view.baseline.as_deref(), Some("Snacks"));
        assert_eq!(
            view.headline(),
            "Top retention aisle: Produce  |  Reorder probability: 0.85  |  Purchases: 500,000"
        );
        assert_eq!(
            view.comparison_sentence().unwrap(),
            "Compared to Snacks (rp=0.40), Produce is about 2.1× higher, a strong retention driver."
        );
    }

    #[test]
    fn single_survivor_compares_with_itself() {
        let view = render(&produce_and_snacks(), 300_000, None);
        assert_eq!(view.ranked.len(), 1);
        assert_eq!(view.selector.options, ["Produce"]);
        assert_eq!(view.baseline.as_deref(), Some("Produce"));
        assert!(view.comparison_sentence().unwrap().contains("1.0×"));
    }

    #[test]
    fn filtered_out_baseline_omits_comparison() {
        let view = render(&produce_and_snacks(), 300_000, Some("Snacks"));
        assert_eq!(view.baseline.as_deref(), Some("Snacks"));
        assert!(!view.selector.contains("Snacks"));
        assert_eq!(view.comparison, None);
        assert_eq!(view.comparison_sentence(), None);
        assert!(view.headline().contains("Produce"));
    }

    #[test]
    fn multiple_rounds_to_one_decimal() {
        let ds = AisleDataset::new(
            vec![
                metric("Produce", 0.85, 500_000.0, 425_000.0),
                metric("Pantry", 0.425, 200_000.0, 85_000.0),
            ],
            2,
        );
        let view = render(&ds, 0, Some("Pantry"));
        assert!(view.comparison_sentence().unwrap().contains("about 2.0× higher"));
    }

    #[test]
    fn empty_view_renders_no_data_state() {
        let view = render(&produce_and_snacks(), 600_000, Some("Produce"));
        assert!(view.is_empty());
        assert_eq!(view.top(), None);
        assert_eq!(view.headline(), NO_DATA);
        assert_eq!(view.comparison_sentence(), None);
        assert!(view.selector.options.is_empty());
        assert!(view.head().is_empty());
        assert!(view.tail().is_empty());
    }

    #[test]
    fn empty_view_without_baseline_selects_nothing() {
        let view = render(&produce_and_snacks(), 600_000, None);
        assert_eq!(view.baseline, None);
    }

    #[test]
    fn head_and_tail_are_edges_of_ranked_view() {
        let view = render(&many(25), 0, None);
        assert_eq!(view.head().len(), EDGE_ROWS);
        assert_eq!(view.tail().len(), EDGE_ROWS);
        assert_eq!(view.head()[0].aisle, "aisle 00");
        assert_eq!(view.tail()[0].aisle, "aisle 15");
        assert_eq!(view.tail()[9].aisle, "aisle 24");
        assert_eq!(view.baseline.as_deref(), Some("aisle 09"));

        let short = render(&many(3), 0, None);
        assert_eq!(short.head(), short.tail());
    }

    #[test]
    fn threshold_change_moves_default_baseline() {
        let ds = many(25);
        // Purchases grow with index, so a higher threshold drops the leaders.
        let view = render(&ds, 200_000, None);
        assert_eq!(view.top().unwrap().aisle, "aisle 10");
        assert_eq!(view.baseline.as_deref(), Some("aisle 19"));
    }

    #[test]
    fn render_ranked_matches_render() {
        let ds = many(25);
        let ranked = filter_and_rank(&ds, 150_000);
        assert_eq!(
            render_ranked(ranked, 150_000, Some("aisle 12")),
            render(&ds, 150_000, Some("aisle 12"))
        );
    }

    #[test]
    fn section_headings_carry_icons() {
        assert!(TITLE_HEADING.starts_with('🧠') && TITLE_HEADING.ends_with(TITLE));
        assert!(INSIGHT_HEADING.starts_with('🔥'));
        assert!(ACTIONS_HEADING.starts_with('✅'));
        assert!(TABLE_HEADING.starts_with('📊'));
    }

    #[test]
    fn rendering_is_idempotent() {
        let ds = many(25);
        assert_eq!(
            render(&ds, 150_000, Some("aisle 12")),
            render(&ds, 150_000, Some("aisle 12"))
        );
    }
}
