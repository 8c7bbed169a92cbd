use super::model::AisleMetric;

/// 0-based rank preselected in the baseline selector when enough aisles remain.
pub const DEFAULT_BASELINE_RANK: usize = 9;

// ---------------------------------------------------------------------------
// Baseline selector
// ---------------------------------------------------------------------------

/// Candidate baselines, taken from the current ranked view in rank order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BaselineSelector {
    pub options: Vec<String>,
}

impl BaselineSelector {
    pub fn from_ranked(ranked: &[AisleMetric]) -> Self {
        BaselineSelector {
            options: ranked.iter().map(|r| r.aisle.clone()).collect(),
        }
    }

    /// The 10th-ranked aisle if at least 10 remain, otherwise the last one.
    pub fn default_index(&self) -> Option<usize> {
        let last = self.options.len().checked_sub(1)?;
        Some(DEFAULT_BASELINE_RANK.min(last))
    }

    pub fn default_option(&self) -> Option<&str> {
        self.default_index().map(|i| self.options[i].as_str())
    }

    pub fn contains(&self, aisle: &str) -> bool {
        self.options.iter().any(|o| o == aisle)
    }
}

// ---------------------------------------------------------------------------
// Comparison against the baseline
// ---------------------------------------------------------------------------

/// Top aisle expressed as a multiple of the baseline's reorder probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub baseline: String,
    pub baseline_rp: f64,
    pub multiple: f64,
}

/// Look up `baseline` in the ranked view and compare the top record with it.
///
/// Returns `None` when the view is empty, the baseline is absent from the
/// view, its probability is zero, or the ratio is zero or not finite.
pub fn compare(ranked: &[AisleMetric], baseline: &str) -> Option<Comparison> {
    let top = ranked.first()?;
    let baseline_rp = ranked
        .iter()
        .find(|r| r.aisle == baseline)?
        .reorder_probability;
    if baseline_rp == 0.0 {
        return None;
    }

    let multiple = top.reorder_probability / baseline_rp;
    if !multiple.is_finite() || multiple == 0.0 {
        return None;
    }
    Some(Comparison {
        baseline: baseline.to_string(),
        baseline_rp,
        multiple,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(aisle: &str, rp: f64) -> AisleMetric {
        AisleMetric {
            aisle: aisle.to_string(),
            reorder_probability: rp,
            total_purchases: 1.0,
            total_reorders: None,
        }
    }

    fn ranked(n: usize) -> Vec<AisleMetric> {
        (0..n)
            .map(|i| metric(&format!("aisle {i}"), 1.0 - i as f64 / 100.0))
            .collect()
    }

    #[test]
    fn default_is_tenth_or_last() {
        assert_eq!(BaselineSelector::from_ranked(&ranked(25)).default_index(), Some(9));
        assert_eq!(BaselineSelector::from_ranked(&ranked(10)).default_index(), Some(9));
        assert_eq!(BaselineSelector::from_ranked(&ranked(4)).default_index(), Some(3));
        assert_eq!(
            BaselineSelector::from_ranked(&ranked(1)).default_option(),
            Some("aisle 0")
        );
        assert_eq!(BaselineSelector::from_ranked(&[]).default_index(), None);
    }

    #[test]
    fn multiple_is_top_over_baseline() {
        let view = vec![metric("Produce", 0.85), metric("Dry goods", 0.425)];
        let cmp = compare(&view, "Dry goods").unwrap();
        assert_eq!(cmp.baseline_rp, 0.425);
        assert_eq!(format!("{:.1}", cmp.multiple), "2.0");
    }

    #[test]
    fn baseline_equal_to_top_is_one() {
        let view = vec![metric("Produce", 0.85)];
        assert_eq!(compare(&view, "Produce").unwrap().multiple, 1.0);
    }

    #[test]
    fn absent_or_zero_baseline_omits_comparison() {
        let view = vec![metric("Produce", 0.85), metric("Bulk", 0.0)];
        assert_eq!(compare(&view, "Snacks"), None);
        assert_eq!(compare(&view, "Bulk"), None);
        assert_eq!(compare(&[], "Produce"), None);
    }

    #[test]
    fn zero_top_probability_omits_comparison() {
        let view = vec![metric("A", 0.0), metric("B", 0.0)];
        assert_eq!(compare(&view, "B"), None);
    }

    #[test]
    fn duplicate_aisle_uses_first_match() {
        let view = vec![metric("Top", 0.9), metric("Dup", 0.45), metric("Dup", 0.3)];
        assert_eq!(compare(&view, "Dup").unwrap().baseline_rp, 0.45);
    }
}
