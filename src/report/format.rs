// ---------------------------------------------------------------------------
// Number formatting for headlines and table cells
// ---------------------------------------------------------------------------

/// Format an integer with thousands separators (e.g. 3_792_661 → "3,792,661").
pub fn format_with_commas(n: i64) -> String {
    let digits = format_unsigned_with_commas(n.unsigned_abs());
    if n < 0 {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Unsigned variant; covers thresholds up to `u64::MAX`.
pub fn format_unsigned_with_commas(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().enumerate() {
        if i > 0 && (s.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// A purchase or reorder count: fractional part truncated, then separated.
pub fn format_count(n: f64) -> String {
    format_with_commas(n.trunc() as i64)
}

/// Blank for a missing count.
pub fn format_optional_count(n: Option<f64>) -> String {
    n.map(format_count).unwrap_or_default()
}

/// Probability as shown in the narrative sections.
pub fn format_probability(p: f64) -> String {
    format!("{p:.2}")
}

/// Probability as shown in table cells.
pub fn format_probability_cell(p: f64) -> String {
    format!("{p:.4}")
}
