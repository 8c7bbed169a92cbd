//! Command-line interface definitions and argument parsing

use std::path::PathBuf;

use clap::Parser;

/// Rank aisles by reorder probability and compare the leader with a baseline
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the aisle metrics file (.csv, .json or .parquet)
    #[arg(short, long, default_value = "aisle_reorder_metrics.csv")]
    pub input: PathBuf,

    /// Initial minimum purchases; clamped to the largest purchase count
    #[arg(short, long)]
    pub min_purchases: Option<u64>,

    /// Initial baseline aisle; defaults to the 10th-ranked aisle
    #[arg(short, long)]
    pub baseline: Option<String>,

    /// Print the report to stdout instead of opening a window
    #[arg(short, long)]
    pub print: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["retention-driver-finder"]).unwrap();
        assert_eq!(args.input, PathBuf::from("aisle_reorder_metrics.csv"));
        assert_eq!(args.min_purchases, None);
        assert_eq!(args.baseline, None);
        assert!(!args.print);
    }

    #[test]
    fn all_flags() {
        let args = Args::try_parse_from([
            "retention-driver-finder",
            "-i",
            "metrics.parquet",
            "--min-purchases",
            "250000",
            "--baseline",
            "fresh fruits",
            "--print",
        ])
        .unwrap();
        assert_eq!(args.input, PathBuf::from("metrics.parquet"));
        assert_eq!(args.min_purchases, Some(250_000));
        assert_eq!(args.baseline.as_deref(), Some("fresh fruits"));
        assert!(args.print);

        assert!(Args::try_parse_from(["retention-driver-finder", "-m", "-5"]).is_err());
    }
}
