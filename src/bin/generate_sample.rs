use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use arrow::array::{Float64Array, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use clap::Parser;
use parquet::arrow::ArrowWriter;
use serde::Serialize;

/// Write a deterministic sample of per-aisle reorder metrics
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory receiving aisle_reorder_metrics.{csv,parquet}
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// PRNG seed
    #[arg(short, long, default_value = "42")]
    seed: u64,
}

const AISLES: [&str; 24] = [
    "fresh fruits",
    "fresh vegetables",
    "packaged vegetables fruits",
    "yogurt",
    "packaged cheese",
    "milk",
    "water seltzer sparkling water",
    "chips pretzels",
    "soy lactosefree",
    "bread",
    "refrigerated",
    "frozen produce",
    "ice cream ice",
    "crackers",
    "energy granola bars",
    "eggs",
    "lunch meat",
    "frozen meals",
    "baby food formula",
    "fresh herbs",
    "spices seasonings",
    "baking ingredients",
    "canned meals beans",
    "first aid",
];

/// One output row. Counts are integers in the written files.
#[derive(Debug, Serialize)]
struct Row {
    aisle: String,
    reorder_probability: f64,
    total_purchases: i64,
    total_reorders: i64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    fn range(&mut self, low: f64, high: f64) -> f64 {
        low + (high - low) * self.next_f64()
    }
}

/// Popular aisles get more purchases and, loosely, higher reorder rates.
fn generate_rows(seed: u64) -> Vec<Row> {
    let mut rng = SimpleRng::new(seed);
    AISLES
        .iter()
        .enumerate()
        .map(|(i, &aisle)| {
            let popularity = 1.0 - i as f64 / AISLES.len() as f64;
            let total_purchases = (20_000.0 + popularity.powi(3) * rng.range(800_000.0, 3_800_000.0))
                .round() as i64;
            let reorder_probability =
                (0.2 + 0.5 * popularity + rng.range(-0.08, 0.08)).clamp(0.05, 0.95);
            let total_reorders = (total_purchases as f64 * reorder_probability).round() as i64;
            Row {
                aisle: aisle.to_string(),
                reorder_probability,
                total_purchases,
                total_reorders,
            }
        })
        .collect()
}

fn write_csv(rows: &[Row], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).context("creating CSV file")?;
    for row in rows {
        writer.serialize(row).context("writing CSV row")?;
    }
    writer.flush().context("flushing CSV file")?;
    Ok(())
}

fn write_parquet(rows: &[Row], path: &Path) -> Result<()> {
    let schema = Arc::new(Schema::new(vec![
        Field::new("aisle", DataType::Utf8, false),
        Field::new("reorder_probability", DataType::Float64, false),
        Field::new("total_purchases", DataType::Int64, false),
        Field::new("total_reorders", DataType::Int64, false),
    ]));

    let batch = RecordBatch::try_new(
        schema.clone(),
        vec![
            Arc::new(StringArray::from_iter_values(rows.iter().map(|r| r.aisle.as_str()))),
            Arc::new(Float64Array::from_iter_values(
                rows.iter().map(|r| r.reorder_probability),
            )),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.total_purchases))),
            Arc::new(Int64Array::from_iter_values(rows.iter().map(|r| r.total_reorders))),
        ],
    )
    .context("building record batch")?;

    let file = File::create(path).context("creating Parquet file")?;
    let mut writer = ArrowWriter::try_new(file, schema, None).context("creating Parquet writer")?;
    writer.write(&batch).context("writing Parquet batch")?;
    writer.close().context("closing Parquet writer")?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rows = generate_rows(args.seed);
    let csv_path = args.output_dir.join("aisle_reorder_metrics.csv");
    let parquet_path = args.output_dir.join("aisle_reorder_metrics.parquet");

    write_csv(&rows, &csv_path)?;
    write_parquet(&rows, &parquet_path)?;

    log::info!("seed {} produced {} aisles", args.seed, rows.len());
    println!(
        "Wrote {} aisles to {} and {}",
        rows.len(),
        csv_path.display(),
        parquet_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_deterministic_and_consistent() {
        let a = generate_rows(7);
        let b = generate_rows(7);
        assert_eq!(a.len(), AISLES.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.total_purchases, y.total_purchases);
            assert_eq!(x.reorder_probability, y.reorder_probability);
        }
        for row in &a {
            assert!((0.05..=0.95).contains(&row.reorder_probability));
            assert!(row.total_purchases >= 20_000);
            assert!(row.total_reorders <= row.total_purchases);
        }
    }

    #[test]
    fn csv_has_expected_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&generate_rows(1), &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("aisle,reorder_probability,total_purchases,total_reorders\n"));
    }
}
