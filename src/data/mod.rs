/// Data layer: core types, loading, filtering and the baseline comparison.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + coerce + drop incomplete rows → AisleDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ AisleDataset  │  Vec<AisleMetric>, read-only behind an Arc
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  minimum purchases → ranked view
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ compare   │  top aisle ÷ baseline aisle
///   └──────────┘
/// ```

pub mod compare;
pub mod filter;
pub mod loader;
pub mod model;
