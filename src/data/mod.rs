/// Data layer: core types, loading, and grouping.
///
/// Architecture:
/// ```text
///  .json / .csv / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Bunch
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  bunch    │  data rows + class indices → Vec<Sample>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  samples  │  group by class → split, colours, projection
///   └──────────┘
/// ```

pub mod bunch;
pub mod loader;
pub mod sample;
pub mod samples;
