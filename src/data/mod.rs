/// Data layer: typed tables, loading, the month catalog, and the chart
/// engine.
///
/// Architecture:
/// ```text
///  data/*.csv (8 files)
///        │
///        ▼
///   ┌──────────┐
///   │  store    │  parse files → DatasetStore (immutable)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  engine   │  filter by month → [ChartSpec; 8]
///   └──────────┘
/// ```
///
/// `months` holds the seven-label program-year catalog used by the selector.

pub mod engine;
pub mod model;
pub mod months;
pub mod store;
