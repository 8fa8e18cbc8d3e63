use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::model::{CenterRow, HourlyRow, MonthKeyed, RangeRow, SplitRow};
use super::months;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Dataset resolution failures callers may want to match on; parse failures
/// are reported through `anyhow` with file/row context attached.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("dataset '{0}' not found (tried .csv and .json)")]
    MissingDataset(String),
}

// ---------------------------------------------------------------------------
// DatasetStore – the eight pre-aggregated tables
// ---------------------------------------------------------------------------

/// One table per (metric kind, channel) pair. Loaded once at startup and
/// never mutated; the chart engine borrows it read-only.
#[derive(Debug, Clone)]
pub struct DatasetStore {
    pub hourly_press1: Vec<HourlyRow>,
    pub hourly_ir: Vec<HourlyRow>,
    pub centers_press1: Vec<CenterRow>,
    pub centers_ir: Vec<CenterRow>,
    pub splits_press1: Vec<SplitRow>,
    pub splits_ir: Vec<SplitRow>,
    pub ranges_press1: Vec<RangeRow>,
    pub ranges_ir: Vec<RangeRow>,
}

impl DatasetStore {
    /// Load all eight datasets from `dir`. Any missing file, missing column,
    /// or unparsable row is fatal; there is no partial-degradation mode.
    pub fn load(dir: &Path) -> Result<Self> {
        let store = DatasetStore {
            hourly_press1: load_table(dir, "calls_by_hour_press1")?,
            hourly_ir: load_table(dir, "calls_by_hour_IR")?,
            centers_press1: load_table(dir, "calls_by_center_press1")?,
            centers_ir: load_table(dir, "calls_by_center_IR")?,
            splits_press1: load_table(dir, "repeat_calls_count_press1")?,
            splits_ir: load_table(dir, "repeat_calls_count_IR")?,
            ranges_press1: load_table(dir, "repeat_calls_range_count_press1")?,
            ranges_ir: load_table(dir, "repeat_calls_range_count_IR")?,
        };

        store.warn_unknown_months();
        log::info!(
            "loaded 8 datasets from {} ({} rows total)",
            dir.display(),
            store.row_count()
        );
        Ok(store)
    }

    /// Total row count across all eight tables.
    pub fn row_count(&self) -> usize {
        self.hourly_press1.len()
            + self.hourly_ir.len()
            + self.centers_press1.len()
            + self.centers_ir.len()
            + self.splits_press1.len()
            + self.splits_ir.len()
            + self.ranges_press1.len()
            + self.ranges_ir.len()
    }

    /// Month labels outside the catalog can never be selected, so matching
    /// rows are unreachable from the UI. Kept, but flagged once at load.
    fn warn_unknown_months(&self) {
        check_months(&self.hourly_press1, "calls_by_hour_press1");
        check_months(&self.hourly_ir, "calls_by_hour_IR");
        check_months(&self.centers_press1, "calls_by_center_press1");
        check_months(&self.centers_ir, "calls_by_center_IR");
        check_months(&self.splits_press1, "repeat_calls_count_press1");
        check_months(&self.splits_ir, "repeat_calls_count_IR");
        check_months(&self.ranges_press1, "repeat_calls_range_count_press1");
        check_months(&self.ranges_ir, "repeat_calls_range_count_IR");
    }
}

fn check_months<R: MonthKeyed>(rows: &[R], name: &str) {
    for row in rows {
        if !months::contains(row.month()) {
            log::warn!(
                "{name}: month '{}' is not in the selector catalog",
                row.month()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Table loading – dispatch by extension, CSV preferred
// ---------------------------------------------------------------------------

/// Load one named dataset from `dir`. The upstream export writes CSV; a
/// records-oriented JSON dump of the same table is accepted as well.
fn load_table<R>(dir: &Path, stem: &str) -> Result<Vec<R>>
where
    R: DeserializeOwned,
{
    let csv_path = dir.join(format!("{stem}.csv"));
    if csv_path.is_file() {
        return load_csv(&csv_path);
    }

    let json_path = dir.join(format!("{stem}.json"));
    if json_path.is_file() {
        return load_json(&json_path);
    }

    Err(StoreError::MissingDataset(stem.to_string()).into())
}

/// CSV layout: header row with the upstream column names; every row must
/// deserialize into the table's record type (missing columns fail here).
fn load_csv<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.deserialize().enumerate() {
        let row: R =
            result.with_context(|| format!("{}: row {row_no}", path.display()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "Month": "January", "hour_of_day": 9, "Outbound": 120 },
///   ...
/// ]
/// ```
fn load_json<R: DeserializeOwned>(path: &Path) -> Result<Vec<R>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
