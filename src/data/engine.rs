use crate::color::{self, Rgb};

use super::model::{rows_for_month, CenterRow, HourlyRow, RangeRow, SplitRow};
use super::store::DatasetStore;

// ---------------------------------------------------------------------------
// ChartSpec – the engine's output unit
// ---------------------------------------------------------------------------

/// How a chart's series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Bar,
    Pie,
}

/// Typography shared by every chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSpec {
    pub family: &'static str,
    pub size: f32,
}

pub const CHART_FONT: FontSpec = FontSpec {
    family: "Garamond",
    size: 14.0,
};

/// A chart-ready description: series type, paired label/value arrays,
/// colours, and title. `labels` and `values` always have equal length.
/// Built fresh on every month selection and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: SeriesKind,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub colors: Vec<Rgb>,
    pub title: &'static str,
    pub font: FontSpec,
}

impl ChartSpec {
    /// True when the selected month matched no rows in the source table.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Chart slots produced per invocation: four metrics × two channels.
pub const CHART_COUNT: usize = 8;

// Titles mirror the upstream dashboard, which labels both channels "(IVR)".
// TODO: confirm the intended I&R title wording with the dashboard owners
// before diverging from the upstream text.
const HOURLY_TITLE: &str = "Call Volume by Hour (IVR)";
const CENTER_TITLE: &str = "Call Volume by Call Center (IVR)";
const SPLIT_TITLE: &str = "Repeat Callers vs One Time Callers (IVR)";
const RANGE_TITLE: &str = "Number of Calls Made by Repeat Callers (IVR)";

// ---------------------------------------------------------------------------
// compute_charts – the filter-and-project step
// ---------------------------------------------------------------------------

/// Build all eight chart specs for `month`: hour, center, repeat split, and
/// repeat-range for Press 1, then the same four for I&R.
///
/// Pure and synchronous. A month with no matching rows (including labels
/// outside the catalog) produces empty specs, never an error.
pub fn compute_charts(store: &DatasetStore, month: &str) -> [ChartSpec; CHART_COUNT] {
    [
        hourly_chart(&store.hourly_press1, month),
        center_chart(&store.centers_press1, month),
        split_chart(&store.splits_press1, month),
        range_chart(&store.ranges_press1, month),
        hourly_chart(&store.hourly_ir, month),
        center_chart(&store.centers_ir, month),
        split_chart(&store.splits_ir, month),
        range_chart(&store.ranges_ir, month),
    ]
}

/// Bar chart of outbound volume per hour of day. Hours keep the order they
/// appear in the source table; no numeric resort.
fn hourly_chart(rows: &[HourlyRow], month: &str) -> ChartSpec {
    let (labels, values) = rows_for_month(rows, month)
        .map(|r| (r.hour_of_day.to_string(), r.outbound as f64))
        .unzip();
    ChartSpec {
        kind: SeriesKind::Bar,
        labels,
        values,
        colors: vec![color::DEEP_BLUE],
        title: HOURLY_TITLE,
        font: CHART_FONT,
    }
}

/// Bar chart of outbound volume per partner call center.
fn center_chart(rows: &[CenterRow], month: &str) -> ChartSpec {
    let (labels, values) = rows_for_month(rows, month)
        .map(|r| (r.center.clone(), r.outbound as f64))
        .unzip();
    ChartSpec {
        kind: SeriesKind::Bar,
        labels,
        values,
        colors: vec![color::SKY_BLUE],
        title: CENTER_TITLE,
        font: CHART_FONT,
    }
}

/// Pie of repeat vs one-time callers. One slice per filtered row, in row
/// order; the source normally carries exactly two categories.
fn split_chart(rows: &[SplitRow], month: &str) -> ChartSpec {
    let (labels, values): (Vec<String>, Vec<f64>) = rows_for_month(rows, month)
        .map(|r| (r.call_frequency.clone(), r.calls as f64))
        .unzip();
    let colors = color::pie_palette(labels.len());
    ChartSpec {
        kind: SeriesKind::Pie,
        labels,
        values,
        colors,
        title: SPLIT_TITLE,
        font: CHART_FONT,
    }
}

/// Bar chart histogramming calls-per-caller range buckets.
fn range_chart(rows: &[RangeRow], month: &str) -> ChartSpec {
    let (labels, values) = rows_for_month(rows, month)
        .map(|r| (r.call_count_range.clone(), r.calls as f64))
        .unzip();
    ChartSpec {
        kind: SeriesKind::Bar,
        labels,
        values,
        colors: vec![color::CORAL],
        title: RANGE_TITLE,
        font: CHART_FONT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::months;

    fn fixture_store() -> DatasetStore {
        let hourly = |month: &str, hour_of_day: u32, outbound: u64| HourlyRow {
            month: month.to_string(),
            hour_of_day,
            outbound,
        };
        let center = |month: &str, name: &str, outbound: u64| CenterRow {
            month: month.to_string(),
            center: name.to_string(),
            outbound,
        };
        let split = |month: &str, freq: &str, calls: u64| SplitRow {
            month: month.to_string(),
            call_frequency: freq.to_string(),
            calls,
        };
        let range = |month: &str, bucket: &str, calls: u64| RangeRow {
            month: month.to_string(),
            call_count_range: bucket.to_string(),
            calls,
        };

        DatasetStore {
            hourly_press1: vec![
                hourly("January", 0, 5),
                hourly("January", 1, 3),
                hourly("February", 0, 9),
            ],
            hourly_ir: vec![hourly("January", 9, 12), hourly("July", 9, 40)],
            centers_press1: vec![
                center("January", "Baltimore", 88),
                center("January", "Frederick", 31),
                center("July", "Baltimore", 70),
            ],
            centers_ir: vec![center("January", "Baltimore", 14)],
            splits_press1: vec![
                split("January", "One Time Callers", 70),
                split("January", "Repeat Callers", 30),
            ],
            splits_ir: vec![
                split("January", "One Time Callers", 25),
                split("January", "Repeat Callers", 10),
                split("July", "One Time Callers", 60),
            ],
            ranges_press1: vec![
                range("January", "2-3 calls", 22),
                range("January", "4-5 calls", 6),
            ],
            ranges_ir: vec![range("July", "2-3 calls", 9)],
        }
    }

    #[test]
    fn returns_eight_specs_in_fixed_order() {
        let store = fixture_store();
        let charts = compute_charts(&store, "January");

        assert_eq!(charts.len(), CHART_COUNT);
        let kinds: Vec<SeriesKind> = charts.iter().map(|c| c.kind).collect();
        assert_eq!(
            kinds,
            [
                SeriesKind::Bar,
                SeriesKind::Bar,
                SeriesKind::Pie,
                SeriesKind::Bar,
                SeriesKind::Bar,
                SeriesKind::Bar,
                SeriesKind::Pie,
                SeriesKind::Bar,
            ]
        );
        // Press 1 slots first, then I&R; same titles per metric kind.
        assert_eq!(charts[0].title, charts[4].title);
        assert_eq!(charts[2].title, charts[6].title);

        // Shared typography on every slot.
        for spec in &charts {
            assert_eq!(spec.font.family, "Garamond");
            assert_eq!(spec.font.size, 14.0);
        }
    }

    #[test]
    fn every_spec_has_matching_label_and_value_lengths() {
        let store = fixture_store();
        for month in months::labels() {
            for spec in compute_charts(&store, month) {
                assert_eq!(spec.labels.len(), spec.values.len(), "{}", spec.title);
            }
        }
    }

    #[test]
    fn filtering_is_exact_and_order_preserving() {
        let store = fixture_store();
        let charts = compute_charts(&store, "January");

        // Slot 0: hourly Press 1. The February row must be excluded and row
        // order kept as-is.
        assert_eq!(charts[0].labels, ["0", "1"]);
        assert_eq!(charts[0].values, [5.0, 3.0]);

        assert_eq!(charts[1].labels, ["Baltimore", "Frederick"]);
        assert_eq!(charts[1].values, [88.0, 31.0]);
    }

    #[test]
    fn unknown_month_yields_all_empty_specs() {
        let store = fixture_store();
        let first = compute_charts(&store, "Smarch");
        for spec in &first {
            assert!(spec.is_empty());
            assert!(spec.labels.is_empty());
        }

        // Idempotent: repeating the unknown month changes nothing.
        assert_eq!(first, compute_charts(&store, "Smarch"));
    }

    #[test]
    fn split_emits_one_label_per_filtered_row() {
        let store = fixture_store();
        let charts = compute_charts(&store, "January");

        let press1 = &charts[2];
        assert_eq!(press1.labels, ["One Time Callers", "Repeat Callers"]);
        assert_eq!(press1.values, [70.0, 30.0]);
        assert_eq!(press1.colors.len(), 2);

        // I&R January has two matching rows; the July row is excluded.
        let ir = &charts[6];
        assert_eq!(ir.labels.len(), 2);
        assert_eq!(ir.values, [25.0, 10.0]);
    }

    #[test]
    fn compute_is_deterministic() {
        let store = fixture_store();
        assert_eq!(
            compute_charts(&store, "January"),
            compute_charts(&store, "January")
        );
    }

    #[test]
    fn switching_months_replaces_every_slot() {
        let store = fixture_store();
        let january = compute_charts(&store, "January");
        let july = compute_charts(&store, "July");

        // July data exists only in the I&R hourly/split/range tables and the
        // Press 1 center table; every other slot must come back empty rather
        // than retaining January rows.
        assert!(july[0].is_empty());
        assert_eq!(july[1].values, [70.0]);
        assert!(july[2].is_empty());
        assert!(july[3].is_empty());
        assert_eq!(july[4].values, [40.0]);
        assert_eq!(july[6].values, [60.0]);
        assert_eq!(july[7].values, [9.0]);

        for (jan, jul) in january.iter().zip(july.iter()) {
            if !jan.is_empty() {
                assert_ne!(jan.values, jul.values);
            }
        }
    }

    #[test]
    fn fixed_colors_per_metric_kind() {
        let store = fixture_store();
        let charts = compute_charts(&store, "January");

        assert_eq!(charts[0].colors, [crate::color::DEEP_BLUE]);
        assert_eq!(charts[1].colors, [crate::color::SKY_BLUE]);
        assert_eq!(charts[3].colors, [crate::color::CORAL]);
        assert_eq!(charts[2].colors, crate::color::PIE_PALETTE);
    }
}
