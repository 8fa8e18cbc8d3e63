use serde::Deserialize;

// ---------------------------------------------------------------------------
// Channel – the two call paths the dashboard compares
// ---------------------------------------------------------------------------

/// The two call channels tracked by the inContact export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Callers answering an automated keypad menu.
    Press1,
    /// Callers reaching a live staffed call center.
    InfoReferral,
}

impl Channel {
    /// Tab label shown in the UI.
    pub fn label(self) -> &'static str {
        match self {
            Channel::Press1 => "Press 1",
            Channel::InfoReferral => "Information and Referral (I & R)",
        }
    }
}

// ---------------------------------------------------------------------------
// Metric table rows – one struct per upstream CSV schema
// ---------------------------------------------------------------------------

/// Shared row access: every metric table filters on its month label.
pub trait MonthKeyed {
    fn month(&self) -> &str;
}

/// One hour-of-day bucket of outbound call volume.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HourlyRow {
    #[serde(rename = "Month")]
    pub month: String,
    pub hour_of_day: u32,
    #[serde(rename = "Outbound")]
    pub outbound: u64,
}

/// Outbound call volume for one partner call center.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CenterRow {
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Center")]
    pub center: String,
    #[serde(rename = "Outbound")]
    pub outbound: u64,
}

/// Call count for one caller-frequency category (repeat vs one-time).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SplitRow {
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Call Frequency")]
    pub call_frequency: String,
    #[serde(rename = "# of Calls")]
    pub calls: u64,
}

/// Call count for one calls-per-caller bucket (e.g. "2-3 calls").
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RangeRow {
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Call Count Range")]
    pub call_count_range: String,
    #[serde(rename = "# of Calls")]
    pub calls: u64,
}

impl MonthKeyed for HourlyRow {
    fn month(&self) -> &str {
        &self.month
    }
}

impl MonthKeyed for CenterRow {
    fn month(&self) -> &str {
        &self.month
    }
}

impl MonthKeyed for SplitRow {
    fn month(&self) -> &str {
        &self.month
    }
}

impl MonthKeyed for RangeRow {
    fn month(&self) -> &str {
        &self.month
    }
}

// ---------------------------------------------------------------------------
// Month filter – the one predicate every chart shares
// ---------------------------------------------------------------------------

/// Rows whose month label equals `month` exactly (case-sensitive, no
/// trimming), in table order. An unmatched month yields an empty iterator.
pub fn rows_for_month<'a, R: MonthKeyed>(
    rows: &'a [R],
    month: &'a str,
) -> impl Iterator<Item = &'a R> {
    rows.iter().filter(move |r| r.month() == month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hourly(month: &str, hour_of_day: u32, outbound: u64) -> HourlyRow {
        HourlyRow {
            month: month.to_string(),
            hour_of_day,
            outbound,
        }
    }

    #[test]
    fn filter_is_exact_and_order_preserving() {
        let rows = vec![
            hourly("January", 0, 5),
            hourly("January", 1, 3),
            hourly("February", 0, 9),
        ];

        let matched: Vec<_> = rows_for_month(&rows, "January").collect();
        assert_eq!(matched.len(), 2);
        assert_eq!(matched[0].hour_of_day, 0);
        assert_eq!(matched[0].outbound, 5);
        assert_eq!(matched[1].hour_of_day, 1);
        assert_eq!(matched[1].outbound, 3);
    }

    #[test]
    fn filter_is_case_sensitive_and_untrimmed() {
        let rows = vec![hourly("January", 9, 12)];
        assert_eq!(rows_for_month(&rows, "january").count(), 0);
        assert_eq!(rows_for_month(&rows, " January").count(), 0);
        assert_eq!(rows_for_month(&rows, "January").count(), 1);
    }

    #[test]
    fn unmatched_month_yields_empty_not_error() {
        let rows = vec![hourly("July", 10, 4)];
        assert_eq!(rows_for_month(&rows, "Smarch").count(), 0);
    }
}
