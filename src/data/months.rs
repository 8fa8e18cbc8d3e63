// ---------------------------------------------------------------------------
// Month catalog – the program year runs July through the following January
// ---------------------------------------------------------------------------

/// A selectable month label with its position in the program year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthEntry {
    pub label: &'static str,
    pub sort_order: u8,
}

/// The seven reporting months, in display order. The sort order is explicit
/// because it matches neither calendar-from-January nor lexical order.
pub const CATALOG: [MonthEntry; 7] = [
    MonthEntry { label: "July", sort_order: 1 },
    MonthEntry { label: "August", sort_order: 2 },
    MonthEntry { label: "September", sort_order: 3 },
    MonthEntry { label: "October", sort_order: 4 },
    MonthEntry { label: "November", sort_order: 5 },
    MonthEntry { label: "December", sort_order: 6 },
    MonthEntry { label: "January", sort_order: 7 },
];

/// Selector value on startup.
pub const DEFAULT_MONTH: &str = "January";

/// Month labels in sort order, for populating the selector.
pub fn labels() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|m| m.label)
}

/// Whether `label` is one of the seven catalog months.
pub fn contains(label: &str) -> bool {
    CATALOG.iter().any(|m| m.label == label)
}
