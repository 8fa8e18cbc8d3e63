use crate::data::engine::{compute_charts, ChartSpec, CHART_COUNT};
use crate::data::model::Channel;
use crate::data::months;
use crate::data::store::DatasetStore;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering. The store is injected once
/// at startup and only ever borrowed read-only; all chart content is derived
/// from it plus the selected month.
pub struct AppState {
    store: DatasetStore,

    /// Current selector value. Always one of the catalog labels: the
    /// dropdown is not clearable and offers nothing else.
    pub selected_month: String,

    /// Which channel tab is in front.
    pub active_tab: Channel,

    /// The eight chart slots for the selected month, Press 1 first.
    pub charts: [ChartSpec; CHART_COUNT],
}

impl AppState {
    /// Build the state around a loaded store and render the default month.
    pub fn new(store: DatasetStore) -> Self {
        let selected_month = months::DEFAULT_MONTH.to_string();
        let charts = compute_charts(&store, &selected_month);
        AppState {
            store,
            selected_month,
            active_tab: Channel::Press1,
            charts,
        }
    }

    /// Selector change: recompute and replace all eight chart slots.
    pub fn set_month(&mut self, month: &str) {
        if month == self.selected_month {
            return;
        }
        self.charts = compute_charts(&self.store, month);
        self.selected_month = month.to_string();
        log::debug!("selector changed to '{month}'");
    }

    /// The four chart slots for `channel`, in slot order.
    pub fn charts_for(&self, channel: Channel) -> &[ChartSpec] {
        match channel {
            Channel::Press1 => &self.charts[..4],
            Channel::InfoReferral => &self.charts[4..],
        }
    }
}
