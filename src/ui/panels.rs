use eframe::egui::{self, RichText, Ui};

use crate::data::model::Channel;
use crate::data::months;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Render the branded header strip.
pub fn header(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(10.0);
        ui.heading(RichText::new("211 inContact KPI Dashboard").size(26.0).strong());
        ui.label(
            "Compare key performance indicators on 211 Maryland partner call \
             centers using inContact IVR data.",
        );
        ui.add_space(6.0);
    });
}

// ---------------------------------------------------------------------------
// Month selector
// ---------------------------------------------------------------------------

/// Render the month dropdown. Single-select and never clearable: the combo
/// box always shows the current value and offers only catalog labels, in
/// program-year order.
pub fn month_menu(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.label(RichText::new("Select Month:").strong());
        let current = state.selected_month.clone();
        egui::ComboBox::from_id_salt("month")
            .selected_text(&current)
            .show_ui(ui, |ui: &mut Ui| {
                for label in months::labels() {
                    if ui.selectable_label(current == label, label).clicked() {
                        state.set_month(label);
                    }
                }
            });
    });
}

// ---------------------------------------------------------------------------
// Channel tabs
// ---------------------------------------------------------------------------

/// Render the two-channel tab strip.
pub fn tab_strip(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        for channel in [Channel::Press1, Channel::InfoReferral] {
            if ui
                .selectable_label(state.active_tab == channel, channel.label())
                .clicked()
            {
                state.active_tab = channel;
            }
        }
    });
}
