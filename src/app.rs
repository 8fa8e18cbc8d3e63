use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct DashApp {
    pub state: AppState,
}

impl DashApp {
    pub fn new(state: AppState) -> Self {
        DashApp { state }
    }
}

impl eframe::App for DashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: header, month selector, channel tabs ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::header(ui);
            panels::month_menu(ui, &mut self.state);
            ui.add_space(6.0);
            panels::tab_strip(ui, &mut self.state);
        });

        // ---- Central panel: the four chart slots of the active tab ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    let tab = self.state.active_tab;
                    for (slot, spec) in self.state.charts_for(tab).iter().enumerate() {
                        charts::chart_slot(ui, slot, spec);
                    }
                });
        });
    }
}
