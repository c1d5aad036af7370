use eframe::egui;

use crate::state::{AppState, Tab};
use crate::ui::{original, panels, projections};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ForecastApp {
    pub state: AppState,
}

impl ForecastApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for ForecastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar and tab switcher ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: active tab ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.tab {
            Tab::Original => original::original_tab(ui, &mut self.state),
            Tab::Projections => projections::projections_tab(ui, &mut self.state),
        });
    }
}
