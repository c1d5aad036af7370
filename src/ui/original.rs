use eframe::egui::{self, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Original-table tab
// ---------------------------------------------------------------------------

/// Render the source workbook grid and the assumptions derived from it.
pub fn original_tab(ui: &mut Ui, state: &mut AppState) {
    let Some(sheet) = &state.sheet else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a workbook to begin  (File → Open…)");
        });
        return;
    };

    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            ui.heading("Financial history");
            ui.add_space(4.0);

            egui::Grid::new("original_grid")
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui: &mut Ui| {
                    for row in 0..sheet.n_rows() {
                        for col in 0..sheet.n_cols {
                            ui.label(sheet.cell(row, col).to_string());
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(12.0);
            ui.heading("Derived assumptions");
            ui.add_space(4.0);

            match state.assumptions_json() {
                Some(json) => {
                    ui.monospace(json);
                }
                None => {
                    ui.label("No assumptions could be derived from this workbook.");
                }
            }
        });
}
