use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::{AppState, Tab};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / tab switcher.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if ui
            .selectable_label(state.tab == Tab::Original, "Original table")
            .clicked()
        {
            state.tab = Tab::Original;
        }
        if ui
            .selectable_label(state.tab == Tab::Projections, "New projections")
            .clicked()
        {
            state.tab = Tab::Projections;
        }

        ui.separator();

        if let Some(sheet) = &state.sheet {
            ui.label(format!("{} rows × {} columns", sheet.n_rows(), sheet.n_cols));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open projections workbook")
        .add_filter("Supported files", &["xlsx", "xlsm", "xls", "ods", "csv"])
        .add_filter("Excel", &["xlsx", "xlsm", "xls"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(sheet) => {
                log::info!(
                    "loaded {} rows × {} columns from {}",
                    sheet.n_rows(),
                    sheet.n_cols,
                    path.display()
                );
                state.set_sheet(sheet);
            }
            Err(e) => {
                log::error!("failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
