use eframe::egui::{self, DragValue, RichText, ScrollArea, Slider, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::color::RowColors;
use crate::forecast::ProjectionTable;
use crate::forecast::projection::NET_INCOME;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Projections tab
// ---------------------------------------------------------------------------

/// Render the projection controls, the projected income statement, and the
/// projected-series chart.  Any control change rebuilds the projection
/// from the extracted assumptions snapshot.
pub fn projections_tab(ui: &mut Ui, state: &mut AppState) {
    if state.assumptions.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Load a workbook with valid history to project");
        });
        return;
    }

    let mut changed = false;

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Number of periods (months)");
        changed |= ui
            .add(DragValue::new(&mut state.controls.periods).range(0..=600))
            .changed();
    });
    changed |= ui
        .add(
            Slider::new(&mut state.controls.product_rate_pct, 0..=100)
                .text("Product Sales Growth Rate (%)"),
        )
        .changed();
    changed |= ui
        .add(
            Slider::new(&mut state.controls.service_rate_pct, 0..=100)
                .text("Service Sales Growth Rate (%)"),
        )
        .changed();

    if changed {
        state.reproject();
    }

    let Some(table) = &state.projection else {
        return;
    };

    ui.add_space(8.0);
    ui.separator();

    if let Some(net) = table.row(NET_INCOME).and_then(|r| r.values.last()) {
        ui.label(format!("Net income in the final period: {net:.2}"));
        ui.add_space(4.0);
    }

    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            projection_grid(ui, table);
            ui.add_space(12.0);
            projection_plot(ui, table);
        });
}

// ---------------------------------------------------------------------------
// Projection table
// ---------------------------------------------------------------------------

fn projection_grid(ui: &mut Ui, table: &ProjectionTable) {
    egui::Grid::new("projection_grid")
        .striped(true)
        .min_col_width(70.0)
        .show(ui, |ui: &mut Ui| {
            ui.strong("Category");
            for column in &table.columns {
                ui.strong(column.as_str());
            }
            ui.end_row();

            for row in &table.rows {
                let label = RichText::new(&row.label);
                ui.label(if row.derived { label.strong() } else { label });
                for value in &row.values {
                    let text = RichText::new(format!("{value:.2}"));
                    ui.label(if row.derived { text.strong() } else { text });
                }
                ui.end_row();
            }
        });
}

// ---------------------------------------------------------------------------
// Projection chart
// ---------------------------------------------------------------------------

/// Line chart of every projected row over the projection horizon.
fn projection_plot(ui: &mut Ui, table: &ProjectionTable) {
    let colors = RowColors::new(table.rows.iter().map(|r| r.label.as_str()));

    Plot::new("projection_plot")
        .legend(egui_plot::Legend::default())
        .x_axis_label("Month")
        .y_axis_label("Amount")
        .height(320.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for row in &table.rows {
                let points: PlotPoints = row
                    .values
                    .iter()
                    .enumerate()
                    .map(|(period, &value)| [period as f64, value])
                    .collect();

                let line = Line::new(points)
                    .name(&row.label)
                    .color(colors.color_for(&row.label))
                    .width(1.5);

                plot_ui.line(line);
            }
        });
}
