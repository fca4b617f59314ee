use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use super::plot;
use crate::data::model::Table;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let loaded = state.dashboard.is_some();
            if ui
                .add_enabled(loaded, egui::Button::new("Export summary…"))
                .clicked()
            {
                export_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(dash) = &state.dashboard {
            ui.label(format!(
                "{}: {} rows × {} columns",
                dash.source,
                dash.table.n_rows(),
                dash.table.n_columns()
            ));
        }

        if let Some(msg) = state.toolbar_message() {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Central dashboard
// ---------------------------------------------------------------------------

/// Raw data, the 2×2 distribution grid and the comparison, or the error of
/// the last run.
pub fn dashboard_view(ui: &mut Ui, state: &AppState) {
    let dash = match &state.dashboard {
        Some(dash) => dash,
        None => {
            match state.run_error() {
                Some(msg) => {
                    ui.label(RichText::new(msg).color(Color32::RED).size(16.0));
                }
                None => {
                    ui.add_space(40.0);
                    ui.vertical_centered(|ui: &mut Ui| {
                        ui.heading("Choose an Excel file  (File → Open…, or drop it here)");
                    });
                }
            }
            return;
        }
    };

    egui::CollapsingHeader::new(RichText::new("Uploaded Data").strong())
        .default_open(true)
        .show(ui, |ui: &mut Ui| data_table(ui, &dash.table));
    ui.separator();

    for pair in dash.distributions.chunks(2) {
        ui.columns(2, |cols: &mut [Ui]| {
            for (col, dist) in cols.iter_mut().zip(pair) {
                col.heading(&dist.title);
                plot::distribution_plot(col, dist, &state.palette);
                col.label(RichText::new(dist.summary_line()).small().monospace());
            }
        });
        ui.add_space(8.0);
    }

    ui.separator();
    ui.heading("Comparison Between Different Part Conditions");
    plot::comparison_plot(ui, &dash.comparison, &state.palette);
}

// ---------------------------------------------------------------------------
// Raw data table
// ---------------------------------------------------------------------------

fn data_table(ui: &mut Ui, table: &Table) {
    ScrollArea::horizontal()
        .id_salt("raw_data_hscroll")
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .max_scroll_height(280.0)
                .column(Column::auto().at_least(32.0))
                .columns(Column::auto().at_least(64.0), table.n_columns())
                .header(20.0, |mut header| {
                    header.col(|_ui: &mut Ui| {});
                    for name in &table.column_names {
                        header.col(|ui: &mut Ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, table.n_rows(), |mut row| {
                        let i = row.index();
                        row.col(|ui: &mut Ui| {
                            ui.label(RichText::new(i.to_string()).weak());
                        });
                        for cell in &table.rows[i] {
                            row.col(|ui: &mut Ui| {
                                ui.label(cell.to_string());
                            });
                        }
                    });
                });
        });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Choose an Excel file")
        .add_filter("Supported files", &["xlsx", "xlsm", "xls", "ods", "csv", "parquet", "pq"])
        .add_filter("Excel", &["xlsx", "xlsm", "xls"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}

pub fn export_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export summary")
        .add_filter("JSON", &["json"])
        .set_file_name("summary.json")
        .save_file();

    if let Some(path) = file {
        state.export_summary(&path);
    }
}
