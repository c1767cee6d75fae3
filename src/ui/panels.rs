use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use sample_lens::color::parse_hex_color;

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – classes and split
// ---------------------------------------------------------------------------

/// Render the left panel: class legend, test ratio and per-class split.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Classes");
    ui.separator();

    if state.samples.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    let mut ratio = state.test_ratio;
    if ui
        .add(egui::Slider::new(&mut ratio, 0.0..=1.0).text("test ratio"))
        .changed()
    {
        state.set_test_ratio(ratio);
    }
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto())
                .column(Column::auto())
                .column(Column::auto())
                .column(Column::remainder())
                .header(20.0, |mut header| {
                    for title in ["Class", "Total", "Test", "Validation"] {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    for row in &state.split_rows {
                        let swatch = parse_hex_color(&row.color)
                            .map(|c| Color32::from_rgb(c.red, c.green, c.blue))
                            .unwrap_or(Color32::BLACK);
                        body.row(18.0, |mut table_row| {
                            table_row.col(|ui| {
                                ui.label(RichText::new(format!("● {}", row.class_name)).color(swatch));
                            });
                            table_row.col(|ui| {
                                ui.label(row.total.to_string());
                            });
                            table_row.col(|ui| {
                                ui.label(row.test.to_string());
                            });
                            table_row.col(|ui| {
                                ui.label(row.validation.to_string());
                            });
                        });
                    }
                });
        });
}

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
        });

        ui.separator();

        if let Some(samples) = &state.samples {
            ui.label(format!(
                "{} samples in {} classes",
                samples.len(),
                samples.class_count()
            ));
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
        .set_title("Open bunch")
        .add_filter("Supported files", &["json", "csv", "parquet", "pq"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
