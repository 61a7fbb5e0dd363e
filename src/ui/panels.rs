use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::Theme;
use crate::data::model::{AdDataset, Channel};
use crate::data::view::format_thousands;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – channel selector and statistics
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    let theme = Theme::dashboard();

    ui.add_space(4.0);
    ui.heading(RichText::new("Controles de Visualización").color(theme.text));
    ui.separator();

    if state.dataset.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ui.label("Seleccione Canal Publicitario:");
    let current = state.channel;
    egui::ComboBox::from_id_salt("channel_selector")
        .selected_text(current.label())
        .show_ui(ui, |ui: &mut Ui| {
            for channel in Channel::ALL {
                if ui
                    .selectable_label(current == channel, channel.label())
                    .clicked()
                {
                    state.set_channel(channel);
                }
            }
        });

    ui.add_space(12.0);
    ui.heading(RichText::new("Estadísticas Generales").color(theme.text));
    ui.separator();

    if let Some(view) = &state.view {
        stat_row(
            ui,
            "Correlación con Ventas:",
            format!("{:.3}", view.stats.correlation),
        );
        stat_row(
            ui,
            "Inversión Promedio:",
            format_thousands(view.stats.mean_spend),
        );
        stat_row(
            ui,
            "Inversión Máxima:",
            format_thousands(view.stats.max_spend),
        );
        stat_row(
            ui,
            "Ventas Promedio:",
            format_thousands(view.stats.mean_sales),
        );
    }

    ui.add_space(12.0);
    if let Some(dataset) = &state.dataset {
        egui::CollapsingHeader::new(RichText::new("Vista de Datos").strong())
            .default_open(false)
            .show(ui, |ui: &mut Ui| {
                data_preview(ui, dataset);
            });
    }
}

fn stat_row(ui: &mut Ui, label: &str, value: String) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(label);
        ui.label(value);
    });
}

/// Raw table preview, one row per observation.
fn data_preview(ui: &mut Ui, dataset: &AdDataset) {
    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().at_least(48.0), 4)
        .header(18.0, |mut header| {
            for name in ["TV", "Radio", "Newspaper", "Sales"] {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(16.0, dataset.len(), |mut row| {
                let obs = &dataset.observations[row.index()];
                for value in [obs.tv, obs.radio, obs.newspaper, obs.sales] {
                    row.col(|ui| {
                        ui.label(format!("{value:.1}"));
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

        if let Some(ds) = &state.dataset {
            ui.label(format!("{} observaciones cargadas", ds.len()));
        }

        ui.separator();

        if ui
            .selectable_label(state.show_trendline, "Línea de Tendencia")
            .clicked()
        {
            state.show_trendline = !state.show_trendline;
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open advertising data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} observations from {}",
                    dataset.len(),
                    path.display()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
