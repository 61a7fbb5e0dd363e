use eframe::egui::{self, RichText};

use crate::color::Theme;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct AdVizApp {
    pub state: AppState,
}

impl AdVizApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl Default for AdVizApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for AdVizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let theme = Theme::dashboard();

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Header: title and subtitle ----
        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::side_top_panel(&ctx.style()).fill(theme.background))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui: &mut egui::Ui| {
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Análisis de Impacto Publicitario en Ventas")
                            .size(26.0)
                            .strong()
                            .color(theme.text),
                    );
                    ui.label(
                        RichText::new(
                            "Análisis interactivo de la relación entre inversión \
                             publicitaria y ventas por canal",
                        )
                        .color(theme.text),
                    );
                    ui.add_space(8.0);
                });
            });

        // ---- Left side panel: controls and statistics ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: distribution histograms ----
        if self.state.view.is_some() {
            egui::TopBottomPanel::bottom("distribution_panel")
                .exact_height(260.0)
                .show(ctx, |ui| {
                    plot::distribution_plot(ui, &self.state);
                });
        }

        // ---- Central panel: scatter with trendline ----
        egui::CentralPanel::default()
            .frame(egui::Frame::central_panel(&ctx.style()).fill(theme.background))
            .show(ctx, |ui| {
                plot::scatter_plot(ui, &self.state);
            });
    }
}
