use eframe::egui::{RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoints, Points};

use crate::color::{self, Theme};
use crate::data::stats::Histogram;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot with OLS trendline (central panel)
// ---------------------------------------------------------------------------

/// Render the spend-vs-sales scatter in the central panel.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let view = match &state.view {
        Some(v) => v,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a dataset to begin  (File → Open…)");
            });
            return;
        }
    };

    let theme = Theme::dashboard();

    ui.label(
        RichText::new(&view.scatter.title)
            .heading()
            .color(theme.text),
    );

    Plot::new("scatter_plot")
        .x_axis_label(&view.scatter.x_label)
        .y_axis_label(&view.scatter.y_label)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points = PlotPoints::new(view.scatter.points.clone());
            plot_ui.points(
                Points::new(points)
                    .radius(5.0)
                    .filled(true)
                    .color(color::with_opacity(theme.primary, 0.7)),
            );

            if state.show_trendline {
                if let Some([p0, p1]) = view.scatter.trendline {
                    plot_ui.line(
                        Line::new(PlotPoints::new(vec![p0, p1]))
                            .color(theme.secondary)
                            .width(2.5),
                    );
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Distribution histograms (bottom panel)
// ---------------------------------------------------------------------------

/// Render the paired spend / sales histograms side by side.
pub fn distribution_plot(ui: &mut Ui, state: &AppState) {
    let view = match &state.view {
        Some(v) => v,
        None => return,
    };

    let theme = Theme::dashboard();

    ui.columns(2, |cols| {
        histogram_plot(
            &mut cols[0],
            "spend_histogram",
            &view.distribution.spend_title,
            &view.distribution.spend,
            theme.primary,
        );
        histogram_plot(
            &mut cols[1],
            "sales_histogram",
            &view.distribution.sales_title,
            &view.distribution.sales,
            theme.secondary,
        );
    });
}

fn histogram_plot(
    ui: &mut Ui,
    id: &str,
    title: &str,
    hist: &Histogram,
    color: eframe::egui::Color32,
) {
    ui.label(RichText::new(title).strong());

    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            Bar::new(hist.bin_center(i), count as f64)
                .width(hist.bin_width)
                .fill(color::lighten(color, 0.1))
                .stroke(Stroke::new(1.0, color))
        })
        .collect();

    Plot::new(id)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show_grid(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}
