use eframe::egui::{RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::optics::sellmeier::LINE_D;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Dispersion plot (central panel, Data Visualization page)
// ---------------------------------------------------------------------------

/// Render n(λ) for every selected material, recomputed from scratch.
pub fn dispersion_plot(ui: &mut Ui, state: &mut AppState) {
    let curves = match state.curves() {
        Ok(curves) => curves,
        Err(e) => {
            log::error!("Failed to compute curves: {e}");
            state.status_message = Some(format!("Error: {e}"));
            return;
        }
    };

    ui.collapsing("Sellmeier coefficients", |ui: &mut Ui| {
        coefficient_table(ui, state);
    });

    ui.heading("Refractive Index vs. Wavelength");

    if curves.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.label(RichText::new("Select at least one material to plot.").weak());
        });
        return;
    }

    Plot::new("dispersion_plot")
        .legend(Legend::default())
        .x_axis_label("Wavelength (μm)")
        .y_axis_label("Refractive Index")
        .label_formatter(|name, value| {
            let point = format!("Wavelength: {:.3} µm\nn: {:.3}", value.x, value.y);
            if name.is_empty() {
                point
            } else {
                format!("{name}\n{point}")
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for curve in &curves {
                let color = state.colors.color_for(&curve.material);

                // Lines sharing a name share one legend entry.
                for segment in curve.finite_segments() {
                    let points: PlotPoints = segment.into_iter().collect();
                    let line = Line::new(points)
                        .name(&curve.material)
                        .color(color)
                        .width(2.0);
                    plot_ui.line(line);
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Coefficient table
// ---------------------------------------------------------------------------

fn coefficient_table(ui: &mut Ui, state: &AppState) {
    const HEADERS: [&str; 9] = ["Material", "B1", "B2", "B3", "C1", "C2", "C3", "n_d", "V_d"];

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(60.0), HEADERS.len())
        .header(20.0, |mut header| {
            for h in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(h);
                });
            }
        })
        .body(|mut body| {
            for spec in state.catalog.iter() {
                let k = &spec.coefficients;
                body.row(18.0, |mut row| {
                    row.col(|ui: &mut Ui| {
                        ui.label(
                            RichText::new(&spec.name).color(state.colors.color_for(&spec.name)),
                        );
                    });
                    for v in k.b.iter().chain(k.c.iter()) {
                        row.col(|ui: &mut Ui| {
                            ui.monospace(format!("{v:.6e}"));
                        });
                    }
                    row.col(|ui: &mut Ui| {
                        ui.monospace(fmt_or_dash(k.refractive_index(LINE_D), 4));
                    });
                    row.col(|ui: &mut Ui| {
                        ui.monospace(fmt_or_dash(k.abbe_number(), 2));
                    });
                });
            }
        });
}

fn fmt_or_dash(v: f64, decimals: usize) -> String {
    if v.is_finite() {
        format!("{v:.decimals$}")
    } else {
        "–".to_string()
    }
}
