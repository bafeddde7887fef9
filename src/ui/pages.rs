use eframe::egui::{RichText, ScrollArea, Ui};

use crate::optics::sellmeier::LINE_D;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Static pages
// ---------------------------------------------------------------------------

pub fn home(ui: &mut Ui) {
    ui.heading("🌈 Refractive Index Data Explorer");
    ui.add_space(8.0);
    ui.label(RichText::new("Welcome to the Optics Class! 🔍").strong().size(18.0));
    ui.add_space(4.0);
    ui.label(
        "👉 This is a simple demo for an introductory optics class. It lets you explore \
         optical properties of common materials, starting with how their refractive \
         index changes with wavelength. 😊",
    );
    ui.add_space(8.0);
    ui.label("Open Data Visualization in the side panel to start plotting.");
}

pub fn about(ui: &mut Ui, state: &AppState) {
    ui.heading("About");
    ui.add_space(8.0);

    ScrollArea::vertical().show(ui, |ui: &mut Ui| {
        ui.label(
            "👀 Ever wondered why we see rainbows? Light bends by a different amount in \
             each material, and the amount depends on its wavelength. This tool plots \
             that dependence, the refractive index n(λ), for a few materials.",
        );
        ui.add_space(8.0);

        ui.strong("Sellmeier equation");
        ui.monospace("n²(λ) = 1 + Σᵢ Bᵢ·λ² / (λ² − Cᵢ),   i = 1..3,   λ in µm");
        ui.label(
            "Each material is described by three B and three C coefficients. The curve \
             is undefined where λ² equals one of the Cᵢ (an absorption resonance); such \
             points are left out of the plot.",
        );
        ui.add_space(8.0);

        ui.strong("Materials");
        for spec in state.catalog.iter() {
            let n_d = spec.coefficients.refractive_index(LINE_D);
            ui.label(format!("• {}: n_d = {n_d:.4}", spec.name));
        }
        ui.label(
            RichText::new("The Water coefficients are illustrative, not a fitted dataset.")
                .weak(),
        );
        ui.add_space(8.0);

        ui.label(
            "Thank you for visiting! ✨ Just a small demo tool for a class project; \
             it might grow if needed.",
        );
    });
}
