use eframe::egui::{self, Color32, RichText, Slider, Ui};

use crate::state::{AppState, Page};

// ---------------------------------------------------------------------------
// Left side panel – page navigation
// ---------------------------------------------------------------------------

/// Render the left navigation panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("👇 See what we can do");
    ui.separator();

    ui.label("Select a Page:");
    let mut page = state.page;
    for p in Page::ALL {
        ui.radio_value(&mut page, p, p.label());
    }
    state.set_page(page);
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export curves…").clicked() {
                save_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} of {} materials selected, {:.2}–{:.2} µm",
            state.selected.len(),
            state.catalog.len(),
            state.domain.min(),
            state.domain.max()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Data Visualization controls
// ---------------------------------------------------------------------------

/// Material multiselect and wavelength range sliders.
pub fn controls(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Interactive Refractive Index Explorer");
    ui.label(
        RichText::new(
            "📢 The values provided here are general representative values. Actual \
             applications or research may need measurements that fit specific conditions.",
        )
        .small()
        .weak(),
    );
    ui.add_space(6.0);

    ui.strong("👇 Select Material");
    ui.horizontal_wrapped(|ui: &mut Ui| {
        for name in state.catalog.names() {
            let mut checked = state.is_selected(&name);
            let text = RichText::new(&name).color(state.colors.color_for(&name));
            if ui.checkbox(&mut checked, text).changed() {
                state.set_selected(&name, checked);
            }
        }
    });
    ui.add_space(6.0);

    ui.strong("👇 Select Wavelength Range (in micrometers)");
    let (lo, hi) = state.config.slider_bounds;
    let mut min = state.domain.min();
    let mut max = state.domain.max();
    let changed_min = ui
        .add(Slider::new(&mut min, lo..=hi).text("min (µm)").fixed_decimals(2))
        .changed();
    let changed_max = ui
        .add(Slider::new(&mut max, lo..=hi).text("max (µm)").fixed_decimals(2))
        .changed();
    if changed_min || changed_max {
        state.set_range(min, max);
    }
    ui.separator();
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn save_file_dialog(state: &mut AppState) {
    let curves = match state.curves() {
        Ok(curves) => curves,
        Err(e) => {
            log::error!("Cannot export: {e}");
            state.status_message = Some(format!("Error: {e}"));
            return;
        }
    };

    let file = rfd::FileDialog::new()
        .set_title("Export dispersion curves")
        .set_file_name("dispersion.csv")
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match crate::export::export_file(&path, &curves) {
            Ok(()) => {
                log::info!("Exported {} curve(s) to {}", curves.len(), path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
