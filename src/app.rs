use eframe::egui;

use crate::config::ExplorerConfig;
use crate::state::{AppState, Page};
use crate::ui::{pages, panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ExplorerApp {
    pub state: AppState,
}

impl ExplorerApp {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: navigation ----
        egui::SidePanel::left("nav_panel")
            .default_width(200.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: current page ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.page {
            Page::Home => pages::home(ui),
            Page::DataVisualization => {
                panels::controls(ui, &mut self.state);
                plot::dispersion_plot(ui, &mut self.state);
            }
            Page::About => pages::about(ui, &self.state),
        });
    }
}
