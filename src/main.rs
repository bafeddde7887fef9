use eframe::egui;
use refractive_explorer::app::ExplorerApp;
use refractive_explorer::config::ExplorerConfig;

fn main() -> eframe::Result {
    env_logger::init();

    let config = ExplorerConfig::default();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size(config.min_window_size),
        ..Default::default()
    };

    eframe::run_native(
        "Refractive Index Data Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(ExplorerApp::new(config)))),
    )
}
