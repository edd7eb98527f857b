// main.rs - Conway Paint: draw live cells with the mouse, press Space to let them run
// Space toggles Editing/Playing, C clears the grid while editing

use eframe::egui;

mod config;    // Window, timing and color settings
mod grid;      // Cell buffers
mod engine;    // B3/S23 step
mod stroke;    // Pointer samples to painted cells
mod sandbox;   // Mode switch and per-tick dispatch
mod render;    // Frame composition over a Canvas
mod ui;        // eframe host

use config::SandboxConfig;
use ui::PaintApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let config = SandboxConfig::default();
    let (width, height) = match config.grid_size() {
        Ok(size) => size,
        Err(e) => {
            log::error!("Invalid sandbox configuration: {e}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title)
            .with_inner_size(config.window_size())
            .with_resizable(false),
        ..Default::default()
    };

    log::info!("Starting {} ({}x{} window)", config.title, config.window_size()[0], config.window_size()[1]);
    eframe::run_native(
        config.title,
        options,
        Box::new(move |_cc| Box::new(PaintApp::new(config, width, height))),
    )
}
