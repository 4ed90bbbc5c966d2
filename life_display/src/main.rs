// main.rs - eframe bootstrap for the morphing Game of Life

use eframe::egui;
use life_core::LifeConfig;

mod ui;

use ui::LifeApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt::init();

    let config = LifeConfig::default();
    let side = config.style.pitch() * config.grid_width as f32;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([side + 45.0, side + 180.0]),
        ..Default::default()
    };

    // Default dimensions are positive, so construction cannot fail.
    let app = LifeApp::new(config).expect("default configuration is valid");

    eframe::run_native(
        "Morphing Game of Life",
        options,
        Box::new(move |_cc| Box::new(app)),
    )
}
