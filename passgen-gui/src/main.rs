mod config;
mod gui;
mod state;
mod timer;

use config::Config;
use eframe::egui;
use gui::Gui;

fn main() -> eframe::Result {
    env_logger::init();

    let config = Config::load();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 360.0])
            .with_min_inner_size([320.0, 280.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Password Generator",
        options,
        Box::new(move |_cc| Ok(Box::new(Gui::new(config)))),
    )
}
