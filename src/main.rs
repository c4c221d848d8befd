mod app;
mod gallery;
mod layout;
mod ui;
mod window;

use std::path::Path;

use app::PokedexApp;
use eframe::egui;
use layout::LAYOUT_PATH;
use window::ViewerWindow;

fn main() -> eframe::Result {
    env_logger::init();

    let window = match ViewerWindow::initialize(Path::new(LAYOUT_PATH)) {
        Ok(window) => window,
        Err(e) => {
            log::error!("Startup failed: {e}");
            eprintln!("Error: {:#}", anyhow::Error::from(e));
            std::process::exit(1);
        }
    };

    let spec = window.layout().window.clone();
    let mut viewport = egui::ViewportBuilder::default()
        .with_title(spec.title.as_str())
        .with_inner_size(spec.size);
    if let Some(position) = spec.position {
        viewport = viewport.with_position(position);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        &spec.title,
        options,
        Box::new(|_cc| Ok(Box::new(PokedexApp::new(window)))),
    )
}
