use eframe::egui;

use crate::ui::{panels, viewer};
use crate::window::ViewerWindow;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PokedexApp {
    pub window: ViewerWindow,
}

impl PokedexApp {
    pub fn new(window: ViewerWindow) -> Self {
        Self { window }
    }
}

impl eframe::App for PokedexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.window);
        });

        // ---- Central panel: enlarged view and thumbnail grid ----
        egui::CentralPanel::default().show(ctx, |ui| {
            viewer::viewer(ui, &mut self.window);
        });

        // ---- Message boxes ----
        panels::message_dialog(ctx, &mut self.window);
    }
}
