use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, Ui};

use crate::window::{DialogKind, FolderPicker, ViewerWindow};

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the menu bar with the About and Open Folder commands.
pub fn top_bar(ui: &mut Ui, window: &mut ViewerWindow) {
    let menu = window.layout().menu.clone();

    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button(menu.title.as_str(), |ui: &mut Ui| {
            if ui.button(menu.open_folder.text.as_str()).clicked() {
                ui.close_menu();
                if let Some(report) = window.load_folder(&NativeFolderPicker) {
                    log::debug!(
                        "{}: {} of {} images placed, {} undecodable",
                        report.folder.display(),
                        report.placed,
                        report.found,
                        report.failed.len()
                    );
                }
            }
            if ui.button(menu.about.text.as_str()).clicked() {
                ui.close_menu();
                window.show_about();
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Message dialogs
// ---------------------------------------------------------------------------

/// Show the open message box, if any. While it is open the rest of the
/// window does not receive input.
pub fn message_dialog(ctx: &egui::Context, window: &mut ViewerWindow) {
    let Some(dialog) = window.dialog().cloned() else {
        return;
    };

    let mut close = false;
    egui::Modal::new(egui::Id::new("message_dialog")).show(ctx, |ui: &mut Ui| {
        ui.set_max_width(360.0);
        ui.heading(dialog.title.as_str());
        ui.add_space(4.0);
        let text = match dialog.kind {
            DialogKind::Info => RichText::new(&dialog.text),
            DialogKind::Error => RichText::new(&dialog.text).color(Color32::RED),
        };
        ui.label(text);
        ui.add_space(8.0);
        ui.vertical_centered(|ui: &mut Ui| {
            if ui.button("OK").clicked() {
                close = true;
            }
        });
    });

    if close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        window.close_dialog();
    }
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

/// Native folder chooser.
pub struct NativeFolderPicker;

impl FolderPicker for NativeFolderPicker {
    fn pick_folder(&self, title: &str) -> Option<PathBuf> {
        rfd::FileDialog::new().set_title(title).pick_folder()
    }
}
