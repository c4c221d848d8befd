use eframe::egui::{self, pos2, vec2, Color32, Rect, Sense, Ui};
use egui_extras::{Size, StripBuilder};

use crate::window::ViewerWindow;

// ---------------------------------------------------------------------------
// Central panel: enlarged view above the thumbnail grid
// ---------------------------------------------------------------------------

/// Render the enlarged view and the grid, then handle this frame's activations.
pub fn viewer(ui: &mut Ui, window: &mut ViewerWindow) {
    let grid = window.layout().grid.clone();
    let rows = window.cells_mut().len().div_ceil(grid.columns);
    let grid_height = rows as f32 * grid.cell_size[1] + (rows - 1) as f32 * grid.spacing;
    let min_enlarged_height = window
        .layout()
        .enlarged
        .min_size
        .map_or(120.0, |size| size[1]);

    StripBuilder::new(ui)
        .size(Size::remainder().at_least(min_enlarged_height))
        .size(Size::exact(grid_height + grid.spacing))
        .vertical(|mut strip| {
            strip.cell(|ui: &mut Ui| enlarged_view(ui, window));
            strip.cell(|ui: &mut Ui| {
                ui.add_space(grid.spacing);
                egui::Grid::new("thumbnail_grid")
                    .spacing([grid.spacing, grid.spacing])
                    .show(ui, |ui: &mut Ui| {
                        let size = vec2(grid.cell_size[0], grid.cell_size[1]);
                        for (i, cell) in window.cells_mut().iter_mut().enumerate() {
                            cell.show(ui, size);
                            if (i + 1) % grid.columns == 0 {
                                ui.end_row();
                            }
                        }
                    });
            });
        });

    window.dispatch_activations();
}

/// Paint the enlarged image centred in the available space and report the
/// space's pixel size back to the window.
fn enlarged_view(ui: &mut Ui, window: &mut ViewerWindow) {
    let (rect, _) = ui.allocate_exact_size(ui.available_size(), Sense::hover());
    let pixels_per_point = ui.ctx().pixels_per_point();
    window.set_enlarged_bounds([
        (rect.width() * pixels_per_point).round() as u32,
        (rect.height() * pixels_per_point).round() as u32,
    ]);

    ui.painter()
        .rect_filled(rect, 4.0, ui.visuals().extreme_bg_color);

    let Some(pixmap) = window.enlarged_mut() else {
        return;
    };
    let texture = pixmap.texture(ui.ctx(), "foto_grande");
    let size = texture.size_vec2() / pixels_per_point;
    ui.painter().image(
        texture.id(),
        Rect::from_center_size(rect.center(), size),
        Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
        Color32::WHITE,
    );
}
