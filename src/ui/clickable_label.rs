use eframe::egui::{self, pos2, Color32, CursorIcon, PointerButton, Rect, Response, Sense, Ui, Vec2};

use crate::gallery::pixmap::Pixmap;
use crate::ui::signal::Signal;
use crate::window::CellId;

const IMAGE_MARGIN: f32 = 4.0;

// ---------------------------------------------------------------------------
// ClickableLabel – image surface that reports primary-button presses
// ---------------------------------------------------------------------------

/// An image label that raises `activated` when pressed with the primary button.
pub struct ClickableLabel {
    id: CellId,
    pixmap: Option<Pixmap>,
    activated: Signal<CellId>,
}

impl ClickableLabel {
    pub fn new(id: CellId) -> Self {
        Self {
            id,
            pixmap: None,
            activated: Signal::default(),
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn pixmap(&self) -> Option<&Pixmap> {
        self.pixmap.as_ref()
    }

    pub fn set_pixmap(&mut self, pixmap: Pixmap) {
        self.pixmap = Some(pixmap);
    }

    pub fn clear(&mut self) {
        self.pixmap = None;
    }

    /// Subscribe to primary-button presses on this label.
    pub fn connect_activated(&mut self, handler: impl FnMut(&CellId) + 'static) {
        self.activated.connect(handler);
    }

    /// Handle a pointer press. Only the primary button activates the label.
    pub fn press(&mut self, button: PointerButton) {
        if button == PointerButton::Primary {
            self.activated.emit(&self.id);
        }
    }

    /// Draw the label into a `size` box and feed it this frame's presses.
    pub fn show(&mut self, ui: &mut Ui, size: Vec2) -> Response {
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let visuals = ui.style().interact(&response);
            let painter = ui.painter();
            painter.rect_filled(rect, 4.0, visuals.bg_stroke.color);
            painter.rect_filled(
                rect.shrink(visuals.bg_stroke.width.max(1.0)),
                4.0,
                visuals.weak_bg_fill,
            );

            if let Some(pixmap) = &mut self.pixmap {
                let texture = pixmap.texture(ui.ctx(), &self.id.to_string());
                let inner = rect.shrink(IMAGE_MARGIN);
                let image_size = texture.size_vec2();
                let scale = (inner.width() / image_size.x).min(inner.height() / image_size.y);
                ui.painter().image(
                    texture.id(),
                    Rect::from_center_size(inner.center(), image_size * scale),
                    Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                    Color32::WHITE,
                );
            }
        }

        let presses: Vec<(egui::Pos2, PointerButton)> = ui.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::PointerButton {
                        pos,
                        button,
                        pressed: true,
                        ..
                    } if rect.contains(*pos) => Some((*pos, *button)),
                    _ => None,
                })
                .collect()
        });
        // Presses landing on a window drawn above the grid belong to that window.
        let layer = ui.layer_id();
        for (pos, button) in presses {
            if ui.ctx().layer_id_at(pos) == Some(layer) {
                self.press(button);
            }
        }

        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}
