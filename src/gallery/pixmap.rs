use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use eframe::egui::{self, ColorImage, TextureHandle, TextureOptions};
use image::imageops::FilterType;
use image::{ImageReader, RgbaImage};

// ---------------------------------------------------------------------------
// Pixmap – decoded image shown by a label
// ---------------------------------------------------------------------------

/// Decoded RGBA pixels plus the GPU texture built from them on first paint.
///
/// Cloning is cheap: pixels are shared and the texture handle is
/// reference counted.
#[derive(Clone)]
pub struct Pixmap {
    image: Arc<RgbaImage>,
    texture: Option<TextureHandle>,
}

impl Pixmap {
    /// Decode the file at `path`, sniffing the format from its contents.
    pub fn open(path: &Path) -> Result<Self> {
        let image = ImageReader::open(path)
            .with_context(|| format!("opening {}", path.display()))?
            .with_guessed_format()
            .with_context(|| format!("reading {}", path.display()))?
            .decode()
            .with_context(|| format!("decoding {}", path.display()))?;
        Ok(Self::from_rgba(image.into_rgba8()))
    }

    pub fn from_rgba(image: RgbaImage) -> Self {
        Self {
            image: Arc::new(image),
            texture: None,
        }
    }

    /// Width and height in pixels.
    pub fn size(&self) -> [u32; 2] {
        [self.image.width(), self.image.height()]
    }

    /// A resampled copy that fits inside `bounds` with the aspect ratio kept.
    pub fn scaled_to_fit(&self, bounds: [u32; 2]) -> Pixmap {
        let [w, h] = fit_within(self.size(), bounds);
        Pixmap::from_rgba(image::imageops::resize(
            self.image.as_ref(),
            w,
            h,
            FilterType::Lanczos3,
        ))
    }

    /// Texture for painting, uploaded on the first call.
    pub fn texture(&mut self, ctx: &egui::Context, name: &str) -> &TextureHandle {
        self.texture.get_or_insert_with(|| {
            let size = [self.image.width() as usize, self.image.height() as usize];
            let color_image = ColorImage::from_rgba_unmultiplied(size, self.image.as_raw());
            ctx.load_texture(name, color_image, TextureOptions::LINEAR)
        })
    }
}

/// Largest size with the aspect ratio of `src` that fits inside `bounds`.
///
/// One side always matches the bound exactly, the other is truncated.
/// Neither side drops below one pixel.
pub fn fit_within(src: [u32; 2], bounds: [u32; 2]) -> [u32; 2] {
    let [sw, sh] = src.map(|v| u64::from(v.max(1)));
    let [bw, bh] = bounds.map(|v| u64::from(v.max(1)));

    let width_at_full_height = bh * sw / sh;
    let (w, h) = if width_at_full_height <= bw {
        (width_at_full_height, bh)
    } else {
        (bw, bw * sh / sw)
    };
    [w.max(1) as u32, h.max(1) as u32]
}
