/// Gallery layer: finding images in a folder and holding decoded pixels.
///
/// Architecture:
/// ```text
///   chosen folder
///        │
///        ▼
///   ┌──────────┐
///   │   scan    │  list entries → filter by extension → sort by name
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  pixmap   │  decode file → RGBA pixels, scale to fit, upload texture
///   └──────────┘
/// ```

pub mod pixmap;
pub mod scan;
