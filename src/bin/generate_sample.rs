use std::path::PathBuf;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// Sample creatures: (file name, width, height, base colour).
const SAMPLES: [(&str, u32, u32, [u8; 3]); 15] = [
    ("bulbasaur.png", 320, 320, [98, 190, 140]),
    ("ivysaur.png", 320, 240, [72, 160, 120]),
    ("venusaur.jpg", 480, 320, [40, 130, 90]),
    ("charmander.png", 240, 320, [240, 128, 48]),
    ("charmeleon.jpg", 320, 320, [220, 90, 40]),
    ("charizard.bmp", 400, 300, [240, 80, 32]),
    ("squirtle.png", 300, 300, [104, 144, 240]),
    ("wartortle.JPG", 256, 384, [80, 120, 220]),
    ("blastoise.png", 420, 280, [50, 90, 200]),
    ("caterpie.bmp", 200, 200, [120, 200, 80]),
    ("metapod.jpeg", 320, 200, [100, 170, 60]),
    ("butterfree.png", 360, 300, [168, 144, 240]),
    ("weedle.png", 300, 220, [200, 160, 80]),
    ("kakuna.bmp", 220, 300, [230, 200, 60]),
    ("beedrill.jpg", 320, 320, [240, 220, 90]),
];

/// Diagonal gradient from `base` to a darker shade, with a lighter disc in the middle.
fn render(width: u32, height: u32, base: [u8; 3]) -> RgbImage {
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let radius = width.min(height) as f32 / 3.0;

    RgbImage::from_fn(width, height, |x, y| {
        let t = (x + y) as f32 / (width + height) as f32;
        let shade = 1.0 - 0.5 * t;
        let dist = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
        let lift = if dist < radius { 60.0 } else { 0.0 };
        Rgb(base.map(|c| (c as f32 * shade + lift).min(255.0) as u8))
    })
}

fn main() {
    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_images"));
    std::fs::create_dir_all(&output_dir).expect("Failed to create output folder");

    for (name, width, height, base) in SAMPLES {
        let path = output_dir.join(name);
        let format = ImageFormat::from_path(&path).expect("Sample names carry known extensions");
        DynamicImage::ImageRgb8(render(width, height, base))
            .save_with_format(&path, format)
            .expect("Failed to write sample image");
    }

    // One file that looks like an image but is not, to show the gap it leaves.
    std::fs::write(output_dir.join("missingno.png"), b"not an image")
        .expect("Failed to write placeholder");
    std::fs::write(output_dir.join("README.txt"), "Sample images for the Pokedex viewer.\n")
        .expect("Failed to write readme");

    println!(
        "Wrote {} sample images to {}",
        SAMPLES.len() + 1,
        output_dir.display()
    );
}
