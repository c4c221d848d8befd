use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// File extensions (lower-case, without the dot) the grid accepts.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "bmp"];

/// Whether a file name ends in one of [`SUPPORTED_EXTENSIONS`], ignoring case.
pub fn is_supported_image(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    SUPPORTED_EXTENSIONS
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")))
}

/// List the immediate entries of `dir` whose names look like images,
/// sorted by file name.
///
/// Only the name is checked here; whether the file actually decodes is
/// decided later when it is assigned to a cell.
pub fn scan_folder(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries =
        std::fs::read_dir(dir).with_context(|| format!("reading folder {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let name = entry.file_name();
        if is_supported_image(&name.to_string_lossy()) {
            names.push(name);
        }
    }
    names.sort();

    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}
