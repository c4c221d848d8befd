use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Number of thumbnail cells the window always shows.
pub const GRID_CELLS: usize = 12;

/// Fixed location of the layout resource, relative to the working directory.
pub const LAYOUT_PATH: &str = "pokedex_layout.json";

pub const ABOUT_ACTION: &str = "actionAbout";
pub const OPEN_FOLDER_ACTION: &str = "actionGuardar";
pub const ENLARGED_REGION: &str = "foto_grande";

/// Name of the grid cell at zero-based `index` (`poke_1` .. `poke_12`).
pub fn cell_region_name(index: usize) -> String {
    format!("poke_{}", index + 1)
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("could not open layout file {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid layout definition")]
    Parse(#[from] serde_json::Error),

    #[error("layout has no region named `{0}`")]
    MissingRegion(String),

    #[error("layout has no menu action named `{0}`")]
    MissingAction(String),

    #[error("grid must have at least one column")]
    InvalidGrid,
}

// ---------------------------------------------------------------------------
// On-disk format
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawLayout {
    window: WindowSpec,
    menu: RawMenu,
    regions: Vec<RegionSpec>,
    grid: GridSpec,
}

#[derive(Debug, Deserialize)]
struct RawMenu {
    title: String,
    actions: Vec<ActionSpec>,
}

// ---------------------------------------------------------------------------
// Typed layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WindowSpec {
    pub title: String,
    #[serde(default)]
    pub position: Option<[f32; 2]>,
    pub size: [f32; 2],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ActionSpec {
    pub name: String,
    pub text: String,
}

/// A named display region. `min_size` is in points.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegionSpec {
    pub name: String,
    #[serde(default)]
    pub min_size: Option<[f32; 2]>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GridSpec {
    pub columns: usize,
    #[serde(default = "default_spacing")]
    pub spacing: f32,
    pub cell_size: [f32; 2],
}

fn default_spacing() -> f32 {
    6.0
}

#[derive(Debug, Clone, PartialEq)]
pub struct MenuSpec {
    pub title: String,
    pub about: ActionSpec,
    pub open_folder: ActionSpec,
}

/// The window layout with every widget the viewer needs resolved up front.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub window: WindowSpec,
    pub menu: MenuSpec,
    pub enlarged: RegionSpec,
    pub cells: [RegionSpec; GRID_CELLS],
    pub grid: GridSpec,
}

impl Layout {
    /// Read and resolve the layout resource at `path`.
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let text = std::fs::read_to_string(path).map_err(|source| LayoutError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let layout = Self::from_json(&text)?;
        log::info!("Loaded layout from {}", path.display());
        Ok(layout)
    }

    pub fn from_json(text: &str) -> Result<Self, LayoutError> {
        let raw: RawLayout = serde_json::from_str(text)?;

        if raw.grid.columns == 0 {
            return Err(LayoutError::InvalidGrid);
        }

        let find_action = |name: &str| {
            raw.menu
                .actions
                .iter()
                .find(|a| a.name == name)
                .cloned()
                .ok_or_else(|| LayoutError::MissingAction(name.to_string()))
        };
        let find_region = |name: &str| {
            raw.regions
                .iter()
                .find(|r| r.name == name)
                .cloned()
                .ok_or_else(|| LayoutError::MissingRegion(name.to_string()))
        };

        let menu = MenuSpec {
            title: raw.menu.title.clone(),
            about: find_action(ABOUT_ACTION)?,
            open_folder: find_action(OPEN_FOLDER_ACTION)?,
        };
        let enlarged = find_region(ENLARGED_REGION)?;

        let cells = (0..GRID_CELLS)
            .map(|i| find_region(&cell_region_name(i)))
            .collect::<Result<Vec<_>, _>>()?;
        let cells: [RegionSpec; GRID_CELLS] = cells
            .try_into()
            .map_err(|_| LayoutError::MissingRegion(cell_region_name(GRID_CELLS - 1)))?;

        Ok(Layout {
            window: raw.window,
            menu,
            enlarged,
            cells,
            grid: raw.grid,
        })
    }
}
