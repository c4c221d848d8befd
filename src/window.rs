use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use anyhow::Result;

use crate::gallery::pixmap::Pixmap;
use crate::gallery::scan::scan_folder;
use crate::layout::{cell_region_name, Layout, LayoutError, GRID_CELLS};
use crate::ui::clickable_label::ClickableLabel;

pub const ABOUT_TITLE: &str = "About Pokedex";
pub const ABOUT_TEXT: &str = "This is a Pokedex built with egui.\n\n\
                              Select a Pokémon from the grid below to see it enlarged.";
pub const FOLDER_DIALOG_TITLE: &str = "Select Folder";
pub const LOAD_DONE_TITLE: &str = "Load Complete";

// ---------------------------------------------------------------------------
// CellId – position of a label in the thumbnail grid
// ---------------------------------------------------------------------------

/// Zero-based grid position, displayed as its layout name (`poke_1` ..).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId(usize);

impl CellId {
    pub fn new(index: usize) -> Option<Self> {
        (index < GRID_CELLS).then_some(CellId(index))
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&cell_region_name(self.0))
    }
}

// ---------------------------------------------------------------------------
// Dialogs and folder selection
// ---------------------------------------------------------------------------

/// Source of folder selections; `None` means the user cancelled.
pub trait FolderPicker {
    fn pick_folder(&self, title: &str) -> Option<PathBuf>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Info,
    Error,
}

/// A modal message box. At most one is open at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDialog {
    pub kind: DialogKind,
    pub title: String,
    pub text: String,
}

impl MessageDialog {
    pub fn info(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Info,
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn error(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Outcome of loading a folder into the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub folder: PathBuf,
    /// Image files found in the folder, including ones past the last cell.
    pub found: usize,
    /// Cells that received an image.
    pub placed: usize,
    /// Files assigned to a cell that could not be decoded.
    pub failed: Vec<PathBuf>,
}

// ---------------------------------------------------------------------------
// ViewerWindow – grid, enlarged view and the handlers wired to them
// ---------------------------------------------------------------------------

/// The viewer's complete state, independent of rendering.
pub struct ViewerWindow {
    layout: Layout,

    /// Thumbnail labels, one per `poke_N` region.
    cells: [ClickableLabel; GRID_CELLS],

    /// Scaled copy of the last activated thumbnail.
    enlarged: Option<Pixmap>,

    /// Current pixel size of the enlarged view, reported by the renderer.
    enlarged_bounds: [u32; 2],

    /// Open message box, if any.
    dialog: Option<MessageDialog>,

    /// Activations raised by the labels, not yet handled.
    pending: Rc<RefCell<VecDeque<CellId>>>,
}

impl ViewerWindow {
    /// Load the layout resource at `path` and build the window from it.
    pub fn initialize(path: &Path) -> Result<Self, LayoutError> {
        Layout::load(path).map(Self::new)
    }

    pub fn new(layout: Layout) -> Self {
        let pending = Rc::new(RefCell::new(VecDeque::new()));
        let mut cells: [ClickableLabel; GRID_CELLS] =
            std::array::from_fn(|i| ClickableLabel::new(CellId(i)));
        for cell in &mut cells {
            let pending = Rc::clone(&pending);
            cell.connect_activated(move |id| pending.borrow_mut().push_back(*id));
        }

        let enlarged_bounds = layout
            .enlarged
            .min_size
            .map(|[w, h]| [w.round() as u32, h.round() as u32])
            .unwrap_or_default();

        Self {
            layout,
            cells,
            enlarged: None,
            enlarged_bounds,
            dialog: None,
            pending,
        }
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn cell(&self, id: CellId) -> &ClickableLabel {
        &self.cells[id.index()]
    }

    pub fn cells_mut(&mut self) -> &mut [ClickableLabel; GRID_CELLS] {
        &mut self.cells
    }

    pub fn enlarged(&self) -> Option<&Pixmap> {
        self.enlarged.as_ref()
    }

    pub fn enlarged_mut(&mut self) -> Option<&mut Pixmap> {
        self.enlarged.as_mut()
    }

    /// Record the enlarged view's current size in physical pixels.
    pub fn set_enlarged_bounds(&mut self, bounds: [u32; 2]) {
        self.enlarged_bounds = bounds;
    }

    pub fn dialog(&self) -> Option<&MessageDialog> {
        self.dialog.as_ref()
    }

    pub fn close_dialog(&mut self) {
        self.dialog = None;
    }

    /// Open the static About box.
    pub fn show_about(&mut self) {
        self.dialog = Some(MessageDialog::info(ABOUT_TITLE, ABOUT_TEXT));
    }

    /// Ask `picker` for a folder and load its images into the grid.
    ///
    /// Returns `None` when the selection was cancelled or the folder
    /// could not be read; the latter opens an error dialog.
    pub fn load_folder(&mut self, picker: &dyn FolderPicker) -> Option<LoadReport> {
        let Some(folder) = picker.pick_folder(FOLDER_DIALOG_TITLE) else {
            log::debug!("Folder selection cancelled");
            return None;
        };

        match self.load_from(&folder) {
            Ok(report) => Some(report),
            Err(e) => {
                log::error!("Failed to load folder: {e:#}");
                self.dialog = Some(MessageDialog::error(
                    "Could not load folder",
                    format!("{e:#}"),
                ));
                None
            }
        }
    }

    /// Clear the grid and fill it with the images in `folder`, in name order.
    ///
    /// A file that fails to decode leaves its cell empty; later images keep
    /// their own cells.
    pub fn load_from(&mut self, folder: &Path) -> Result<LoadReport> {
        let images = scan_folder(folder)?;

        for cell in &mut self.cells {
            cell.clear();
        }

        let mut placed = 0;
        let mut failed = Vec::new();
        for (cell, path) in self.cells.iter_mut().zip(&images) {
            match Pixmap::open(path) {
                Ok(pixmap) => {
                    cell.set_pixmap(pixmap);
                    placed += 1;
                }
                Err(e) => {
                    log::warn!("Leaving {} empty: {e:#}", cell.id());
                    failed.push(path.clone());
                }
            }
        }

        log::info!(
            "Loaded {placed} of {} images from {}",
            images.len(),
            folder.display()
        );
        self.dialog = Some(MessageDialog::info(
            LOAD_DONE_TITLE,
            format!("Loaded {} photos.", images.len()),
        ));

        Ok(LoadReport {
            folder: folder.to_path_buf(),
            found: images.len(),
            placed,
            failed,
        })
    }

    /// Show the image of cell `id` in the enlarged view. Empty cells are ignored.
    pub fn on_cell_activated(&mut self, id: CellId) {
        let Some(source) = self.cells[id.index()].pixmap() else {
            log::debug!("{id} activated without an image");
            return;
        };

        let scaled = source.scaled_to_fit(self.enlarged_bounds);
        log::debug!(
            "{id} activated: {:?} scaled to {:?}",
            source.size(),
            scaled.size()
        );
        self.enlarged = Some(scaled);
    }

    /// Handle every activation the labels raised since the last call.
    pub fn dispatch_activations(&mut self) {
        loop {
            let next = self.pending.borrow_mut().pop_front();
            match next {
                Some(id) => self.on_cell_activated(id),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::tests::layout_json;
    use eframe::egui::PointerButton;
    use image::{DynamicImage, ImageFormat, RgbImage};
    use tempfile::{tempdir, TempDir};

    struct StubPicker(Option<PathBuf>);

    impl FolderPicker for StubPicker {
        fn pick_folder(&self, _title: &str) -> Option<PathBuf> {
            self.0.clone()
        }
    }

    fn window() -> ViewerWindow {
        ViewerWindow::new(Layout::from_json(&layout_json(None)).expect("valid layout"))
    }

    fn cell(index: usize) -> CellId {
        CellId::new(index).expect("index in range")
    }

    /// Write a `width` x 20 image; the width tells fixtures apart after loading.
    fn write_image(dir: &Path, name: &str, width: u32, format: ImageFormat) {
        DynamicImage::ImageRgb8(RgbImage::new(width, 20))
            .save_with_format(dir.join(name), format)
            .expect("failed to write fixture");
    }

    fn folder_with(files: &[(&str, u32, ImageFormat)]) -> TempDir {
        let dir = tempdir().expect("failed to create temp dir");
        for &(name, width, format) in files {
            write_image(dir.path(), name, width, format);
        }
        dir
    }

    fn cell_widths(window: &ViewerWindow) -> Vec<Option<u32>> {
        (0..GRID_CELLS)
            .map(|i| window.cell(cell(i)).pixmap().map(|p| p.size()[0]))
            .collect()
    }

    fn activate(window: &mut ViewerWindow, index: usize) {
        window.cells_mut()[index].press(PointerButton::Primary);
        window.dispatch_activations();
    }

    #[test]
    fn cell_ids_are_named_after_layout_regions() {
        assert_eq!(cell(0).to_string(), "poke_1");
        assert_eq!(cell(11).to_string(), "poke_12");
        assert!(CellId::new(GRID_CELLS).is_none());
    }

    #[test]
    fn initialize_reads_the_layout_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("layout.json");
        std::fs::write(&path, layout_json(None)).expect("failed to write layout");

        let window = ViewerWindow::initialize(&path).expect("layout should load");
        assert_eq!(window.layout().cells.len(), GRID_CELLS);
        assert!(window.enlarged().is_none());
    }

    #[test]
    fn initialize_fails_without_layout_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let result = ViewerWindow::initialize(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(LayoutError::Open { .. })));
    }

    #[test]
    fn load_filters_sorts_and_counts_candidates() {
        let dir = folder_with(&[
            ("b.png", 11, ImageFormat::Png),
            ("A.JPG", 10, ImageFormat::Jpeg),
            ("c.bmp", 12, ImageFormat::Bmp),
        ]);
        std::fs::write(dir.path().join("note.txt"), "hi").expect("failed to write note");

        let mut window = window();
        let picker = StubPicker(Some(dir.path().to_path_buf()));
        let report = window.load_folder(&picker).expect("folder should load");

        assert_eq!(report.found, 3);
        assert_eq!(report.placed, 3);
        let mut expected = vec![Some(10), Some(11), Some(12)];
        expected.resize(GRID_CELLS, None);
        assert_eq!(cell_widths(&window), expected);

        let dialog = window.dialog().expect("confirmation dialog");
        assert_eq!(dialog.kind, DialogKind::Info);
        assert_eq!(dialog.title, LOAD_DONE_TITLE);
        assert!(dialog.text.contains('3'));
    }

    #[test]
    fn images_past_the_last_cell_are_ignored() {
        let names: Vec<String> = (0..15).map(|i| format!("img_{i:02}.png")).collect();
        let files: Vec<(&str, u32, ImageFormat)> = names
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i as u32 + 1, ImageFormat::Png))
            .collect();
        let dir = folder_with(&files);

        let mut window = window();
        let report = window.load_from(dir.path()).expect("folder should load");

        assert_eq!(report.found, 15);
        assert_eq!(report.placed, GRID_CELLS);
        let expected: Vec<Option<u32>> = (1..=GRID_CELLS as u32).map(Some).collect();
        assert_eq!(cell_widths(&window), expected);
    }

    #[test]
    fn empty_folder_clears_the_grid() {
        let full = folder_with(&[("a.png", 5, ImageFormat::Png), ("b.png", 6, ImageFormat::Png)]);
        let empty = tempdir().expect("failed to create temp dir");

        let mut window = window();
        window.load_from(full.path()).expect("folder should load");
        let report = window.load_from(empty.path()).expect("folder should load");

        assert_eq!(report.found, 0);
        assert!(cell_widths(&window).iter().all(Option::is_none));
        assert!(window.dialog().expect("dialog").text.contains('0'));
    }

    #[test]
    fn undecodable_image_leaves_a_gap() {
        let dir = folder_with(&[("a.png", 5, ImageFormat::Png), ("c.png", 7, ImageFormat::Png)]);
        std::fs::write(dir.path().join("b.png"), b"garbage").expect("failed to write file");

        let mut window = window();
        let report = window.load_from(dir.path()).expect("folder should load");

        assert_eq!(report.found, 3);
        assert_eq!(report.placed, 2);
        assert_eq!(report.failed, vec![dir.path().join("b.png")]);
        assert_eq!(&cell_widths(&window)[..3], &[Some(5), None, Some(7)]);
        assert!(window.dialog().expect("dialog").text.contains('3'));
    }

    #[test]
    fn cancelled_selection_changes_nothing() {
        let dir = folder_with(&[("a.png", 40, ImageFormat::Png)]);
        let mut window = window();
        window.load_from(dir.path()).expect("folder should load");
        window.set_enlarged_bounds([100, 100]);
        activate(&mut window, 0);
        window.close_dialog();

        assert!(window.load_folder(&StubPicker(None)).is_none());

        assert_eq!(cell_widths(&window)[0], Some(40));
        assert_eq!(window.enlarged().map(Pixmap::size), Some([100, 50]));
        assert!(window.dialog().is_none());
    }

    #[test]
    fn unreadable_folder_keeps_the_grid_and_reports_an_error() {
        let dir = folder_with(&[("a.png", 9, ImageFormat::Png)]);
        let mut window = window();
        window.load_from(dir.path()).expect("folder should load");

        let picker = StubPicker(Some(dir.path().join("missing")));
        assert!(window.load_folder(&picker).is_none());

        assert_eq!(cell_widths(&window)[0], Some(9));
        assert_eq!(window.dialog().map(|d| d.kind), Some(DialogKind::Error));
    }

    #[test]
    fn activation_scales_into_the_enlarged_view() {
        let dir = folder_with(&[("a.png", 40, ImageFormat::Png), ("b.png", 20, ImageFormat::Png)]);
        let mut window = window();
        window.load_from(dir.path()).expect("folder should load");

        window.set_enlarged_bounds([200, 100]);
        activate(&mut window, 0);
        assert_eq!(window.enlarged().map(Pixmap::size), Some([200, 100]));

        activate(&mut window, 1);
        assert_eq!(window.enlarged().map(Pixmap::size), Some([100, 100]));

        // the source thumbnail is untouched
        assert_eq!(cell_widths(&window)[1], Some(20));
    }

    #[test]
    fn activating_an_empty_cell_keeps_the_enlarged_view() {
        let dir = folder_with(&[("a.png", 40, ImageFormat::Png)]);
        let mut window = window();
        window.load_from(dir.path()).expect("folder should load");
        window.set_enlarged_bounds([80, 80]);

        activate(&mut window, 0);
        activate(&mut window, 5);
        assert_eq!(window.enlarged().map(Pixmap::size), Some([80, 40]));
    }

    #[test]
    fn non_primary_press_does_not_enlarge() {
        let dir = folder_with(&[("a.png", 40, ImageFormat::Png)]);
        let mut window = window();
        window.load_from(dir.path()).expect("folder should load");

        window.cells_mut()[0].press(PointerButton::Secondary);
        window.dispatch_activations();
        assert!(window.enlarged().is_none());
    }

    #[test]
    fn show_about_only_opens_a_dialog() {
        let mut window = window();
        window.show_about();

        let dialog = window.dialog().expect("about dialog");
        assert_eq!(dialog.title, ABOUT_TITLE);
        assert_eq!(dialog.kind, DialogKind::Info);
        assert!(cell_widths(&window).iter().all(Option::is_none));
        assert!(window.enlarged().is_none());

        window.close_dialog();
        assert!(window.dialog().is_none());
    }
}
