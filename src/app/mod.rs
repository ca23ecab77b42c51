mod state;
mod ui;

use crate::intake::FileHandle;
use crate::scan::SimulatedScanner;
use eframe::{egui, App};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub use state::AppState;

/// Sections the header navigation can jump to. "Документация" has no
/// matching section on the page, same as on the web version, so it is
/// not listed here.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Features,
    About,
    Contact,
}

pub struct VirusGuardApp {
    state: AppState,
    scanner: SimulatedScanner,
    pending_scroll: Option<Section>,
}

impl VirusGuardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        info!("Initializing VirusGuard");
        Self {
            state: AppState::default(),
            scanner: SimulatedScanner::new(),
            pending_scroll: None,
        }
    }

    /// Mirror the platform drag state into the card highlight and take over
    /// any files dropped onto the window this frame. eframe already keeps
    /// the OS from opening dropped files itself.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        self.state.is_dragging = ctx.input(|i| !i.raw.hovered_files.is_empty());

        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if dropped.is_empty() {
            return;
        }

        info!("Received {} dropped files", dropped.len());
        let files = dropped.iter().map(file_from_dropped).collect();
        self.state.replace_batch(files);
    }

    fn pick_files(&mut self) {
        match rfd::FileDialog::new().pick_files() {
            Some(paths) => {
                let files = paths.iter().map(|p| file_from_path(p)).collect();
                self.state.replace_batch(files);
            }
            None => debug!("File dialog dismissed without a selection"),
        }
    }

    fn request_scroll(&mut self, section: Section) {
        self.pending_scroll = Some(section);
    }

    fn take_scroll(&mut self, section: Section) -> bool {
        if self.pending_scroll == Some(section) {
            self.pending_scroll = None;
            true
        } else {
            false
        }
    }
}

impl App for VirusGuardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        self.state.poll_scan();
        if self.state.is_scanning() {
            // Keep frames coming so the completion tick is picked up even
            // while the user is idle.
            ctx.request_repaint();
        }
        self.render(ctx);
    }
}

fn file_from_path(path: &Path) -> FileHandle {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    // A file we cannot stat is still accepted; it just shows as 0.00 KB.
    let size_bytes = fs::metadata(path).map(|m| m.len()).unwrap_or(0);
    FileHandle::new(name, size_bytes)
}

fn file_from_dropped(dropped: &egui::DroppedFile) -> FileHandle {
    match &dropped.path {
        Some(path) => file_from_path(path),
        None => FileHandle::new(
            dropped.name.clone(),
            dropped.bytes.as_ref().map_or(0, |b| b.len() as u64),
        ),
    }
}
