use crate::intake::{FileHandle, IntakeBatch};
use crate::scan::{ScanBackend, ScanEvent, ScanRequest, ScanSession};
use std::sync::mpsc::TryRecvError;
use tracing::{debug, info, warn};

/// Everything the interactive card owns: the current selection, the
/// drag-hover flag and the scan session, if one is running. Lives for the
/// duration of the window and is never persisted.
#[derive(Default)]
pub struct AppState {
    batch: IntakeBatch,
    scan: Option<ScanSession>,
    pub is_dragging: bool,
    pub error_message: Option<String>,
}

impl AppState {
    pub fn batch(&self) -> &IntakeBatch {
        &self.batch
    }

    pub fn scan(&self) -> Option<&ScanSession> {
        self.scan.as_ref()
    }

    pub fn is_scanning(&self) -> bool {
        self.scan.is_some()
    }

    /// Replace the selection wholesale. An empty selection is a no-op so a
    /// dismissed picker never wipes a batch the user already built up;
    /// an oversized one is rejected whole and surfaced as an error.
    pub fn replace_batch(&mut self, files: Vec<FileHandle>) {
        if files.is_empty() {
            debug!(
                "Ignoring empty selection, keeping {} files",
                self.batch.len()
            );
            return;
        }

        match IntakeBatch::new(files) {
            Ok(batch) => {
                info!("Selection replaced: {} files", batch.len());
                self.batch = batch;
                self.error_message = None;
            }
            Err(e) => {
                warn!("Selection rejected: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Empty the batch and drop any running session. Dropping the session
    /// disconnects the timer channel, so a pending tick cannot land later.
    pub fn clear(&mut self) {
        if self.scan.take().is_some() {
            info!("Active scan cancelled by clear");
        }
        self.batch.clear();
        self.error_message = None;
    }

    pub fn start_scan(&mut self, backend: &dyn ScanBackend) {
        if self.batch.is_empty() || self.scan.is_some() {
            return;
        }

        let request = ScanRequest::new(self.batch.files().to_vec());
        info!("Scan started: {} files", request.files().len());
        self.scan = Some(ScanSession::new(backend.start(request)));
    }

    /// Drain the scan channel without blocking. Called once per frame.
    pub fn poll_scan(&mut self) {
        let finished = match &self.scan {
            Some(session) => match session.try_event() {
                Ok(ScanEvent::Completed) => {
                    info!("Scan finished");
                    true
                }
                Err(TryRecvError::Empty) => false,
                Err(TryRecvError::Disconnected) => {
                    warn!("Scan backend went away without completing");
                    true
                }
            },
            None => false,
        };

        if finished {
            self.scan = None;
        }
    }

    pub fn selection_heading(&self) -> String {
        format!("Выбрано файлов: {}", self.batch.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::SimulatedScanner;
    use std::time::{Duration, Instant};

    fn handles(count: usize) -> Vec<FileHandle> {
        (0..count)
            .map(|i| FileHandle::new(format!("file-{i}.bin"), 1024))
            .collect()
    }

    fn wait_until_idle(state: &mut AppState) {
        let deadline = Instant::now() + Duration::from_secs(5);
        while state.is_scanning() {
            assert!(Instant::now() < deadline, "scan never finished");
            std::thread::sleep(Duration::from_millis(10));
            state.poll_scan();
        }
    }

    #[test]
    fn each_selection_replaces_the_previous_one() {
        let mut state = AppState::default();

        state.replace_batch(handles(3));
        assert_eq!(state.batch().len(), 3);

        state.replace_batch(vec![FileHandle::new("other.doc", 100)]);
        assert_eq!(state.batch().len(), 1);
        assert_eq!(state.batch().files()[0].name, "other.doc");
    }

    #[test]
    fn empty_selection_keeps_the_current_batch() {
        let mut state = AppState::default();
        state.replace_batch(handles(2));

        state.replace_batch(Vec::new());
        assert_eq!(state.batch().len(), 2);
    }

    #[test]
    fn oversized_selection_is_rejected_whole() {
        let mut state = AppState::default();
        state.replace_batch(handles(2));

        state.replace_batch(handles(crate::intake::MAX_FILES + 1));
        assert_eq!(state.batch().len(), 2);
        assert!(state.error_message.is_some());

        // A valid follow-up selection clears the error again.
        state.replace_batch(handles(1));
        assert!(state.error_message.is_none());
    }

    #[test]
    fn scan_needs_a_non_empty_batch() {
        let mut state = AppState::default();
        let scanner = SimulatedScanner::with_duration(Duration::from_millis(10));

        state.start_scan(&scanner);
        assert!(!state.is_scanning());
    }

    #[test]
    fn scan_returns_to_idle_after_the_delay() {
        let mut state = AppState::default();
        state.replace_batch(handles(1));

        let scanner = SimulatedScanner::with_duration(Duration::from_millis(150));
        state.start_scan(&scanner);
        assert!(state.is_scanning());

        // The tick cannot arrive before the delay has elapsed.
        state.poll_scan();
        assert!(state.is_scanning());

        wait_until_idle(&mut state);
        // The batch survives a completed scan.
        assert_eq!(state.batch().len(), 1);
    }

    #[test]
    fn clearing_resets_batch_and_scan() {
        let mut state = AppState::default();
        state.replace_batch(handles(2));

        let scanner = SimulatedScanner::with_duration(Duration::from_millis(30));
        state.start_scan(&scanner);
        state.clear();

        assert!(state.batch().is_empty());
        assert!(!state.is_scanning());
    }

    #[test]
    fn clearing_mid_scan_cancels_the_timer() {
        let mut state = AppState::default();
        state.replace_batch(handles(1));

        let scanner = SimulatedScanner::with_duration(Duration::from_millis(20));
        state.start_scan(&scanner);
        state.clear();

        // Give the timer plenty of time to fire into the void.
        std::thread::sleep(Duration::from_millis(100));
        state.poll_scan();

        assert!(!state.is_scanning());
        assert!(state.batch().is_empty());
    }

    #[test]
    fn starting_while_scanning_is_ignored() {
        let mut state = AppState::default();
        state.replace_batch(handles(1));

        let scanner = SimulatedScanner::with_duration(Duration::from_millis(30));
        state.start_scan(&scanner);
        state.start_scan(&scanner);
        assert!(state.is_scanning());

        wait_until_idle(&mut state);
        // Only the first session's tick exists; nothing flips us back.
        std::thread::sleep(Duration::from_millis(60));
        state.poll_scan();
        assert!(!state.is_scanning());
    }

    #[test]
    fn selection_heading_counts_files() {
        let mut state = AppState::default();
        state.replace_batch(handles(3));
        assert_eq!(state.selection_heading(), "Выбрано файлов: 3");
    }
}
