use super::{ScanEvent, ScanRequest};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;
use tracing::debug;

/// Wall-clock length of a simulated scan.
pub const SCAN_DURATION: Duration = Duration::from_millis(3000);

/// The seam a real engine farm would plug into. The UI talks to a backend
/// only through a request and the returned event channel.
pub trait ScanBackend {
    fn start(&self, request: ScanRequest) -> Receiver<ScanEvent>;
}

/// Backend that reports completion after a fixed delay. It never inspects
/// the files and never fails; the timer is the whole scan.
pub struct SimulatedScanner {
    duration: Duration,
}

impl SimulatedScanner {
    pub fn new() -> Self {
        Self {
            duration: SCAN_DURATION,
        }
    }

    #[cfg(test)]
    pub fn with_duration(duration: Duration) -> Self {
        Self { duration }
    }
}

impl Default for SimulatedScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanBackend for SimulatedScanner {
    fn start(&self, request: ScanRequest) -> Receiver<ScanEvent> {
        let (sender, receiver) = channel();
        let duration = self.duration;

        debug!(
            "Simulating scan of {} files over {:?}",
            request.files().len(),
            duration
        );

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                tokio::time::sleep(duration).await;
                // A cleared batch drops the receiver; the late send then
                // fails and the tick goes nowhere.
                sender.send(ScanEvent::Completed).unwrap_or_default();
            });
        });

        receiver
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::FileHandle;
    use std::sync::mpsc::{RecvTimeoutError, TryRecvError};

    fn request() -> ScanRequest {
        ScanRequest::new(vec![FileHandle::new("sample.bin", 4096)])
    }

    #[test]
    fn completes_after_the_delay_not_before() {
        let scanner = SimulatedScanner::with_duration(Duration::from_millis(150));
        let events = scanner.start(request());

        assert_eq!(events.try_recv(), Err(TryRecvError::Empty));
        assert_eq!(
            events.recv_timeout(Duration::from_secs(5)),
            Ok(ScanEvent::Completed)
        );
    }

    #[test]
    fn completes_exactly_once() {
        let scanner = SimulatedScanner::with_duration(Duration::from_millis(10));
        let events = scanner.start(request());

        assert_eq!(
            events.recv_timeout(Duration::from_secs(5)),
            Ok(ScanEvent::Completed)
        );
        // The worker hangs up after its single event.
        assert_eq!(
            events.recv_timeout(Duration::from_millis(500)),
            Err(RecvTimeoutError::Disconnected)
        );
    }

    #[test]
    fn dropping_the_receiver_discards_the_tick() {
        let scanner = SimulatedScanner::with_duration(Duration::from_millis(10));
        let events = scanner.start(request());
        drop(events);
        // Nothing to observe beyond the worker exiting quietly.
        std::thread::sleep(Duration::from_millis(50));
    }
}
