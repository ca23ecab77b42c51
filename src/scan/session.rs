use super::ScanEvent;
use std::sync::mpsc::{Receiver, TryRecvError};

/// An in-progress scan. Owns the receiving half of the backend's event
/// channel; dropping the session disconnects it, which is how clearing the
/// batch cancels a pending timer.
///
/// The displayed progress and engine count are fixed for the whole session.
/// Nothing here tracks real work.
pub struct ScanSession {
    events: Receiver<ScanEvent>,
}

impl ScanSession {
    pub const DISPLAY_PROGRESS_PERCENT: u8 = 67;
    pub const ENGINE_COUNT: u32 = 12;

    pub fn new(events: Receiver<ScanEvent>) -> Self {
        Self { events }
    }

    pub fn try_event(&self) -> Result<ScanEvent, TryRecvError> {
        self.events.try_recv()
    }

    pub fn progress_fraction(&self) -> f32 {
        f32::from(Self::DISPLAY_PROGRESS_PERCENT) / 100.0
    }

    pub fn progress_label(&self) -> String {
        format!("{}%", Self::DISPLAY_PROGRESS_PERCENT)
    }

    pub fn engines_label(&self) -> String {
        format!(
            "Проверка с использованием {} антивирусных движков",
            Self::ENGINE_COUNT
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    #[test]
    fn progress_stays_constant_while_waiting() {
        let (sender, receiver) = channel();
        let session = ScanSession::new(receiver);

        assert_eq!(session.progress_label(), "67%");
        assert_eq!(session.try_event(), Err(TryRecvError::Empty));
        // Still mid-scan, still the same number.
        assert_eq!(session.progress_label(), "67%");
        assert_eq!(session.progress_fraction(), 0.67);

        drop(sender);
    }

    #[test]
    fn engines_line_names_the_fixed_engine_count() {
        let (_sender, receiver) = channel();
        let session = ScanSession::new(receiver);
        assert_eq!(
            session.engines_label(),
            "Проверка с использованием 12 антивирусных движков"
        );
    }
}
