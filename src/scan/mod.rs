mod session;
mod simulator;
mod types;

pub use session::ScanSession;
pub use simulator::{ScanBackend, SimulatedScanner};
pub use types::{ScanEvent, ScanRequest};
