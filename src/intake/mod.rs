mod batch;

pub use batch::{FileHandle, IntakeBatch, IntakeError, MAX_FILES};
