use thiserror::Error;

/// The ceiling advertised on the intake card. Selections above it are
/// rejected whole, keeping whatever batch was already held.
pub const MAX_FILES: usize = 100;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("Можно выбрать не более {max} файлов одновременно (выбрано {count})")]
    TooManyFiles { count: usize, max: usize },
}

/// A user-selected file as reported by the drop payload or the picker.
/// Only the name and size are carried; contents are never read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    pub name: String,
    pub size_bytes: u64,
}

impl FileHandle {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

/// The current selection, in the order the files were handed over.
/// Every new selection replaces the previous one wholesale; batches are
/// never merged across drop or picker events.
#[derive(Debug, Default)]
pub struct IntakeBatch {
    files: Vec<FileHandle>,
}

impl IntakeBatch {
    pub fn new(files: Vec<FileHandle>) -> Result<Self, IntakeError> {
        if files.len() > MAX_FILES {
            return Err(IntakeError::TooManyFiles {
                count: files.len(),
                max: MAX_FILES,
            });
        }
        Ok(Self { files })
    }

    pub fn files(&self) -> &[FileHandle] {
        &self.files
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn clear(&mut self) {
        self.files.clear();
    }
}
