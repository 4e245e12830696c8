//! Best score persistence
//!
//! The best score is a single decimal integer in a text file. Reading never
//! fails the game: a missing file means 0, and the caller decides what to do
//! with a corrupt one. Writes replace the whole file atomically.

pub mod atomic_write;

use std::cell::RefCell;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

pub use atomic_write::atomic_write;

/// Failure reading or writing the best score
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Parse { contents: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "best score I/O failed: {e}"),
            Self::Parse { contents } => {
                write!(f, "best score is not a non-negative integer: {contents:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Parse stored text; surrounding whitespace is tolerated
pub fn parse_best(contents: &str) -> Result<u64, StoreError> {
    contents.trim().parse::<u64>().map_err(|_| StoreError::Parse {
        contents: contents.to_string(),
    })
}

/// Storage for the single best-score scalar
pub trait ScoreStore {
    /// Read the stored best score; `Ok(0)` when nothing has been stored yet
    fn load(&mut self) -> Result<u64, StoreError>;

    /// Replace the stored best score
    fn save(&mut self, best: u64) -> Result<(), StoreError>;
}

/// Text file store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScoreStore for FileStore {
    fn load(&mut self) -> Result<u64, StoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => parse_best(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No best score at {}, starting at 0", self.path.display());
                Ok(0)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        atomic_write(&self.path, best.to_string().as_bytes())?;
        log::info!("Best score {} saved to {}", best, self.path.display());
        Ok(())
    }
}

/// In-memory store; clones share the same slot
///
/// Dropping a game and building a new one over a clone behaves like a
/// process restart against the same file.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with raw contents, as if read from disk
    pub fn with_contents(contents: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(contents.to_string()))),
        }
    }

    /// Raw stored text, if anything has been written
    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl ScoreStore for MemoryStore {
    fn load(&mut self) -> Result<u64, StoreError> {
        match self.slot.borrow().as_deref() {
            Some(contents) => parse_best(contents),
            None => Ok(0),
        }
    }

    fn save(&mut self, best: u64) -> Result<(), StoreError> {
        *self.slot.borrow_mut() = Some(best.to_string());
        Ok(())
    }
}
