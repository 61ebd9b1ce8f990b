use super::backend::StorageBackend;
use crate::error::{CopyCatError, Result};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since copycat is single-threaded.
/// This avoids the overhead of `RwLock` while still allowing the
/// `StorageBackend` trait to use `&self` for all methods.
#[derive(Default)]
pub struct MemBackend {
    document: RefCell<Option<String>>,
    writes: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw document already stored, as if a previous session wrote it.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: RefCell::new(Some(document.into())),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// The currently stored document, if any.
    pub fn document(&self) -> Option<String> {
        self.document.borrow().clone()
    }

    /// Number of successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl StorageBackend for MemBackend {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.document.borrow().clone())
    }

    fn write(&self, document: &str) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(CopyCatError::Store("Simulated write error".to_string()));
        }
        *self.document.borrow_mut() = Some(document.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://sentences.json")
    }
}
