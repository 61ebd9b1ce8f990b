use crate::error::Result;
use std::path::PathBuf;

/// Raw persistence for the card document.
///
/// Backends only move the serialized document around; parsing, migration and
/// the column model live in [`super::card_store::CardStore`].
pub trait StorageBackend {
    /// Read the stored document.
    /// Returns Ok(None) when nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored document.
    /// MUST be atomic (e.g. write to tmp then rename) so a failed write leaves
    /// the previous document intact.
    fn write(&self, document: &str) -> Result<()>;

    /// Where the document lives. For FsBackend this is the real path,
    /// for MemBackend a virtual one.
    fn location(&self) -> PathBuf;
}
