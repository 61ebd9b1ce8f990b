use super::backend::StorageBackend;
use crate::error::{CopyCatError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Stores the document as a single JSON file.
pub struct FsBackend {
    data_file: PathBuf,
}

impl FsBackend {
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(CopyCatError::Io)?;
        }
        Ok(())
    }

    fn parent_dir(&self) -> PathBuf {
        match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl StorageBackend for FsBackend {
    fn read(&self) -> Result<Option<String>> {
        if !self.data_file.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.data_file).map_err(CopyCatError::Io)?;
        Ok(Some(content))
    }

    fn write(&self, document: &str) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let stem = self
            .data_file
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("data");

        // Atomic write
        let tmp_file = dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));
        if let Err(e) = fs::write(&tmp_file, document) {
            let _ = fs::remove_file(&tmp_file);
            return Err(CopyCatError::Io(e));
        }
        if let Err(e) = fs::rename(&tmp_file, &self.data_file) {
            let _ = fs::remove_file(&tmp_file);
            return Err(CopyCatError::Io(e));
        }

        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.data_file.clone()
    }
}
