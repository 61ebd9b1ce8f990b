use crate::api::CopyCatApi;
use crate::init::DATA_FILE_NAME;
use crate::store::fs_backend::FsBackend;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    // We keep _temp_dir to ensure the directory is not dropped until the test is done
    pub _temp_dir: TempDir,
    pub data_file: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_file = temp_dir.path().join(DATA_FILE_NAME);
        Self {
            _temp_dir: temp_dir,
            data_file,
        }
    }

    pub fn backend(&self) -> FsBackend {
        FsBackend::new(self.data_file.clone())
    }

    /// A fresh API over the data file, as a new process would see it.
    pub fn api(&self) -> CopyCatApi<FsBackend> {
        CopyCatApi::load(self.backend())
    }

    pub fn write_raw(&self, content: &str) {
        std::fs::write(&self.data_file, content).expect("failed to seed data file");
    }

    pub fn read_raw(&self) -> String {
        std::fs::read_to_string(&self.data_file).expect("failed to read data file")
    }
}
