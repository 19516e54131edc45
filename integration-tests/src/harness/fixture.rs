use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// An access log written to a private temp directory for one test.
pub struct LogFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl LogFixture {
    pub fn new(contents: &str) -> Self {
        Self::from_bytes(contents.as_bytes())
    }

    pub fn from_bytes(contents: &[u8]) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("server.log");
        fs::write(&path, contents).expect("failed to write log fixture");

        Self { _dir: dir, path }
    }

    /// A path inside a fresh temp directory that does not exist.
    pub fn missing() -> (TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("missing.log");
        (dir, path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
