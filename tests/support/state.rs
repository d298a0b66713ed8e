use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// A state file inside a temporary directory.
pub struct TempState {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TempState {
    /// An empty directory; the state file does not exist yet.
    pub fn empty() -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join("tracking_data.json");
        Self { _dir: dir, path }
    }

    /// A state file pre-populated with `json`.
    pub fn with_contents(json: &str) -> Self {
        let state = Self::empty();
        fs::write(&state.path, json).expect("write state file");
        state
    }

    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).expect("read state file")
    }

    pub fn read_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.read()).expect("state file is JSON")
    }
}
