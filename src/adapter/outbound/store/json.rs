//! JSON file cursor store.
//!
//! Keeps the [`TrackingState`] in a single JSON document on local disk.
//! Writes go through a temp file and a rename so a crash mid-write never
//! leaves a truncated state file behind.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::domain::TrackingState;
use crate::error::StoreError;
use crate::port::StateStore;

/// [`StateStore`] backed by a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self) -> Option<Map<String, Value>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No state file, starting fresh");
                return None;
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read state file");
                return None;
            }
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => Some(map),
            Ok(_) => {
                warn!(path = %self.path.display(), "State file is not a JSON object");
                None
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Corrupt state file");
                None
            }
        }
    }
}

/// Drop legacy cursor fields. Returns `true` when any were present.
fn migrate(map: &mut Map<String, Value>) -> bool {
    let mut migrated = false;
    for field in TrackingState::LEGACY_MARKER_FIELDS {
        if map.remove(field).is_some() {
            migrated = true;
        }
    }
    if migrated && !map.contains_key("last_marker") {
        map.insert("last_marker".into(), Value::Null);
    }
    migrated
}

impl StateStore for JsonFileStore {
    fn load(&self) -> TrackingState {
        let Some(mut map) = self.read_object() else {
            return TrackingState::default();
        };

        let migrated = migrate(&mut map);

        let state = match serde_json::from_value::<TrackingState>(Value::Object(map)) {
            Ok(state) => state,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Invalid state file contents");
                return TrackingState::default();
            }
        };

        if migrated {
            info!(path = %self.path.display(), "Migrated legacy state file");
            if let Err(e) = self.save(&state) {
                warn!(error = %e, "Failed to write migrated state file");
            }
        }

        state
    }

    fn save(&self, state: &TrackingState) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(state).map_err(StoreError::Encode)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(StoreError::Write)?;
            }
        }

        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).map_err(StoreError::Write)?;

        let cleanup_and_err = |e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::Write(e)
        };

        file.write_all(json.as_bytes()).map_err(cleanup_and_err)?;
        file.sync_all().map_err(cleanup_and_err)?;
        fs::rename(&temp_path, &self.path).map_err(cleanup_and_err)?;

        debug!(path = %self.path.display(), "State saved");
        Ok(())
    }
}
