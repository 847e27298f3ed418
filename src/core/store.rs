//! Persistence of animations, one JSON file per name.

use super::error::StoreError;
use super::model::AnimationRecord;
use crate::utils::file_helper;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File extension of saved animations.
pub const ANIMATION_EXTENSION: &str = "leda";

/// Storage of named animation records.
pub trait FileStore {
    /// Names of all saved animations, sorted.
    fn list_names(&self) -> Result<Vec<String>, StoreError>;
    fn load(&self, name: &str) -> Result<AnimationRecord, StoreError>;
    /// Overwrite the record stored under `name`.
    fn save(&mut self, name: &str, record: &AnimationRecord) -> Result<(), StoreError>;
}

/// Stores `<dir>/<name>.leda` files.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", name, ANIMATION_EXTENSION))
    }
}

impl FileStore for JsonFileStore {
    fn list_names(&self) -> Result<Vec<String>, StoreError> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = file_helper::file_stems_with_extension(&self.dir, ANIMATION_EXTENSION)?;
        names.sort();
        Ok(names)
    }

    fn load(&self, name: &str) -> Result<AnimationRecord, StoreError> {
        let path = self.path_for(name);
        if !file_helper::file_exists(&path) {
            return Err(StoreError::NotFound(name.to_string()));
        }
        let content = fs::read_to_string(&path)?;
        let record = serde_json::from_str(&content)?;
        debug!("Loaded {}", path.display());
        Ok(record)
    }

    fn save(&mut self, name: &str, record: &AnimationRecord) -> Result<(), StoreError> {
        file_helper::create_directory(&self.dir)?;
        let path = self.path_for(name);
        let json = serde_json::to_string(record)?;
        fs::write(&path, json)?;
        debug!("Wrote {}", path.display());
        Ok(())
    }
}

/// In-memory store for tests.
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStore {
    pub records: std::collections::BTreeMap<String, String>,
}

#[cfg(test)]
impl FileStore for MemoryStore {
    fn list_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.records.keys().cloned().collect())
    }

    fn load(&self, name: &str) -> Result<AnimationRecord, StoreError> {
        let json = self
            .records
            .get(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        Ok(serde_json::from_str(json)?)
    }

    fn save(&mut self, name: &str, record: &AnimationRecord) -> Result<(), StoreError> {
        self.records.insert(name.to_string(), serde_json::to_string(record)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::{Dimensions, Frame};
    use tempfile::TempDir;

    fn record() -> AnimationRecord {
        AnimationRecord {
            speed: 120,
            dimensions: Dimensions::new(2, 3),
            animation: vec![
                Frame::from_rows(vec![vec![1, 0, 1], vec![0, 1, 0]]),
                Frame::from_rows(vec![vec![0, 0, 0], vec![1, 1, 1]]),
            ],
        }
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut store = JsonFileStore::new(temp_dir.path().join("saved_animations"));
        assert_eq!(store.dir(), temp_dir.path().join("saved_animations"));

        store.save("heart", &record()).unwrap();
        assert!(temp_dir.path().join("saved_animations/heart.leda").is_file());
        assert_eq!(store.load("heart").unwrap(), record());
    }

    #[test]
    fn test_list_names_filters_extension() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut store = JsonFileStore::new(temp_dir.path());
        store.save("zeta", &record()).unwrap();
        store.save("alpha", &record()).unwrap();
        fs::write(temp_dir.path().join("notes.txt"), "x").unwrap();

        assert_eq!(store.list_names().unwrap(), vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_missing_directory_lists_nothing() {
        let store = JsonFileStore::new("/nonexistent/led_animator/dir");
        assert!(store.list_names().unwrap().is_empty());
    }

    #[test]
    fn test_load_errors() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = JsonFileStore::new(temp_dir.path());
        assert!(matches!(store.load("nope"), Err(StoreError::NotFound(n)) if n == "nope"));

        fs::write(temp_dir.path().join("broken.leda"), "{\"speed\": ").unwrap();
        assert!(matches!(store.load("broken"), Err(StoreError::Json(_))));
    }
}
