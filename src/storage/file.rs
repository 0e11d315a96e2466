//! On-disk key-value store
//!
//! Each key is a `<key>.json` file under one directory. Writes go to a temp
//! file in the same directory and are renamed into place.

use super::{KeyValueStore, StoreError};
use log::warn;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        self.dir.join(format!("{name}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(err) if err.kind() == io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!("Could not read {}: {err}", path.display());
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;

        let mut temp_file = NamedTempFile::new_in(&self.dir)?;
        temp_file.write_all(value.as_bytes())?;
        temp_file.flush()?;

        temp_file
            .persist(self.path_for(key))
            .map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("highScore"), None);
    }

    #[test]
    fn writes_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        store.set("highScore", "{\"1/2/2024\":12}").unwrap();

        let reopened = FileStore::new(dir.path().join("nested"));
        assert_eq!(
            reopened.get("highScore").as_deref(),
            Some("{\"1/2/2024\":12}")
        );
    }

    #[test]
    fn overwrite_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("k", "first value that is long").unwrap();
        store.set("k", "short").unwrap();
        assert_eq!(store.get("k").as_deref(), Some("short"));
    }

    #[test]
    fn keys_map_to_safe_file_names() {
        let store = FileStore::new("/data");
        assert_eq!(store.path_for("high/score"), PathBuf::from("/data/high_score.json"));
    }
}
