//! Persisted catalog state.
//!
//! Two JSON files in one directory: the downloaded catalog body
//! (`holidays.json`, kept as the raw bytes that were fetched so unknown
//! fields survive a round-trip) and the update metadata
//! (`update_meta.json`: last remote check, current version). Every write
//! goes to a temp file in the same directory and is renamed into place,
//! so a crash or cancellation never leaves a partial file behind.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use al_core::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// File name of the persisted catalog body.
pub const CATALOG_FILE: &str = "holidays.json";

/// File name of the update metadata.
pub const META_FILE: &str = "update_meta.json";

/// Durable update-manager state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateMeta {
    /// Unix seconds of the last successful remote check; 0 if never.
    #[serde(default)]
    pub last_checked_at: i64,
    /// Version of the persisted catalog; empty if none.
    #[serde(default)]
    pub version: String,
}

/// Catalog and metadata storage rooted at one directory.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    dir: PathBuf,
}

impl CatalogStore {
    /// Store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        CatalogStore { dir: dir.into() }
    }

    /// Path of the persisted catalog body.
    pub fn catalog_path(&self) -> PathBuf {
        self.dir.join(CATALOG_FILE)
    }

    fn meta_path(&self) -> PathBuf {
        self.dir.join(META_FILE)
    }

    /// Read the persisted catalog body.
    pub fn load_catalog(&self) -> Result<String> {
        fs::read_to_string(self.catalog_path())
            .map_err(|e| Error::Io(format!("{}: {e}", self.catalog_path().display())))
    }

    /// Atomically replace the persisted catalog body.
    pub fn save_catalog(&self, raw_json: &str) -> Result<()> {
        self.write_atomic(&self.catalog_path(), raw_json.as_bytes())
    }

    /// Read the update metadata; a missing file is the default state.
    pub fn load_meta(&self) -> Result<UpdateMeta> {
        let path = self.meta_path();
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(UpdateMeta::default());
            }
            Err(e) => return Err(Error::Io(format!("{}: {e}", path.display()))),
        };
        serde_json::from_str(&text).map_err(|e| Error::Parse(e.to_string()))
    }

    /// Atomically replace the update metadata.
    pub fn save_meta(&self, meta: &UpdateMeta) -> Result<()> {
        let text =
            serde_json::to_string_pretty(meta).map_err(|e| Error::Parse(e.to_string()))?;
        self.write_atomic(&self.meta_path(), text.as_bytes())
    }

    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| Error::Io(format!("{}: {e}", self.dir.display())))?;
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)
            .map_err(|e| Error::Io(format!("temp file in {}: {e}", self.dir.display())))?;
        tmp.write_all(bytes)
            .map_err(|e| Error::Io(format!("write {}: {e}", path.display())))?;
        tmp.persist(path)
            .map_err(|e| Error::Io(format!("replace {}: {e}", path.display())))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn catalog_round_trip() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path());
        store.save_catalog(r#"{"version":"1.0.0"}"#).unwrap();
        assert_eq!(store.load_catalog().unwrap(), r#"{"version":"1.0.0"}"#);
    }

    #[test]
    fn missing_catalog_is_an_io_error() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path());
        assert!(matches!(store.load_catalog(), Err(Error::Io(_))));
    }

    #[test]
    fn missing_meta_is_the_default() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path());
        assert_eq!(store.load_meta().unwrap(), UpdateMeta::default());
    }

    #[test]
    fn meta_round_trip() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path());
        let meta = UpdateMeta {
            last_checked_at: 1_736_899_200,
            version: "1.2.0".to_string(),
        };
        store.save_meta(&meta).unwrap();
        assert_eq!(store.load_meta().unwrap(), meta);
    }

    #[test]
    fn corrupt_meta_is_a_parse_error() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path());
        std::fs::write(dir.path().join(META_FILE), "not json").unwrap();
        assert!(matches!(store.load_meta(), Err(Error::Parse(_))));
    }

    #[test]
    fn save_replaces_previous_content() {
        let dir = tempdir().unwrap();
        let store = CatalogStore::new(dir.path());
        store.save_catalog("first").unwrap();
        store.save_catalog("second").unwrap();
        assert_eq!(store.load_catalog().unwrap(), "second");
        // No stray temp files left behind
        let entries: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn creates_the_directory_on_first_write() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("holidays");
        let store = CatalogStore::new(&nested);
        store.save_catalog("{}").unwrap();
        assert!(nested.join(CATALOG_FILE).exists());
    }
}
