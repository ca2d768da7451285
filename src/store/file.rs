use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

/// Directory-backed store: each key lives in `<root>/<key>.json`.
///
/// Characters outside `[A-Za-z0-9_-]` in a key are replaced by `_`, so
/// `rps:players` is kept in `rps_players.json`.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// The directory is created on first write.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing `key`.
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        let stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.root.join(format!("{}.json", stem))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("rps-arena-{}-{}", std::process::id(), name));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_key_to_path() {
        let store = FileStore::new("/data");
        assert_eq!(store.path_for("rps:players"), PathBuf::from("/data/rps_players.json"));
        assert_eq!(store.path_for("../x"), PathBuf::from("/data/___x.json"));
    }

    #[test]
    fn test_missing_file_is_none() {
        let store = FileStore::new(scratch("missing"));
        assert_eq!(store.get("rps:players").unwrap(), None);
    }

    #[test]
    fn test_write_creates_directory() {
        let dir = scratch("write");
        let mut store = FileStore::new(dir.join("nested"));

        store.set("rps:players", "[]").unwrap();
        assert_eq!(store.get("rps:players").unwrap(), Some("[]".to_string()));

        std::fs::remove_dir_all(dir).unwrap();
    }
}
