use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use super::{Result, StorageBackend};

const DEFAULT_DIR_NAME: &str = ".finance_core";

/// File-per-collection JSON storage rooted in the application data
/// directory. Writes stage to a temporary sibling and rename into place.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    root: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(default_data_dir);
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn base_dir(&self) -> &Path {
        &self.root
    }

    pub fn collection_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

/// Returns the application data directory, honouring the
/// `FINANCE_CORE_HOME` override and defaulting to `~/.finance_core`.
fn default_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("FINANCE_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

impl StorageBackend for JsonStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.collection_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        let path = self.collection_path(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, payload)?;
        fs::rename(tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_a_payload() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();
        assert_eq!(storage.read("transactions").unwrap(), None);
        storage.write("transactions", "[]").unwrap();
        assert_eq!(
            storage.read("transactions").unwrap().as_deref(),
            Some("[]")
        );
        assert!(storage.collection_path("transactions").exists());
    }

    #[test]
    fn writes_replace_previous_payloads() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonStorage::new(Some(dir.path().to_path_buf())).unwrap();
        storage.write("reminders", "[1]").unwrap();
        storage.write("reminders", "[1,2]").unwrap();
        assert_eq!(
            storage.read("reminders").unwrap().as_deref(),
            Some("[1,2]")
        );
        // No stray staging file should survive the rename.
        assert!(!dir.path().join("reminders.tmp").exists());
    }
}
