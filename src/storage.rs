// Key-value storage backends for the roster blob and session flag

use eyre::{Context, Result, eyre};
use fs2::FileExt;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Durable key-value slot access: one entry per key, read and written whole.
///
/// Implementations are synchronous; every call touches the backing medium
/// directly, with no batching and no debouncing.
pub trait StorageBackend {
    /// Read the entry for `key`. `None` when no entry exists.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the entry for `key` unconditionally.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Delete the entry for `key`. Removing an absent entry is not an error.
    fn remove(&mut self, key: &str) -> Result<()>;
}

/// File-per-key backend rooted in a store directory.
#[derive(Debug)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Open a backend rooted at `dir`, creating the directory if needed.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).context("Failed to create store directory")?;
        Ok(Self { dir })
    }

    /// The directory holding the entries.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(key))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.entry_path(key)?;
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context("Failed to read store entry"),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .open(&path)
            .context("Failed to open store entry for writing")?;

        // Acquire exclusive lock before truncating
        file.lock_exclusive().context("Failed to acquire file lock")?;

        file.set_len(0)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;

        debug!(key, bytes = value.len(), "wrote store entry");

        // Lock is automatically released when file is dropped
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "removed store entry");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("Failed to remove store entry"),
        }
    }
}

/// In-memory backend for tests and demos. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        validate_key(key)?;
        self.entries.remove(key);
        Ok(())
    }
}

/// Entry keys double as file names, so keep them short and alphanumeric
/// (with _/-).
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(eyre!("Storage key cannot be empty"));
    }
    if key.len() > 64 {
        return Err(eyre!("Storage key too long: {} (max 64 chars)", key));
    }
    if !key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-') {
        return Err(eyre!(
            "Invalid storage key: {} (must be alphanumeric with _/-)",
            key
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_backend_creates_directory() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nested").join("store");

        let backend = FileBackend::open(&dir).unwrap();
        assert!(dir.exists());
        assert_eq!(backend.dir(), dir);
    }

    #[test]
    fn test_file_backend_read_absent_entry() {
        let temp = TempDir::new().unwrap();
        let backend = FileBackend::open(temp.path()).unwrap();

        assert_eq!(backend.read("employees").unwrap(), None);
    }

    #[test]
    fn test_file_backend_write_read_round_trip() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileBackend::open(temp.path()).unwrap();

        backend.write("employees", "[]").unwrap();
        assert_eq!(backend.read("employees").unwrap().as_deref(), Some("[]"));
        assert!(temp.path().join("employees").exists());
    }

    #[test]
    fn test_file_backend_overwrite_shrinks_entry() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileBackend::open(temp.path()).unwrap();

        backend.write("employees", "a long first value").unwrap();
        backend.write("employees", "short").unwrap();

        // No stale tail from the longer first write
        assert_eq!(backend.read("employees").unwrap().as_deref(), Some("short"));
    }

    #[test]
    fn test_file_backend_remove() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileBackend::open(temp.path()).unwrap();

        backend.write("isAuthenticated", "true").unwrap();
        backend.remove("isAuthenticated").unwrap();
        assert_eq!(backend.read("isAuthenticated").unwrap(), None);

        // Removing an absent entry is fine
        backend.remove("isAuthenticated").unwrap();
    }

    #[test]
    fn test_invalid_keys_rejected() {
        let temp = TempDir::new().unwrap();
        let mut backend = FileBackend::open(temp.path()).unwrap();

        assert!(backend.write("", "x").is_err());
        assert!(backend.write("../escape", "x").is_err());
        assert!(backend.write("a/b", "x").is_err());
        assert!(backend.write(&"a".repeat(65), "x").is_err());
        assert!(backend.read("has space").is_err());
    }

    #[test]
    fn test_memory_backend_round_trip() {
        let mut backend = MemoryBackend::new();

        assert_eq!(backend.read("employees").unwrap(), None);
        backend.write("employees", "[]").unwrap();
        assert_eq!(backend.read("employees").unwrap().as_deref(), Some("[]"));

        backend.remove("employees").unwrap();
        assert_eq!(backend.read("employees").unwrap(), None);
        backend.remove("employees").unwrap();
    }
}
