//! File-backed key-value store.
//!
//! Persists the local storage map as a flat TOML table of strings
//! (`~/.config/brainstorm/local_storage.toml`).

use brainstorm_core::error::{BrainstormError, Result};
use brainstorm_core::storage::KeyValueStore;
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

type Entries = BTreeMap<String, String>;

/// Local storage persisted to a single TOML file.
///
/// Each mutation takes an exclusive lock, reloads the file, applies the
/// change and writes it back through a temp file + rename. Reads take no
/// lock. There is no atomicity across separate calls.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads all entries. A missing or blank file is an empty map.
    fn load(&self) -> Result<Entries> {
        if !self.path.exists() {
            return Ok(Entries::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        Ok(toml::from_str(&content)?)
    }

    fn save(&self, entries: &Entries) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let toml_string = toml::to_string(entries)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(toml_string.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Locked read-modify-write. `f` returns whether anything changed;
    /// unchanged maps are not rewritten.
    fn update<F>(&self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Entries) -> bool,
    {
        let _lock = FileLock::acquire(&self.path)?;
        let mut entries = self.load()?;
        if f(&mut entries) {
            self.save(&entries)?;
        }
        Ok(())
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| BrainstormError::io("storage path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| BrainstormError::io("storage path has no file name"))?;
        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.update(|entries| entries.remove(key).is_some())
    }
}

/// Exclusive lock on `<file>.lock`, released when the handle closes.
///
/// The lock file itself is never deleted: unlinking it would let a waiter
/// on the old inode and a newcomer on a fresh one hold the lock together.
struct FileLock {
    _file: File,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| BrainstormError::io(format!("failed to lock local storage: {e}")))?;
        }

        Ok(FileLock { _file: file })
    }
}
