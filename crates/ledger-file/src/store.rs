//! JSON-file key-value store.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::{debug, instrument, warn};

use ledger_core::error::{Error, StorageError};
use ledger_core::{KeyValueStore, Result};

#[cfg(unix)]
use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

type Entries = BTreeMap<String, String>;

fn map_io(err: std::io::Error) -> Error {
    Error::Storage(StorageError::Unavailable {
        message: format!("IO error: {}", err),
    })
}

/// A [`KeyValueStore`] persisted as a flat JSON object in one file.
///
/// Every write takes an exclusive lock on a sibling `.lock` file, rewrites the
/// whole object to a temporary file and renames it into place, so readers in
/// other processes never observe a half-written file. The file holds bearer
/// tokens and is created with owner-only permissions on Unix.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the file at `path`. Nothing is touched until
    /// the first access.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("lock")
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("tmp")
    }

    fn load(&self) -> Result<Entries> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(e) => return Err(map_io(e)),
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            Error::Storage(StorageError::Corrupt {
                message: format!("{}: {}", self.path.display(), e),
            })
        })
    }

    /// Load for a read-modify-write cycle; a corrupt file is replaced.
    fn load_for_update(&self) -> Result<Entries> {
        match self.load() {
            Err(Error::Storage(StorageError::Corrupt { message })) => {
                warn!(%message, "Discarding corrupt store file");
                Ok(Entries::new())
            }
            other => other,
        }
    }

    fn save(&self, entries: &Entries) -> Result<()> {
        let content = serde_json::to_string_pretty(entries).map_err(|e| {
            Error::Storage(StorageError::Corrupt {
                message: e.to_string(),
            })
        })?;

        let temp_path = self.temp_path();
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut temp = options.open(&temp_path).map_err(map_io)?;
        // An older temp file keeps its mode on open.
        #[cfg(unix)]
        temp.set_permissions(fs::Permissions::from_mode(0o600)).map_err(map_io)?;
        temp.write_all(content.as_bytes()).map_err(map_io)?;
        temp.sync_all().map_err(map_io)?;
        drop(temp);

        fs::rename(&temp_path, &self.path).map_err(map_io)?;
        Ok(())
    }

    /// Run a read-modify-write cycle under the exclusive lock.
    fn update<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Entries) -> bool,
    {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(map_io)?;
        }

        let lock_file = self.open_lock()?;
        lock_file.lock_exclusive().map_err(map_io)?;

        let result = self.load_for_update().and_then(|mut entries| {
            if apply(&mut entries) {
                self.save(&entries)
            } else {
                Ok(())
            }
        });

        lock_file.unlock().map_err(map_io)?;
        result
    }

    fn open_lock(&self) -> Result<File> {
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(map_io)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    #[instrument(skip(self, value), fields(path = %self.path.display()))]
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.update(|entries| {
            entries.insert(key.to_string(), value.to_string());
            true
        })?;
        debug!("Stored value");
        Ok(())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn remove(&self, key: &str) -> Result<()> {
        self.update(|entries| entries.remove(key).is_some())?;
        debug!("Removed value");
        Ok(())
    }
}
