//! Storage engine
//!
//! The filesystem operation bodies behind the public store surface. Every
//! method here runs inside the serial executor, so no two bodies ever
//! execute concurrently for the same store and no internal locking is
//! needed.
//!
//! ## Layout
//! One directory per store; each entry is a single regular file named by
//! the key's hash digest, containing exactly the value bytes last written.
//! No header, length prefix, checksum, index, or manifest. The directory
//! listing is the key set; the engine holds no in-memory cache.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::{debug, warn};

use crate::error::{KvError, Result};
use crate::key;

/// Operation bodies over one store directory
pub(crate) struct FsEngine {
    dir: PathBuf,
}

impl FsEngine {
    pub(crate) fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub(crate) fn dir(&self) -> &Path {
        &self.dir
    }

    /// Validate the key and resolve its entry path
    fn entry_path(&self, key: &str) -> Result<PathBuf> {
        key::validate(key).map_err(|reason| KvError::InvalidKey(reason.to_string()))?;
        Ok(self.dir.join(key::file_name_for(key)))
    }

    /// Write `value` to the key's entry file, replacing any prior content
    pub(crate) fn put(&self, key: &str, value: &[u8]) -> Result<()> {
        let path = self.entry_path(key)?;
        fs::write(&path, value)?;
        debug!(key, bytes = value.len(), "put");
        Ok(())
    }

    /// Read the full content of the key's entry file
    pub(crate) fn get(&self, key: &str) -> Result<Bytes> {
        let path = self.entry_path(key)?;
        match fs::read(&path) {
            Ok(data) => {
                debug!(key, bytes = data.len(), "get");
                Ok(Bytes::from(data))
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(KvError::KeyNotFound),
            Err(e) => Err(KvError::Io(e)),
        }
    }

    /// Delete the key's entry file. Removing an absent key is an error.
    pub(crate) fn remove(&self, key: &str) -> Result<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key, "remove");
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Err(KvError::KeyNotFound),
            Err(e) => Err(KvError::Io(e)),
        }
    }

    /// Existence check on the key's entry file; never `KeyNotFound`
    pub(crate) fn contains(&self, key: &str) -> Result<bool> {
        let path = self.entry_path(key)?;
        match fs::symlink_metadata(&path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(KvError::Io(e)),
        }
    }

    /// Delete every regular file directly inside the store directory.
    ///
    /// Best-effort: individual deletion failures are logged and skipped;
    /// only a failure to list the directory itself is an error.
    pub(crate) fn clear(&self) -> Result<()> {
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            if let Err(e) = fs::remove_file(&path) {
                warn!(path = %path.display(), error = %e, "clear: failed to delete entry");
            }
        }
        debug!("clear");
        Ok(())
    }
}
