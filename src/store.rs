//! Store handle
//!
//! The open/closed lifecycle wrapper around one storage directory.
//!
//! ## Concurrency Model: Serialized Operations
//!
//! Every operation funnels through the handle's [`SerialExecutor`]: strict
//! FIFO, one operation body at a time, caller blocked until the body's I/O
//! has fully completed. Operations against different store instances
//! (different directories) are fully independent.
//!
//! ## Lifecycle
//!
//! The handle owns the executor and is the sole writer of the closed flag.
//! The flag is monotonic: once `close` flips it, every later operation is
//! rejected with `ClosedStore`. `close` itself is idempotent; the first
//! call lets queued work finish and tears the worker down, later calls are
//! no-ops.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use bytes::Bytes;
use tracing::debug;

use crate::config::Config;
use crate::engine::FsEngine;
use crate::error::{KvError, Result};
use crate::executor::SerialExecutor;

/// Handle to one file-backed key-value store
pub struct Store {
    engine: Arc<FsEngine>,
    executor: SerialExecutor,
    closed: AtomicBool,
}

impl Store {
    /// Open a store over the configured directory.
    ///
    /// Creates the directory (including parent segments) if absent. Fails
    /// if the path exists and is not a directory, or if the directory
    /// cannot be created.
    pub fn open(config: Config) -> Result<Self> {
        if config.dir.exists() && !config.dir.is_dir() {
            return Err(KvError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "store path {} exists and is not a directory",
                    config.dir.display()
                ),
            )));
        }
        fs::create_dir_all(&config.dir)?;

        let executor = SerialExecutor::new(config.queue_depth)?;
        debug!(dir = %config.dir.display(), "store opened");

        Ok(Self {
            engine: Arc::new(FsEngine::new(config.dir)),
            executor,
            closed: AtomicBool::new(false),
        })
    }

    /// Open with a path (convenience method)
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().dir(path).build())
    }

    /// Store `value` under `key`, replacing any prior value
    pub fn put(&self, key: &str, value: impl Into<Bytes>) -> Result<()> {
        let key = key.to_owned();
        let value = value.into();
        self.submit(move |engine| engine.put(&key, &value))
    }

    /// Fetch the value stored under `key`
    pub fn get(&self, key: &str) -> Result<Bytes> {
        let key = key.to_owned();
        self.submit(move |engine| engine.get(&key))
    }

    /// Delete the value stored under `key`.
    ///
    /// Unlike `clear`, removing an absent key is a `KeyNotFound` error.
    pub fn remove(&self, key: &str) -> Result<()> {
        let key = key.to_owned();
        self.submit(move |engine| engine.remove(&key))
    }

    /// Whether a value is stored under `key`
    pub fn contains(&self, key: &str) -> Result<bool> {
        let key = key.to_owned();
        self.submit(move |engine| engine.contains(&key))
    }

    /// Delete every entry, leaving the directory itself intact
    pub fn clear(&self) -> Result<()> {
        self.submit(|engine| engine.clear())
    }

    /// Close the store.
    ///
    /// Already-queued operations run to completion; new submissions are
    /// rejected with `ClosedStore`. Safe to call more than once.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            self.executor.shutdown();
            debug!(dir = %self.engine.dir().display(), "store closed");
        }
    }

    /// Non-blocking observer of the closed flag
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Reject if closed, otherwise run the operation body on the worker
    /// and block for its result.
    fn submit<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&FsEngine) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        if self.is_closed() {
            return Err(KvError::ClosedStore(None));
        }

        let engine = Arc::clone(&self.engine);
        self.executor
            .execute(move || op(&engine))
            // close() won the race between the flag check and scheduling
            .unwrap_or_else(|| Err(KvError::ClosedStore(None)))
    }
}

impl Drop for Store {
    fn drop(&mut self) {
        self.close();
    }
}
