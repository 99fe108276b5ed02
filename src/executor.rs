//! Serial execution context
//!
//! One dedicated worker thread drains a bounded job channel in strict FIFO
//! order, one job at a time. This is the store's only concurrency-safety
//! mechanism: operation bodies never run concurrently, so they take no
//! locks of their own.
//!
//! ## Shutdown
//! `shutdown` is idempotent. The first call drops the job sender and joins
//! the worker; the worker finishes every job already in the queue before
//! exiting, so queued work is completed, never cancelled. Submissions after
//! shutdown report the executor unavailable instead of scheduling.

use crossbeam::channel::{bounded, Sender};
use parking_lot::Mutex;
use std::thread::{self, JoinHandle};
use tracing::debug;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Single-worker FIFO executor
pub struct SerialExecutor {
    sender: Mutex<Option<Sender<Job>>>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl SerialExecutor {
    /// Spawn the worker thread with a job queue of the given capacity
    pub fn new(queue_depth: usize) -> std::io::Result<Self> {
        let (tx, rx) = bounded::<Job>(queue_depth);

        let handle = thread::Builder::new()
            .name("hashkv-worker".to_string())
            .spawn(move || {
                for job in rx.iter() {
                    job();
                }
                debug!("worker drained and exiting");
            })?;

        Ok(Self {
            sender: Mutex::new(Some(tx)),
            worker: Mutex::new(Some(handle)),
        })
    }

    /// Run a job on the worker and block until its result is available.
    ///
    /// Returns `None` if the executor has been shut down before the job
    /// could be scheduled.
    pub fn execute<T, F>(&self, job: F) -> Option<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let tx = self.sender.lock().as_ref().cloned()?;

        let (done_tx, done_rx) = bounded::<T>(1);
        let wrapped: Job = Box::new(move || {
            let _ = done_tx.send(job());
        });

        tx.send(wrapped).ok()?;
        done_rx.recv().ok()
    }

    /// Stop accepting jobs, finish the queue, and join the worker.
    ///
    /// Safe to call more than once; only the first call has any effect.
    pub fn shutdown(&self) {
        let sender = self.sender.lock().take();
        if sender.is_none() {
            return;
        }
        drop(sender);

        if let Some(handle) = self.worker.lock().take() {
            let _ = handle.join();
        }
    }

    /// Whether `shutdown` has been called
    pub fn is_shut_down(&self) -> bool {
        self.sender.lock().is_none()
    }
}

impl Drop for SerialExecutor {
    fn drop(&mut self) {
        self.shutdown();
    }
}
