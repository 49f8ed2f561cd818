//! File change observation with an explicit subscription lifetime.
//!
//! `Observer::subscribe` starts the watcher-first pipeline: the notify
//! watcher begins buffering immediately, a debouncer collapses bursts, and
//! the callback receives settled batches. The returned `Subscription`
//! bounds the observer's lifetime; dropping it (or calling `unsubscribe`)
//! stops the watcher thread.

mod debouncer;

use std::path::PathBuf;
use std::thread::JoinHandle;
use std::time::Duration;

use anyhow::{Context, Result};
use crossbeam::channel::{self, RecvTimeoutError, Sender};
use notify::{RecursiveMode, Watcher};

use crate::debug;

use debouncer::Debouncer;

/// Poll interval of the observer loop.
const TICK: Duration = Duration::from_millis(50);

/// What happened to a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
    Removed,
}

impl ChangeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Modified => "modified",
            Self::Removed => "removed",
        }
    }
}

/// A single debounced file change.
#[derive(Debug, Clone)]
pub struct Change {
    pub path: PathBuf,
    pub kind: ChangeKind,
}

/// Watches a set of root directories for changes.
pub struct Observer {
    paths: Vec<PathBuf>,
    quiet: Duration,
}

impl Observer {
    pub fn new(paths: Vec<PathBuf>, quiet: Duration) -> Self {
        Self { paths, quiet }
    }

    /// Start watching; the callback receives each settled change batch.
    ///
    /// The watcher is attached before this returns, so changes made right
    /// after subscribing are never lost.
    pub fn subscribe<F>(&self, mut callback: F) -> Result<Subscription>
    where
        F: FnMut(Vec<Change>) + Send + 'static,
    {
        let (event_tx, event_rx) = channel::unbounded();
        let (stop_tx, stop_rx) = channel::bounded::<()>(1);

        let mut watcher = notify::recommended_watcher(move |res| {
            let _ = event_tx.send(res);
        })
        .context("failed to create file watcher")?;

        for path in &self.paths {
            watcher
                .watch(path, RecursiveMode::Recursive)
                .with_context(|| format!("failed to watch {}", path.display()))?;
        }

        let mut debouncer = Debouncer::new(self.quiet);

        let handle = std::thread::spawn(move || {
            // Keep the watcher alive for the thread's lifetime
            let _watcher = watcher;

            loop {
                match event_rx.recv_timeout(TICK) {
                    Ok(Ok(event)) => {
                        debug!("watch"; "raw notify: {:?} {:?}", event.kind, event.paths);
                        debouncer.add_event(&event);
                    }
                    Ok(Err(e)) => crate::log!("watch"; "notify error: {}", e),
                    Err(RecvTimeoutError::Timeout) => {}
                    Err(RecvTimeoutError::Disconnected) => break,
                }

                if stop_rx.try_recv().is_ok() {
                    break;
                }

                if let Some(changes) = debouncer.take_if_ready() {
                    callback(changes);
                }
            }
        });

        Ok(Subscription {
            stop_tx,
            handle: Some(handle),
        })
    }
}

/// Handle bounding an active subscription.
pub struct Subscription {
    stop_tx: Sender<()>,
    handle: Option<JoinHandle<()>>,
}

impl Subscription {
    /// Stop the observer and wait for its thread to finish.
    pub fn unsubscribe(mut self) {
        let _ = self.stop_tx.send(());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self.stop_tx.try_send(());
    }
}
