//! Background worker that rebuilds the index when the corpus file changes.
//!
//! The worker polls the corpus modification time. When it moves, the corpus is
//! parsed and indexed on the blocking pool and the result is published through
//! [`DocHandle`]; readers never see a half-built index.

use crate::doc::JassDoc;
use crate::error::Result;
use crate::state::DocHandle;
use anyhow::Context;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::SystemTime;
use tokio::time::{Duration, MissedTickBehavior, interval};

/// Default interval between corpus checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Watches one corpus file and republishes it on change.
pub struct ReloadWorker {
    handle: Arc<DocHandle>,
    corpus: PathBuf,
    poll_interval: Duration,
    /// Modification time of the corpus behind the published snapshot
    last_modified: Option<SystemTime>,
}

impl ReloadWorker {
    /// Create a worker for a handle whose snapshot was built from `corpus`.
    pub fn new(handle: Arc<DocHandle>, corpus: PathBuf, poll_interval: Duration) -> Self {
        let last_modified = modified(&corpus);
        Self {
            handle,
            corpus,
            poll_interval,
            last_modified,
        }
    }

    /// Run the polling loop forever.
    pub async fn run(mut self) {
        let mut ticker = interval(self.poll_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // The first tick completes immediately; the snapshot is already fresh.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            if let Err(e) = self.check().await {
                tracing::warn!("Corpus reload failed, keeping previous snapshot: {:#}", e);
            }
        }
    }

    /// Reload once if the corpus changed. Returns whether a new snapshot was published.
    pub async fn check(&mut self) -> Result<bool> {
        let current = modified(&self.corpus);
        if current.is_some() && current == self.last_modified {
            tracing::trace!("Corpus unchanged: {}", self.corpus.display());
            return Ok(false);
        }

        tracing::debug!("Corpus changed, rebuilding: {}", self.corpus.display());
        let path = self.corpus.clone();
        let doc = tokio::task::spawn_blocking(move || JassDoc::load(&path))
            .await
            .context("Index build task panicked")?
            .with_context(|| format!("Failed to reload {}", self.corpus.display()))?;

        self.handle.publish(doc);
        self.last_modified = current;
        Ok(true)
    }
}

fn modified(path: &std::path::Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}

/// Spawn the reload worker as a tokio task.
pub fn spawn_reload_worker(
    handle: Arc<DocHandle>,
    corpus: PathBuf,
    poll_interval: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(ReloadWorker::new(handle, corpus, poll_interval).run())
}
