//! Published documentation snapshot shared by query handlers.

use crate::doc::JassDoc;
use crate::error::LoadError;
use std::path::Path;
use std::sync::{Arc, RwLock};

/// Process-wide handle to the current [`JassDoc`].
///
/// Readers take a cheap [`snapshot`](Self::snapshot) and query it without any
/// locking; a reload builds a complete new `JassDoc` first and only then swaps
/// the reference, so in-flight readers finish against the old snapshot.
#[derive(Debug)]
pub struct DocHandle {
    current: RwLock<Arc<JassDoc>>,
}

impl DocHandle {
    pub fn new(doc: JassDoc) -> Self {
        Self {
            current: RwLock::new(Arc::new(doc)),
        }
    }

    /// The currently published documentation.
    pub fn snapshot(&self) -> Arc<JassDoc> {
        // A poisoned lock still holds a complete snapshot; only the swap can panic.
        self.current
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }

    /// Replace the published documentation, returning the previous snapshot.
    pub fn publish(&self, doc: JassDoc) -> Arc<JassDoc> {
        let doc = Arc::new(doc);
        let entities = doc.len();
        let previous = {
            let mut current = self
                .current
                .write()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            std::mem::replace(&mut *current, doc)
        };

        tracing::info!(
            "Published documentation snapshot ({} entities, previously {})",
            entities,
            previous.len()
        );
        previous
    }

    /// Build a new snapshot from the corpus at `path` and publish it.
    ///
    /// On failure the current snapshot stays published.
    pub fn reload_from(&self, path: &Path) -> Result<Arc<JassDoc>, LoadError> {
        let doc = JassDoc::load(path)?;
        self.publish(doc);
        Ok(self.snapshot())
    }
}
