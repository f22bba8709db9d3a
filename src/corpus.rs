//! JSON corpus loading.
//!
//! The corpus is produced by an external parser of the `.j` / `.ai` sources and
//! stored as a JSON array of entities, each tagged with `"kind"`.

use crate::entity::Entity;
use crate::error::LoadError;
use std::path::Path;

/// Read every entity from the corpus file at `path`.
pub fn load_corpus(path: &Path) -> Result<Vec<Entity>, LoadError> {
    let start = std::time::Instant::now();

    let bytes = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let entities: Vec<Entity> =
        serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::info!(
        "Loaded {} entities from {} in {:?}",
        entities.len(),
        path.display(),
        start.elapsed()
    );
    Ok(entities)
}
