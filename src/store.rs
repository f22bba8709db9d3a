//! Frozen entity storage with the text normalization pass.

use crate::entity::{Details, Entity};
use crate::normalize::{clean, compact_source, normalize};

/// Position of an entity in its [`EntityStore`].
///
/// Identity of an entity within one loaded corpus; meaningless across reloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub(crate) u32);

impl EntityId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Immutable collection of normalized entities, in ingestion order.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
}

impl EntityStore {
    /// Normalize every entity and freeze the collection.
    pub fn build(mut entities: Vec<Entity>) -> Self {
        let start = std::time::Instant::now();

        for entity in &mut entities {
            normalize_entity(entity);
        }

        tracing::debug!(
            "Normalized {} entities in {:?}",
            entities.len(),
            start.elapsed()
        );

        Self { entities }
    }

    pub fn get(&self, id: EntityId) -> &Entity {
        &self.entities[id.index()]
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// All entities in ingestion order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Entities paired with their ids, in ingestion order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().enumerate().map(|(i, entity)| {
            let id = u32::try_from(i).expect("entity count exceeds u32::MAX");
            (EntityId(id), entity)
        })
    }
}

fn normalize_entity(entity: &mut Entity) {
    entity.description = normalize(entity.description.as_deref());
    entity.source_code = compact_source(&entity.source_code);

    for bug in &mut entity.bugs {
        *bug = clean(bug);
    }
    for note in &mut entity.notes {
        *note = clean(note);
    }

    // Short one-line parameter descriptions are left alone so their casing survives.
    if let Details::Method(method) = &mut entity.details {
        for parameter in &mut method.parameters {
            if let Some(description) = &mut parameter.description
                && description.contains('\n')
            {
                *description = clean(description);
            }
        }
    }
}
