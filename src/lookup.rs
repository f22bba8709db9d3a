//! Exact name lookup over a frozen [`EntityStore`].

use crate::entity::{Kind, fold};
use crate::store::{EntityId, EntityStore};
use ahash::AHashMap;

/// Case-sensitive and case-insensitive name maps.
///
/// The case-sensitive map keeps the last entity seen for each exact name.
/// The case-insensitive map keeps the first entity seen for each folded name.
#[derive(Debug, Default)]
pub struct ExactIndex {
    case_sensitive: AHashMap<String, EntityId>,
    case_insensitive: AHashMap<String, EntityId>,
}

impl ExactIndex {
    pub fn build(store: &EntityStore) -> Self {
        let mut case_sensitive = AHashMap::with_capacity(store.len());
        let mut case_insensitive = AHashMap::with_capacity(store.len());

        for (id, entity) in store.iter() {
            case_sensitive.insert(entity.name.clone(), id);
            case_insensitive.entry(entity.folded_name()).or_insert(id);
        }

        Self {
            case_sensitive,
            case_insensitive,
        }
    }

    /// Find an entity of `kind` named `name`.
    ///
    /// The exact spelling is tried first, then the folded one. A name that only
    /// exists under another kind is not found.
    pub fn find(&self, store: &EntityStore, kind: Kind, name: &str) -> Option<EntityId> {
        let matching = |id: &EntityId| kind.matches(store.get(*id));

        self.case_sensitive
            .get(name)
            .copied()
            .filter(matching)
            .or_else(|| self.case_insensitive.get(&fold(name)).copied().filter(matching))
    }

    pub fn case_sensitive_len(&self) -> usize {
        self.case_sensitive.len()
    }

    pub fn case_insensitive_len(&self) -> usize {
        self.case_insensitive.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Details, Entity, Method};
    use assert2::check;

    fn entity(name: &str, details: Details) -> Entity {
        Entity {
            name: name.to_string(),
            source_file: "common.j".to_string(),
            description: None,
            bugs: vec![],
            notes: vec![],
            source_code: String::new(),
            patch: String::new(),
            details,
        }
    }

    fn store() -> EntityStore {
        EntityStore::build(vec![
            entity("Foo", Details::Method(Method::default())),
            entity("FOO", Details::Type),
            entity("foo", Details::Method(Method::default())),
        ])
    }

    #[test]
    fn test_collision_policies() {
        let store = store();
        let index = ExactIndex::build(&store);

        check!(index.case_sensitive_len() == 3);
        check!(index.case_insensitive_len() == 1);
        check!(index.case_insensitive.get("foo") == Some(&EntityId(0)));
    }

    #[test]
    fn test_exact_case_wins() {
        let store = store();
        let index = ExactIndex::build(&store);

        check!(index.find(&store, Kind::Method, "foo") == Some(EntityId(2)));
        check!(index.find(&store, Kind::Type, "FOO") == Some(EntityId(1)));
        check!(index.find(&store, Kind::Entity, "Foo") == Some(EntityId(0)));
    }

    #[test]
    fn test_case_insensitive_fallback() {
        let store = store();
        let index = ExactIndex::build(&store);

        // "fOO" has no exact entry; the folded map yields the first "foo".
        check!(index.find(&store, Kind::Method, "fOO") == Some(EntityId(0)));
        // The folded winner is a method, so a type lookup misses.
        check!(index.find(&store, Kind::Type, "fOO").is_none());
        check!(index.find(&store, Kind::Property, "foo").is_none());
    }

    #[test]
    fn test_last_exact_duplicate_wins() {
        let store = EntityStore::build(vec![
            entity("Dup", Details::Type),
            entity("Dup", Details::Method(Method::default())),
        ]);
        let index = ExactIndex::build(&store);

        check!(index.find(&store, Kind::Entity, "Dup") == Some(EntityId(1)));
        // Exact probe hits the method; fallback reaches the first-seen type.
        check!(index.find(&store, Kind::Type, "Dup") == Some(EntityId(0)));
    }
}
