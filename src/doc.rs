//! Query facade over one loaded documentation corpus.

use crate::corpus::load_corpus;
use crate::entity::{Entity, Kind, Method, Property, fold};
use crate::error::{LoadError, LookupError};
use crate::lookup::ExactIndex;
use crate::search::{InfixTrie, PrefixTrie};
use crate::store::{EntityId, EntityStore};
use ahash::AHashSet;
use std::path::Path;

/// Entities of one corpus together with every index built over them.
///
/// Built once and never mutated; a reload builds a new `JassDoc` and swaps it
/// in through [`DocHandle`](crate::state::DocHandle).
#[derive(Debug, Default)]
pub struct JassDoc {
    store: EntityStore,
    exact: ExactIndex,
    prefix: PrefixTrie,
    infix: InfixTrie,
}

impl JassDoc {
    /// Normalize `entities` and build all indexes over them.
    pub fn build(entities: Vec<Entity>) -> Self {
        let start = std::time::Instant::now();

        let store = EntityStore::build(entities);
        let exact = ExactIndex::build(&store);
        let prefix = PrefixTrie::build(&store);
        let infix = InfixTrie::build(&store);

        tracing::info!(
            "Built documentation index: {} entities, {} distinct names, {} prefix nodes, {} infix nodes in {:?}",
            store.len(),
            exact.case_insensitive_len(),
            prefix.node_count(),
            infix.node_count(),
            start.elapsed()
        );

        Self {
            store,
            exact,
            prefix,
            infix,
        }
    }

    /// Read a JSON corpus from disk and build it.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        load_corpus(path).map(Self::build)
    }

    /// All entities, in ingestion order.
    pub fn entities(&self) -> &[Entity] {
        self.store.entities()
    }

    pub fn entity(&self, id: EntityId) -> &Entity {
        self.store.get(id)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Look up an entity of `kind` by name, falling back to a case-insensitive match.
    pub fn try_get(&self, kind: Kind, name: &str) -> Option<&Entity> {
        self.exact
            .find(&self.store, kind, name)
            .map(|id| self.store.get(id))
    }

    /// Like [`try_get`](Self::try_get), but a miss is an error.
    pub fn get(&self, kind: Kind, name: &str) -> Result<&Entity, LookupError> {
        self.try_get(kind, name).ok_or_else(|| LookupError::NotFound {
            kind,
            name: name.to_string(),
        })
    }

    pub fn try_get_method(&self, name: &str) -> Option<(&Entity, &Method)> {
        let entity = self.try_get(Kind::Method, name)?;
        entity.as_method().map(|method| (entity, method))
    }

    pub fn try_get_property(&self, name: &str) -> Option<(&Entity, &Property)> {
        let entity = self.try_get(Kind::Property, name)?;
        entity.as_property().map(|property| (entity, property))
    }

    pub fn try_get_type(&self, name: &str) -> Option<&Entity> {
        self.try_get(Kind::Type, name)
    }

    /// Entities of `kind` whose name starts with `prefix`, case-insensitively.
    pub fn retrieve_by_prefix(&self, kind: Kind, prefix: &str) -> Vec<&Entity> {
        self.resolve(kind, self.prefix.retrieve(prefix))
    }

    /// Entities of `kind` whose name contains `infix`, case-insensitively.
    pub fn retrieve_by_infix(&self, kind: Kind, infix: &str) -> Vec<&Entity> {
        self.resolve(kind, self.infix.retrieve(infix))
    }

    /// Autocomplete search: prefix matches first, then the remaining infix matches.
    ///
    /// Each entity appears at most once. The result is not truncated.
    pub fn search(&self, kind: Kind, input: &str) -> Vec<&Entity> {
        self.search_ids(kind, input)
            .into_iter()
            .map(|id| self.store.get(id))
            .collect()
    }

    /// [`search`](Self::search) returning entity ids.
    pub fn search_ids(&self, kind: Kind, input: &str) -> Vec<EntityId> {
        if input.trim().is_empty() {
            return vec![];
        }

        let input = fold(input);
        let matching = |id: &EntityId| kind.matches(self.store.get(*id));

        let mut results: Vec<EntityId> = self
            .prefix
            .retrieve(&input)
            .into_iter()
            .filter(matching)
            .collect();
        let seen: AHashSet<EntityId> = results.iter().copied().collect();

        results.extend(
            self.infix
                .retrieve(&input)
                .into_iter()
                .filter(|id| !seen.contains(id) && matching(id)),
        );

        tracing::debug!("Search for {:?} ({}) matched {}", input, kind, results.len());
        results
    }

    fn resolve(&self, kind: Kind, ids: Vec<EntityId>) -> Vec<&Entity> {
        ids.into_iter()
            .map(|id| self.store.get(id))
            .filter(|entity| kind.matches(entity))
            .collect()
    }
}
