//! Substring index built from name suffixes.

use super::trie::{Trie, TrieBuilder};
use crate::entity::fold;
use crate::store::{EntityId, EntityStore};
use ahash::AHashSet;

/// Shortest suffix stored in the infix index, and therefore the shortest
/// query it answers.
pub const MIN_INFIX_LENGTH: usize = 3;

/// "Contains" index over case-folded entity names.
///
/// Every suffix of at least `min_length` characters is inserted into a trie,
/// so any substring of that length or longer is a prefix of some stored suffix.
#[derive(Debug)]
pub struct InfixTrie {
    trie: Trie,
    min_length: usize,
}

impl Default for InfixTrie {
    fn default() -> Self {
        Self {
            trie: Trie::default(),
            min_length: MIN_INFIX_LENGTH,
        }
    }
}

impl InfixTrie {
    pub fn build(store: &EntityStore) -> Self {
        Self::with_min_length(store, MIN_INFIX_LENGTH)
    }

    pub fn with_min_length(store: &EntityStore, min_length: usize) -> Self {
        let min_length = min_length.max(1);
        let mut builder = TrieBuilder::default();

        for (id, entity) in store.iter() {
            let name = entity.folded_name();
            let char_count = name.chars().count();
            if char_count < min_length {
                continue;
            }
            for (offset, _) in name.char_indices().take(char_count - min_length + 1) {
                builder.insert(&name[offset..], id);
            }
        }

        Self {
            trie: builder.freeze(),
            min_length,
        }
    }

    /// Entities whose folded name contains `infix`, each listed once.
    ///
    /// Queries shorter than the minimum length return nothing.
    pub fn retrieve(&self, infix: &str) -> Vec<EntityId> {
        let infix = fold(infix.trim());
        if infix.chars().count() < self.min_length {
            return vec![];
        }

        let mut seen = AHashSet::new();
        self.trie
            .retrieve(&infix)
            .into_iter()
            .filter(|id| seen.insert(*id))
            .collect()
    }

    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Details, Entity};
    use assert2::check;
    use rstest::rstest;

    fn store(names: &[&str]) -> EntityStore {
        EntityStore::build(
            names
                .iter()
                .map(|name| Entity {
                    name: (*name).to_string(),
                    source_file: "common.j".to_string(),
                    description: None,
                    bugs: vec![],
                    notes: vec![],
                    source_code: String::new(),
                    patch: String::new(),
                    details: Details::Type,
                })
                .collect(),
        )
    }

    #[rstest]
    #[case("unit", &[0, 1])]
    #[case("UNIT", &[0, 1])]
    #[case("killu", &[0])]
    #[case("group", &[1])]
    #[case("nitgr", &[1])]
    #[case("xyz", &[])]
    fn test_retrieve_infix(#[case] query: &str, #[case] expected: &[u32]) {
        let index = InfixTrie::build(&store(&["KillUnit", "UnitGroup"]));
        let expected: Vec<_> = expected.iter().map(|&i| EntityId(i)).collect();
        let mut found = index.retrieve(query);
        found.sort();
        check!(found == expected);
    }

    #[rstest]
    #[case("")]
    #[case("  ")]
    #[case("u")]
    #[case("oo")]
    fn test_short_queries_empty(#[case] query: &str) {
        let index = InfixTrie::build(&store(&["Foo", "FOO", "foobar"]));
        check!(index.retrieve(query).is_empty());
    }

    #[test]
    fn test_repeated_substring_listed_once() {
        // "aaa" is a prefix of two suffixes of "aaaa".
        let index = InfixTrie::build(&store(&["aaaa"]));
        check!(index.retrieve("aaa") == vec![EntityId(0)]);
    }

    #[test]
    fn test_names_shorter_than_minimum_skipped() {
        let index = InfixTrie::build(&store(&["ab"]));
        check!(index.node_count() == 1);
        check!(index.min_length() == MIN_INFIX_LENGTH);
    }

    #[test]
    fn test_custom_min_length() {
        let index = InfixTrie::with_min_length(&store(&["Foo", "Bar"]), 2);
        check!(index.retrieve("oo") == vec![EntityId(0)]);
        check!(index.retrieve("o").is_empty());
    }
}
