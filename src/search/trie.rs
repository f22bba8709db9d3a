//! Character trie shared by the prefix and infix indexes.
//!
//! Keys are inserted into a [`TrieBuilder`], which is then frozen into a
//! [`Trie`] with all nodes, edges and values packed into flat arrays.

use crate::entity::fold;
use crate::store::{EntityId, EntityStore};

#[derive(Debug, Default)]
struct BuilderNode {
    /// Sorted by character
    children: Vec<(char, u32)>,
    values: Vec<EntityId>,
}

/// Mutable trie used during index construction.
#[derive(Debug)]
pub(crate) struct TrieBuilder {
    nodes: Vec<BuilderNode>,
}

impl Default for TrieBuilder {
    fn default() -> Self {
        Self {
            nodes: vec![BuilderNode::default()],
        }
    }
}

impl TrieBuilder {
    /// Store `value` at the node for `key`. Repeated keys accumulate values.
    pub(crate) fn insert(&mut self, key: &str, value: EntityId) {
        let mut node = 0;
        for c in key.chars() {
            node = self.child_or_insert(node, c);
        }
        self.nodes[node].values.push(value);
    }

    fn child_or_insert(&mut self, node: usize, c: char) -> usize {
        let children = &self.nodes[node].children;
        match children.binary_search_by_key(&c, |&(edge, _)| edge) {
            Ok(pos) => children[pos].1 as usize,
            Err(pos) => {
                let child = self.nodes.len();
                let child_id = u32::try_from(child).expect("trie exceeds u32::MAX nodes");
                self.nodes.push(BuilderNode::default());
                self.nodes[node].children.insert(pos, (c, child_id));
                child
            }
        }
    }

    /// Pack the builder into a read-only [`Trie`].
    pub(crate) fn freeze(self) -> Trie {
        let mut nodes = Vec::with_capacity(self.nodes.len());
        let mut edges = Vec::new();
        let mut values = Vec::new();

        for node in self.nodes {
            nodes.push(Node {
                edges: span(edges.len(), node.children.len()),
                values: span(values.len(), node.values.len()),
            });
            edges.extend(node.children);
            values.extend(node.values);
        }

        Trie {
            nodes: nodes.into_boxed_slice(),
            edges: edges.into_boxed_slice(),
            values: values.into_boxed_slice(),
        }
    }
}

fn span(start: usize, len: usize) -> (u32, u32) {
    let start = u32::try_from(start).expect("trie exceeds u32::MAX entries");
    let len = u32::try_from(len).expect("trie exceeds u32::MAX entries");
    (start, start + len)
}

#[derive(Debug, Clone, Copy)]
struct Node {
    /// Range into `Trie::edges`
    edges: (u32, u32),
    /// Range into `Trie::values`
    values: (u32, u32),
}

/// Frozen character trie mapping keys to entity ids.
#[derive(Debug)]
pub(crate) struct Trie {
    nodes: Box<[Node]>,
    edges: Box<[(char, u32)]>,
    values: Box<[EntityId]>,
}

impl Default for Trie {
    fn default() -> Self {
        TrieBuilder::default().freeze()
    }
}

impl Trie {
    fn edges(&self, node: usize) -> &[(char, u32)] {
        let (start, end) = self.nodes[node].edges;
        &self.edges[start as usize..end as usize]
    }

    fn values(&self, node: usize) -> &[EntityId] {
        let (start, end) = self.nodes[node].values;
        &self.values[start as usize..end as usize]
    }

    /// Walk `key` from the root.
    fn find(&self, key: &str) -> Option<usize> {
        key.chars().try_fold(0, |node, c| {
            let edges = self.edges(node);
            edges
                .binary_search_by_key(&c, |&(edge, _)| edge)
                .ok()
                .map(|pos| edges[pos].1 as usize)
        })
    }

    /// Every value stored at or below the node for `prefix`.
    ///
    /// Values come out in pre-order: a node's own values first, then its
    /// children in character order.
    pub(crate) fn retrieve(&self, prefix: &str) -> Vec<EntityId> {
        let Some(start) = self.find(prefix) else {
            return vec![];
        };

        let mut found = Vec::new();
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            found.extend_from_slice(self.values(node));
            stack.extend(self.edges(node).iter().rev().map(|&(_, child)| child as usize));
        }
        found
    }

    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// "Starts with" index over case-folded entity names.
#[derive(Debug, Default)]
pub struct PrefixTrie {
    trie: Trie,
}

impl PrefixTrie {
    pub fn build(store: &EntityStore) -> Self {
        let mut builder = TrieBuilder::default();
        for (id, entity) in store.iter() {
            builder.insert(&entity.folded_name(), id);
        }
        Self {
            trie: builder.freeze(),
        }
    }

    /// Entities whose folded name starts with `prefix`.
    ///
    /// Blank input yields nothing; the result is not filtered by kind.
    pub fn retrieve(&self, prefix: &str) -> Vec<EntityId> {
        let prefix = prefix.trim();
        if prefix.is_empty() {
            return vec![];
        }
        self.trie.retrieve(&fold(prefix))
    }

    pub fn node_count(&self) -> usize {
        self.trie.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    fn trie(keys: &[&str]) -> Trie {
        let mut builder = TrieBuilder::default();
        for (i, key) in keys.iter().enumerate() {
            builder.insert(key, EntityId(i as u32));
        }
        builder.freeze()
    }

    fn ids(raw: &[u32]) -> Vec<EntityId> {
        raw.iter().map(|&i| EntityId(i)).collect()
    }

    #[test]
    fn test_preorder_traversal() {
        let trie = trie(&["cab", "ca", "cb", "c", "d"]);
        // c(3) -> ca(1) -> cab(0) -> cb(2)
        check!(trie.retrieve("c") == ids(&[3, 1, 0, 2]));
        check!(trie.retrieve("") == ids(&[3, 1, 0, 2, 4]));
    }

    #[rstest]
    #[case("ca", &[1, 0])]
    #[case("cab", &[0])]
    #[case("cabx", &[])]
    #[case("x", &[])]
    fn test_retrieve_prefix(#[case] prefix: &str, #[case] expected: &[u32]) {
        let trie = trie(&["cab", "ca", "cb", "c", "d"]);
        check!(trie.retrieve(prefix) == ids(expected));
    }

    #[test]
    fn test_duplicate_keys_keep_all_values() {
        let trie = trie(&["foo", "foo", "foobar"]);
        check!(trie.retrieve("foo") == ids(&[0, 1, 2]));
    }

    #[test]
    fn test_multibyte_keys() {
        let trie = trie(&["ünit", "unit"]);
        check!(trie.retrieve("ü") == ids(&[0]));
        check!(trie.retrieve("u") == ids(&[1]));
    }

    #[test]
    fn test_empty_trie() {
        let trie = Trie::default();
        check!(trie.retrieve("").is_empty());
        check!(trie.node_count() == 1);
    }
}
