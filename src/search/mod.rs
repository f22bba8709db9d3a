//! Name search structures for autocomplete.
//!
//! Both indexes key on case-folded entity names and return [`EntityId`]s in a
//! stable order for a given store; filtering by kind is left to the caller.
//!
//! [`EntityId`]: crate::store::EntityId

pub(crate) mod suffix;
pub(crate) mod trie;

pub use suffix::{InfixTrie, MIN_INFIX_LENGTH};
pub use trie::PrefixTrie;
