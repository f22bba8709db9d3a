//! In-memory documentation index for the JASS scripting API.
//!
//! A corpus of entities is normalized once and indexed for exact, prefix and
//! substring lookup. [`JassDoc`] is the frozen query surface; [`DocHandle`]
//! publishes and swaps snapshots across reloads.

pub mod autocomplete;
pub mod corpus;
pub mod doc;
pub mod entity;
pub mod error;
pub mod format;
pub mod lookup;
pub mod normalize;
pub mod origin;
pub mod search;
pub mod state;
pub mod store;
pub mod tracing;
pub mod worker;

pub use autocomplete::{MAX_SUGGESTIONS, Scope, Suggestion};
pub use doc::JassDoc;
pub use entity::{Details, Entity, Kind, Method, Parameter, Property};
pub use error::{LoadError, LookupError};
pub use origin::EntityOrigin;
pub use state::DocHandle;
pub use store::{EntityId, EntityStore};
