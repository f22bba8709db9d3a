//! Autocomplete suggestions and scoped lookups for the front-end.

use crate::doc::JassDoc;
use crate::entity::{Entity, Kind};
use crate::origin::EntityOrigin;
use std::fmt;
use std::str::FromStr;

/// Maximum number of suggestions a front-end can display.
pub const MAX_SUGGESTIONS: usize = 25;

/// What a command searches over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scope {
    /// Everything
    #[default]
    Entity,
    /// Natives and BJ functions
    Function,
    /// Bodiless declarations from `common.j`
    Native,
    /// Functions from `blizzard.j`
    Bj,
    Type,
    /// Globals and constants
    Property,
}

impl Scope {
    pub const fn kind(self) -> Kind {
        match self {
            Self::Entity => Kind::Entity,
            Self::Function | Self::Native | Self::Bj => Kind::Method,
            Self::Type => Kind::Type,
            Self::Property => Kind::Property,
        }
    }

    /// Whether an entity of the right kind belongs in autocomplete results.
    fn suggests(self, entity: &Entity) -> bool {
        let source = entity.source_file.to_lowercase();
        match self {
            Self::Native => source.contains("common.j"),
            Self::Bj => source.contains("blizzard.j"),
            _ => true,
        }
    }

    /// Whether an exactly looked-up entity answers a command in this scope.
    fn accepts(self, entity: &Entity) -> bool {
        let has_body = entity.as_method().map(|method| method.has_body);
        match self {
            Self::Native => has_body == Some(false),
            Self::Bj => has_body == Some(true),
            _ => true,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Entity => "entity",
            Self::Function => "function",
            Self::Native => "native",
            Self::Bj => "bj",
            Self::Type => "type",
            Self::Property => "value",
        })
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "entity" | "search" | "any" => Ok(Self::Entity),
            "function" | "fn" => Ok(Self::Function),
            "native" => Ok(Self::Native),
            "bj" => Ok(Self::Bj),
            "type" => Ok(Self::Type),
            "value" | "property" => Ok(Self::Property),
            other => Err(format!(
                "unknown scope '{}' (expected entity, function, native, bj, type or value)",
                other
            )),
        }
    }
}

/// One autocomplete entry: what the user sees and what gets submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub value: String,
}

impl Suggestion {
    pub fn for_entity(entity: &Entity) -> Self {
        Self {
            label: format!("{}{}", EntityOrigin::of(entity).label_prefix(), entity.name),
            value: entity.name.clone(),
        }
    }
}

/// Up to [`MAX_SUGGESTIONS`] suggestions for `input` within `scope`.
pub fn suggest(doc: &JassDoc, scope: Scope, input: &str) -> Vec<Suggestion> {
    doc.search(scope.kind(), input)
        .into_iter()
        .filter(|entity| scope.suggests(entity))
        .take(MAX_SUGGESTIONS)
        .map(Suggestion::for_entity)
        .collect()
}

/// Exact lookup for a command in `scope`.
///
/// Natives must be bodiless and BJ functions must have a body.
pub fn lookup<'a>(doc: &'a JassDoc, scope: Scope, name: &str) -> Option<&'a Entity> {
    doc.try_get(scope.kind(), name)
        .filter(|entity| scope.accepts(entity))
}
