//! Documentation entities: natives, functions, types and globals.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One documented item of the scripting API.
///
/// The common record is shared by every variant; variant-specific data lives
/// in [`Details`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    /// File the entity was declared in (`common.j`, `blizzard.j`, ...)
    pub source_file: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub bugs: Vec<String>,
    #[serde(default)]
    pub notes: Vec<String>,
    #[serde(default)]
    pub source_code: String,
    /// Game patch that introduced the entity
    #[serde(default)]
    pub patch: String,
    #[serde(flatten)]
    pub details: Details,
}

/// Variant payload of an [`Entity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Details {
    Method(Method),
    Type,
    Property(Property),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Method {
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    #[serde(default = "nothing")]
    pub return_type: String,
    #[serde(default)]
    pub is_async: bool,
    #[serde(default)]
    pub is_pure: bool,
    /// `false` for `native` declarations, `true` for functions with a body
    #[serde(default)]
    pub has_body: bool,
    #[serde(default)]
    pub events: BTreeSet<String>,
}

fn nothing() -> String {
    "nothing".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "type")]
    pub type_name: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub is_constant: bool,
    #[serde(default)]
    pub value: Option<String>,
}

/// Entity kind requested by a lookup or search.
///
/// `Entity` matches every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Entity,
    Method,
    Type,
    Property,
}

impl Kind {
    /// Whether `entity` is of this kind.
    pub const fn matches(self, entity: &Entity) -> bool {
        matches!(
            (self, &entity.details),
            (Self::Entity, _)
                | (Self::Method, Details::Method(_))
                | (Self::Type, Details::Type)
                | (Self::Property, Details::Property(_))
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Entity => "entity",
            Self::Method => "function",
            Self::Type => "type",
            Self::Property => "property",
        })
    }
}

impl Entity {
    /// Kind of this entity (never [`Kind::Entity`]).
    pub const fn kind(&self) -> Kind {
        match self.details {
            Details::Method(_) => Kind::Method,
            Details::Type => Kind::Type,
            Details::Property(_) => Kind::Property,
        }
    }

    pub const fn as_method(&self) -> Option<&Method> {
        match &self.details {
            Details::Method(method) => Some(method),
            _ => None,
        }
    }

    pub const fn as_property(&self) -> Option<&Property> {
        match &self.details {
            Details::Property(property) => Some(property),
            _ => None,
        }
    }

    pub const fn is_type(&self) -> bool {
        matches!(self.details, Details::Type)
    }

    /// Case-folded name used by the case-insensitive lookup and the tries.
    pub fn folded_name(&self) -> String {
        fold(&self.name)
    }
}

/// Case folding shared by every index.
pub fn fold(text: &str) -> String {
    text.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[test]
    fn test_deserialize_tagged_variants() {
        let json = r#"[
            {"kind": "method", "name": "KillUnit", "source_file": "common.j",
             "parameters": [{"type": "unit", "name": "whichUnit"}], "return_type": "nothing"},
            {"kind": "type", "name": "unit", "source_file": "common.j", "patch": "1.00"},
            {"kind": "property", "name": "bj_PI", "source_file": "blizzard.j",
             "type": "real", "is_constant": true, "value": "3.14159"}
        ]"#;

        let entities: Vec<Entity> = serde_json::from_str(json).unwrap();
        check!(entities.len() == 3);
        check!(entities[0].kind() == Kind::Method);
        check!(entities[0].as_method().unwrap().parameters[0].name == "whichUnit");
        check!(entities[1].is_type());
        check!(entities[1].patch == "1.00");
        let property = entities[2].as_property().unwrap();
        check!(property.is_constant);
        check!(property.value.as_deref() == Some("3.14159"));
    }

    #[rstest]
    #[case(Kind::Entity, true, true, true)]
    #[case(Kind::Method, true, false, false)]
    #[case(Kind::Type, false, true, false)]
    #[case(Kind::Property, false, false, true)]
    fn test_kind_matches(
        #[case] kind: Kind,
        #[case] method: bool,
        #[case] ty: bool,
        #[case] property: bool,
    ) {
        let base = |details| Entity {
            name: "x".to_string(),
            source_file: "common.j".to_string(),
            description: None,
            bugs: vec![],
            notes: vec![],
            source_code: String::new(),
            patch: String::new(),
            details,
        };
        let prop = Property {
            type_name: "integer".to_string(),
            is_array: false,
            is_constant: false,
            value: None,
        };

        check!(kind.matches(&base(Details::Method(Method::default()))) == method);
        check!(kind.matches(&base(Details::Type)) == ty);
        check!(kind.matches(&base(Details::Property(prop))) == property);
    }
}
