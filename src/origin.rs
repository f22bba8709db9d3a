//! Classification of entities by the script file that declares them.

use crate::entity::Entity;

/// Script file an entity comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityOrigin {
    /// `common.j`: engine natives, types and constants
    Common,
    /// `blizzard.j`: BJ helper functions and globals
    Blizzard,
    /// `common.ai`: AI natives
    Ai,
    Unknown,
}

impl EntityOrigin {
    pub fn of(entity: &Entity) -> Self {
        Self::from_source_file(&entity.source_file)
    }

    pub fn from_source_file(source_file: &str) -> Self {
        if source_file.eq_ignore_ascii_case("common.j") {
            Self::Common
        } else if source_file.eq_ignore_ascii_case("blizzard.j") {
            Self::Blizzard
        } else if source_file.eq_ignore_ascii_case("common.ai") {
            Self::Ai
        } else {
            Self::Unknown
        }
    }

    /// Label prefix shown in front of suggestions from this origin.
    pub const fn label_prefix(self) -> &'static str {
        match self {
            Self::Blizzard => "(BJ) ",
            Self::Ai => "(AI) ",
            Self::Common | Self::Unknown => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;

    #[rstest]
    #[case("common.j", EntityOrigin::Common)]
    #[case("Common.J", EntityOrigin::Common)]
    #[case("blizzard.j", EntityOrigin::Blizzard)]
    #[case("BLIZZARD.J", EntityOrigin::Blizzard)]
    #[case("common.ai", EntityOrigin::Ai)]
    #[case("war3map.j", EntityOrigin::Unknown)]
    #[case("", EntityOrigin::Unknown)]
    fn test_from_source_file(#[case] file: &str, #[case] expected: EntityOrigin) {
        check!(EntityOrigin::from_source_file(file) == expected);
    }

    #[test]
    fn test_label_prefix() {
        check!(EntityOrigin::Blizzard.label_prefix() == "(BJ) ");
        check!(EntityOrigin::Ai.label_prefix() == "(AI) ");
        check!(EntityOrigin::Common.label_prefix().is_empty());
    }
}
