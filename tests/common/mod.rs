//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `entities`: a small raw corpus mixing natives, BJ functions, types and globals
//! - `doc`: the same corpus built into a [`JassDoc`]
//! - `corpus_file`: the corpus written to a temporary JSON file

use jassdoc_index::{Details, Entity, JassDoc, Method, Parameter, Property};
use rstest::fixture;
use std::path::Path;
use tempfile::NamedTempFile;

#[allow(dead_code)] // Helpers used across different integration test crates
pub fn entity(name: &str, source_file: &str, details: Details) -> Entity {
    Entity {
        name: name.to_string(),
        source_file: source_file.to_string(),
        description: None,
        bugs: vec![],
        notes: vec![],
        source_code: String::new(),
        patch: "1.00".to_string(),
        details,
    }
}

#[allow(dead_code)]
pub fn native(name: &str) -> Entity {
    entity(name, "common.j", Details::Method(Method::default()))
}

#[allow(dead_code)]
pub fn bj(name: &str) -> Entity {
    entity(
        name,
        "blizzard.j",
        Details::Method(Method {
            has_body: true,
            ..Method::default()
        }),
    )
}

#[allow(dead_code)]
pub fn global(name: &str, type_name: &str) -> Entity {
    entity(
        name,
        "blizzard.j",
        Details::Property(Property {
            type_name: type_name.to_string(),
            is_array: false,
            is_constant: false,
            value: None,
        }),
    )
}

#[fixture]
pub fn entities() -> Vec<Entity> {
    let mut kill_unit = native("KillUnit");
    kill_unit.description = Some("kills the\nunit.\n\nNo corpse is left.".to_string());
    kill_unit.source_code = "native KillUnit  takes unit whichUnit returns nothing".to_string();
    if let Details::Method(method) = &mut kill_unit.details {
        method.parameters.push(Parameter {
            type_name: "unit".to_string(),
            name: "whichUnit".to_string(),
            description: Some("the unit".to_string()),
        });
    }

    vec![
        kill_unit,
        native("CreateUnit"),
        bj("CreateUnitAtLocSaveLast"),
        bj("GetLastCreatedUnit"),
        entity("unit", "common.j", Details::Type),
        entity("Foo", "common.j", Details::Type),
        native("FOO"),
        native("foo"),
        global("bj_lastCreatedUnit", "unit"),
        entity("GetUnitsInRangeOfLocAll", "common.ai", Details::Method(Method::default())),
    ]
}

#[fixture]
pub fn doc(entities: Vec<Entity>) -> JassDoc {
    jassdoc_index::tracing::init();
    JassDoc::build(entities)
}

/// A corpus JSON file that lives as long as the returned handle.
#[allow(dead_code)]
#[fixture]
pub fn corpus_file(entities: Vec<Entity>) -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    write_corpus(file.path(), &entities);
    file
}

#[allow(dead_code)]
pub fn write_corpus(path: &Path, entities: &[Entity]) {
    let json = serde_json::to_vec_pretty(entities).expect("Failed to serialize corpus");
    std::fs::write(path, json).expect("Failed to write corpus");
}
