//! Plain-text rendering of entities for lookup responses.

use crate::entity::{Details, Entity, Method, Property};
use std::fmt::Write as _;

/// Longest field a front-end will display.
pub const MAX_FIELD_LENGTH: usize = 1024;

const FIELD_TOO_LONG: &str = "Too long to display. See the online documentation.";

/// Replace fields longer than [`MAX_FIELD_LENGTH`] characters with a notice.
pub fn cap_field(field: &str) -> &str {
    if field.chars().count() > MAX_FIELD_LENGTH {
        FIELD_TOO_LONG
    } else {
        field
    }
}

/// Render an entity as a multi-section text report.
pub fn render(entity: &Entity) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({})", entity.name, entity.source_file);

    if let Some(description) = &entity.description {
        let _ = writeln!(out, "\n{}", cap_field(description));
    }

    match &entity.details {
        Details::Method(method) => render_method(&mut out, method, &entity.patch),
        Details::Type => field(&mut out, "Patch", &entity.patch),
        Details::Property(property) => render_property(&mut out, property, &entity.patch),
    }

    for bug in &entity.bugs {
        section(&mut out, "Bug", bug);
    }
    for note in &entity.notes {
        section(&mut out, "Note", note);
    }

    out
}

fn render_method(out: &mut String, method: &Method, patch: &str) {
    if !method.parameters.is_empty() {
        let multiline = method
            .parameters
            .iter()
            .any(|p| p.description.as_deref().is_some_and(|d| d.contains('\n')));

        if multiline {
            for parameter in &method.parameters {
                let title = format!("{} {}", parameter.type_name, parameter.name);
                section(out, &title, parameter.description.as_deref().unwrap_or(""));
            }
        } else {
            let mut list = String::new();
            for (i, parameter) in method.parameters.iter().enumerate() {
                let _ = write!(list, "{}. {} {}", i + 1, parameter.type_name, parameter.name);
                if let Some(description) = &parameter.description {
                    let _ = write!(list, " - {}", description);
                }
                list.push('\n');
            }
            section(out, "Parameters", list.trim_end());
        }
    }

    field(out, "Returns", &method.return_type);
    field(out, "Patch", patch);
    if method.is_async {
        field(out, "Async", "yes");
    }
    if !method.events.is_empty() {
        let events: Vec<_> = method.events.iter().map(String::as_str).collect();
        field(out, "Events", &events.join(", "));
    }
}

fn render_property(out: &mut String, property: &Property, patch: &str) {
    let array = if property.is_array { " array" } else { "" };
    field(out, "Type", &format!("{}{}", property.type_name, array));
    if !property.is_array {
        let label = if property.is_constant {
            "Constant"
        } else {
            "Initial value"
        };
        field(out, label, property.value.as_deref().unwrap_or("N/A"));
    }
    field(out, "Patch", patch);
}

fn field(out: &mut String, name: &str, value: &str) {
    let _ = writeln!(out, "{}: {}", name, value);
}

fn section(out: &mut String, title: &str, body: &str) {
    let _ = writeln!(out, "\n{}\n{}", title, cap_field(body));
}
