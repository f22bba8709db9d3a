//! Text cleanup for descriptions, bugs, notes and source listings.
//!
//! Raw documentation text is hard-wrapped and uses pandoc-style code fences
//! (```` ```{.lua} ````). Cleanup works on the text split at every fence:
//! even segments are prose, odd segments are code, regardless of whether the
//! fences balance.
//!
//! Prose segments get their hard wraps joined:
//! - a lone line break becomes a space, unless a neighbouring character is one
//!   of `` ` ``, `|`, `*`, `-` (lists, tables, emphasis) or the break touches a fence
//! - a run of two or more line breaks becomes exactly one line break
//! - the first character is upper-cased
//!
//! Code segments lose the braces of a leading `{.lang}` tag.

/// Code fence marker used by the documentation corpus.
pub const FENCE: &str = "```";

/// Characters that pin an adjacent lone line break in place.
const MARKERS: &[char] = &['`', '|', '*', '-'];

/// Normalize an optional description. `None` stays `None`.
pub fn normalize(raw: Option<&str>) -> Option<String> {
    raw.map(clean)
}

/// Clean a raw description. Total over arbitrary input.
pub fn clean(raw: &str) -> String {
    let segments: Vec<&str> = raw.trim().split(FENCE).collect();
    let last = segments.len() - 1;

    let cleaned: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            if i % 2 == 0 {
                clean_prose(segment, i > 0, i < last)
            } else {
                strip_lang_tag(segment)
            }
        })
        .collect();

    cleaned.join(FENCE)
}

/// Join hard-wrapped prose and capitalise it.
///
/// `fenced_before` / `fenced_after` tell whether a fence marker sits directly
/// before or after this segment in the original text.
fn clean_prose(segment: &str, fenced_before: bool, fenced_after: bool) -> String {
    let chars: Vec<char> = segment.chars().collect();
    let mut out = String::with_capacity(segment.len());
    let mut i = 0;

    while i < chars.len() {
        if chars[i] != '\n' {
            out.push(chars[i]);
            i += 1;
            continue;
        }

        let run_end = chars[i..]
            .iter()
            .position(|&c| c != '\n')
            .map_or(chars.len(), |offset| i + offset);

        let keep_break = run_end - i >= 2
            || pins_break(i.checked_sub(1).map(|p| chars[p]), fenced_before)
            || pins_break(chars.get(run_end).copied(), fenced_after);
        out.push(if keep_break { '\n' } else { ' ' });
        i = run_end;
    }

    capitalize_first(&out)
}

/// Whether a neighbour of a lone line break keeps it from being joined.
/// `None` means the break sits at the segment edge.
fn pins_break(neighbour: Option<char>, fenced: bool) -> bool {
    match neighbour {
        Some(c) => MARKERS.contains(&c),
        None => fenced,
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `{.lua}\nprint(1)` becomes `lua\nprint(1)`.
fn strip_lang_tag(segment: &str) -> String {
    let Some(rest) = segment.strip_prefix("{.") else {
        return segment.to_string();
    };
    match rest.find('}') {
        Some(end) => format!("{}{}", &rest[..end], &rest[end + 1..]),
        None => segment.to_string(),
    }
}

/// Collapse interior whitespace runs in every line of a source listing.
///
/// A run of two or more whitespace characters becomes one space, except that
/// the very first character of a line is never rewritten.
pub fn compact_source(source: &str) -> String {
    source
        .split('\n')
        .map(compact_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn compact_line(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut chars = line.chars().peekable();

    // The first character is kept as-is, even when it is whitespace.
    if let Some(first) = chars.next() {
        out.push(first);
    }

    while let Some(c) = chars.next() {
        if !c.is_whitespace() {
            out.push(c);
            continue;
        }

        let mut run = 1;
        while chars.next_if(|next| next.is_whitespace()).is_some() {
            run += 1;
        }

        if run >= 2 {
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    out
}
