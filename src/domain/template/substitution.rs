//! Placeholder substitution engine for template fragments

use std::collections::{BTreeMap, BTreeSet};

/// Placeholder name (without braces) to replacement text
pub type PlaceholderMap = BTreeMap<String, String>;

/// Replace every `{name}` marker whose name is a key of `placeholders`.
///
/// The fragment is scanned once from left to right, so text inserted for one
/// marker is never scanned again. Unknown markers and stray braces are copied
/// verbatim. Values are inserted as-is, without any escaping.
pub fn substitute(template: &str, placeholders: &PlaceholderMap) -> String {
    let mut result = String::with_capacity(template.len());

    scan(template, |segment| match segment {
        Segment::Text(text) => result.push_str(text),
        Segment::Marker(name) => match placeholders.get(name) {
            Some(value) => result.push_str(value),
            None => {
                result.push('{');
                result.push_str(name);
                result.push('}');
            }
        },
    });

    result
}

/// Collect the names of all placeholder markers in a fragment.
///
/// Only identifier-like names (alphanumeric, `_`, `-`) are reported, so CSS
/// blocks such as `{ margin: 0 }` inside a `<style>` element are skipped.
pub fn placeholder_names(template: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();

    scan(template, |segment| {
        if let Segment::Marker(name) = segment {
            if is_identifier(name) {
                names.insert(name.to_string());
            }
        }
    });

    names
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

enum Segment<'a> {
    Text(&'a str),
    Marker(&'a str),
}

fn scan<'a>(template: &'a str, mut visit: impl FnMut(Segment<'a>)) {
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        if open > 0 {
            visit(Segment::Text(&rest[..open]));
        }

        let after = &rest[open + 1..];
        match after.find(|c: char| c == '{' || c == '}') {
            Some(close) if after.as_bytes()[close] == b'}' => {
                visit(Segment::Marker(&after[..close]));
                rest = &after[close + 1..];
            }
            // Unclosed brace, or a nested `{` that starts the next candidate
            _ => {
                visit(Segment::Text("{"));
                rest = after;
            }
        }
    }

    if !rest.is_empty() {
        visit(Segment::Text(rest));
    }
}
