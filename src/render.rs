//! Placeholder rendering for Chisel templates.
//! Replaces literal `${TOKEN}` markers with bound values. Replacement is
//! textual: no escaping, no recursive expansion, and tokens without a
//! binding pass through untouched.

use crate::constants::VIRTUAL_PREFIX;

/// How many occurrences of a placeholder a binding replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occurrence {
    /// Every occurrence in the template
    All,
    /// Only the first occurrence in the template
    First,
}

/// A placeholder key mapped to its replacement value for one render pass.
#[derive(Debug, Clone)]
pub struct Binding {
    key: String,
    value: String,
    occurrence: Occurrence,
}

impl Binding {
    /// Creates a binding replacing every occurrence of `${key}`.
    pub fn all<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self { key: key.into(), value: value.into(), occurrence: Occurrence::All }
    }

    /// Creates a binding replacing only the first occurrence of `${key}`.
    pub fn first<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Self { key: key.into(), value: value.into(), occurrence: Occurrence::First }
    }
}

/// Renders a template by substituting bound placeholders.
///
/// Bindings are applied in order, line by line. Every output line ends with
/// a single newline, including the last one, regardless of the template's
/// own line endings.
///
/// # Arguments
/// * `template` - Template text containing `${TOKEN}` markers
/// * `bindings` - Placeholder bindings for this render pass
///
/// # Returns
/// * `String` - Rendered text
pub fn render(template: &str, bindings: &[Binding]) -> String {
    let mut consumed = vec![false; bindings.len()];
    let mut output = String::with_capacity(template.len());

    for line in template.lines() {
        render_line(line, bindings, &mut consumed, &mut output);
        output.push('\n');
    }

    output
}

/// Substitutes bound placeholders in a single line.
///
/// The line is scanned left to right; an emitted replacement value is never
/// re-scanned. A `${...}` token without a binding passes through, but its
/// interior is still scanned so nested tokens are found.
fn render_line(line: &str, bindings: &[Binding], consumed: &mut [bool], output: &mut String) {
    let mut rest = line;

    while let Some(start) = rest.find("${") {
        output.push_str(&rest[..start]);
        let after_marker = &rest[start + 2..];

        let Some(end) = after_marker.find('}') else {
            // No closing brace anywhere ahead, nothing left to substitute.
            output.push_str(&rest[start..]);
            return;
        };

        let key = &after_marker[..end];
        match lookup(bindings, consumed, key) {
            Some(value) => {
                output.push_str(value);
                rest = &after_marker[end + 1..];
            }
            None => {
                output.push_str("${");
                rest = after_marker;
            }
        }
    }

    output.push_str(rest);
}

fn lookup<'a>(bindings: &'a [Binding], consumed: &mut [bool], key: &str) -> Option<&'a str> {
    for (idx, binding) in bindings.iter().enumerate() {
        if binding.key != key {
            continue;
        }
        match binding.occurrence {
            Occurrence::All => return Some(&binding.value),
            Occurrence::First if !consumed[idx] => {
                consumed[idx] = true;
                return Some(&binding.value);
            }
            Occurrence::First => continue,
        }
    }
    None
}

/// Bindings for rendering the declaration template.
///
/// The upper-cased name is substituted at its first occurrence only; the
/// lower-cased name and the virtual prefix are substituted everywhere.
pub fn declaration_bindings(name: &str, non_overrideable: bool) -> Vec<Binding> {
    let virtual_prefix = if non_overrideable { "" } else { VIRTUAL_PREFIX };
    let mut bindings = vec![
        Binding::all("name", name),
        Binding::first("NAME", name.to_uppercase()),
        Binding::all(VIRTUAL_PREFIX, virtual_prefix),
    ];
    // The prefix token is also keyed by its own value, so a template
    // carrying a bare `${}` collapses when the prefix is empty.
    if non_overrideable {
        bindings.push(Binding::all("", ""));
    }
    bindings
}

/// Bindings for rendering the definition template.
pub fn definition_bindings(name: &str) -> Vec<Binding> {
    vec![Binding::all("name", name)]
}
