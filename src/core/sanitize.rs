// src/core/sanitize.rs
use std::sync::LazyLock;

use regex::Regex;

/// Leftovers of the forum's `[codeline]` markup after it has been through
/// the HTML renderer: ` bbc_codeline ` / ` end_bbc_codeline ` class names
/// bleeding into text.
static CODELINE_ARTIFACT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+(end_)?bbc_codeline\s+").unwrap());

pub fn strip_codeline_artifacts(s: &str) -> String {
    CODELINE_ARTIFACT.replace_all(s, " ").into_owned()
}

/// Upper-case the first character if it is an ASCII word character; leave the rest.
pub fn title_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() || c == '_' => {
            let mut out = s!(c.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        _ => s!(s),
    }
}
