// src/specs/entry.rs
//! Splits a list entry into name, description and tags.
//!
//! Sheet features look like
//! `<li><feat>Name</feat> free text with <tech>fire</tech> markers …</li>`;
//! inventory items use `<subheader>` for the name. The name element and the
//! inline `<tech>` markers come out as fields, everything else is flattened
//! to plain text.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Node};

use crate::core::html::{fragment_text, is_tag, selector, text_of};
use crate::core::sanitize::strip_codeline_artifacts;
use crate::error::Result;
use crate::model::Feature;

pub const TAG: &str = "tech";

static TAG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<tech>.*?</tech>").unwrap());

/// Pull a `Feature` out of `el`, taking the child element named `name_tag`
/// as the name. A missing name element gives an empty name.
pub fn describe(el: ElementRef, name_tag: &str) -> Result<Feature> {
    let tag_sel = selector(TAG)?;
    let tags: Vec<String> = el
        .select(&tag_sel)
        .map(|t| text_of(t).trim().to_string())
        .collect();

    let mut name: Option<String> = None;
    let mut fragment = s!();

    for node in el.children() {
        match node.value() {
            Node::Element(_) => {
                let Some(child) = ElementRef::wrap(node) else { continue };
                if is_tag(child, name_tag) {
                    name = Some(text_of(child));
                } else if !is_tag(child, TAG) {
                    let inner = child.inner_html();
                    if inner.is_empty() {
                        fragment.push_str(&text_of(child));
                    } else {
                        fragment.push_str(&TAG_RUN.replace_all(&inner, ""));
                    }
                }
            }
            Node::Text(t) => fragment.push_str(t),
            Node::Comment(c) => fragment.push_str(c),
            _ => {}
        }
    }

    let name = match name {
        Some(n) => n.trim().to_string(),
        None => {
            logd!("Entry: no <{}> name element; using empty name", name_tag);
            s!()
        }
    };

    Ok(Feature {
        name,
        description: clean_description(&fragment),
        tags,
    })
}

/// HTML → text round trip, then drop codeline leftovers and trim.
pub fn clean_description(fragment: &str) -> String {
    strip_codeline_artifacts(&fragment_text(fragment))
        .trim()
        .to_string()
}
