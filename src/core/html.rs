// src/core/html.rs
//
// Thin helpers over `scraper` for the handful of DOM operations the page
// specs need: selector parsing with a useful error, textContent, indexed
// lookups that fail loudly, and the HTML → text round trip.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, SheetError};

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| {
        SheetError::Selector { selector: s!(css), reason: e.to_string() }.into()
    })
}

/// DOM `textContent`: every descendant text node, concatenated.
pub fn text_of(el: ElementRef) -> String {
    el.text().collect()
}

/// Element children only (DOM `children`, as opposed to `childNodes`).
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> + 'a {
    el.children().filter_map(ElementRef::wrap)
}

pub fn is_tag(el: ElementRef, name: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(name)
}

/// All matches of a static selector, in document order.
pub fn select_all<'a>(doc: &'a Html, css: &'static str) -> Result<Vec<ElementRef<'a>>> {
    let sel = selector(css)?;
    Ok(doc.select(&sel).collect())
}

/// First match under `el`, or a `Missing` error naming what was wanted.
pub fn find_in<'a>(el: ElementRef<'a>, css: &'static str, what: &'static str) -> Result<ElementRef<'a>> {
    let sel = selector(css)?;
    el.select(&sel)
        .next()
        .ok_or_else(|| SheetError::Missing { what, selector: css }.into())
}

/// Parse a fragment and keep only its text (markup dropped, entities decoded).
pub fn fragment_text(fragment: &str) -> String {
    let doc = Html::parse_fragment(fragment);
    text_of(doc.root_element())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_text_drops_markup_and_decodes_entities() {
        assert_eq!(fragment_text("a <b>bold</b> &amp; <i>it</i>"), "a bold & it");
        assert_eq!(fragment_text("plain"), "plain");
    }

    #[test]
    fn find_in_reports_missing_selector() {
        let doc = Html::parse_document("<div class=a><span>x</span></div>");
        let err = find_in(doc.root_element(), ".nope", "thing").unwrap_err();
        assert_eq!(err.to_string(), "thing not found (selector `.nope`)");
    }

    #[test]
    fn child_elements_skips_text_nodes() {
        let doc = Html::parse_fragment("<ol>one<li>a</li> two <li>b</li></ol>");
        let ol = select_all(&doc, "ol").unwrap()[0];
        let names: Vec<String> = child_elements(ol).map(text_of).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(selector("..[").is_err());
    }
}
