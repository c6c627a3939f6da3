// src/specs/profile.rs
//! Profile page: the character-panel nav (`.cpnavin`) links to the sheet
//! first and the inventory second.

use scraper::Html;

use crate::core::html::select_all;
use crate::core::net::resolve_link;
use crate::error::{Result, SheetError};

pub const NAV_LINKS: &str = ".cpnavin a";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterLinks {
    pub sheet: String,
    pub inventory: String,
}

pub fn character_links(html: &str, profile_url: &str) -> Result<CharacterLinks> {
    let doc = Html::parse_document(html);
    let hrefs: Vec<&str> = select_all(&doc, NAV_LINKS)?
        .into_iter()
        .filter_map(|a| a.value().attr("href"))
        .collect();

    if hrefs.len() < 2 {
        return Err(SheetError::TooFew {
            what: "character links",
            selector: NAV_LINKS,
            expected: 2,
            found: hrefs.len(),
        }
        .into());
    }

    let links = CharacterLinks {
        sheet: resolve_link(profile_url, hrefs[0])?,
        inventory: resolve_link(profile_url, hrefs[1])?,
    };
    logd!("Profile: sheet={} inventory={}", links.sheet, links.inventory);
    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://tpk.jcink.net/index.php?showuser=45";

    #[test]
    fn first_two_nav_links_resolved() {
        let html = r#"<div class="cpnavin">
            <a href="index.php?act=Pages&amp;pid=12">sheet</a>
            <a href="/index.php?act=Pages&amp;pid=13">inventory</a>
            <a href="index.php?showtopic=1">extra</a>
        </div>"#;
        let links = character_links(html, BASE).unwrap();
        assert_eq!(links.sheet, "http://tpk.jcink.net/index.php?act=Pages&pid=12");
        assert_eq!(links.inventory, "http://tpk.jcink.net/index.php?act=Pages&pid=13");
    }

    #[test]
    fn one_link_is_not_enough() {
        let html = r#"<div class="cpnavin"><a href="a.html">sheet</a></div>"#;
        let err = character_links(html, BASE).unwrap_err();
        assert!(err.to_string().contains("found 1"));
    }
}
