// src/specs/sheet.rs
//! Character sheet page.
//!
//! - `.cs-feats ol` ×3: traits, passives, combat maneuvers (`<feat>` names)
//! - `.cs-weapon-rank`: melee first, ranged after
//! - `.cs-tech`: icon class → kind, `.cs-tech-name`, `.cs-tech-prof`
//! - stats: not in the DOM; an inline script builds them from
//!   `pstatdesc` / `pstatmod` div pairs, so they are read from script text.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use crate::core::html::{child_elements, find_in, select_all, text_of};
use crate::core::sanitize::title_first;
use crate::error::{Result, SheetError};
use crate::model::{CharacterSheet, Feature, Tech, TechKind};

use super::entry::describe;

pub const FEAT_LISTS: &str = ".cs-feats ol";
pub const WEAPON_RANKS: &str = ".cs-weapon-rank";
pub const TECHS: &str = ".cs-tech";
pub const TECH_ICON: &str = ".cs-tech-type i";
pub const TECH_NAME: &str = ".cs-tech-name";
pub const TECH_PROF: &str = ".cs-tech-prof";
pub const FEAT_NAME_TAG: &str = "feat";

// Newline between the divs may be real or an escaped `\n` in a JS string.
static STAT_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<div class="pstatdesc">(.*?)</div>(?:\r?\n|\\n)<div class="pstatmod">(.*?)</div>"#)
        .unwrap()
});

pub fn parse(html: &str) -> Result<CharacterSheet> {
    let doc = Html::parse_document(html);

    let lists = select_all(&doc, FEAT_LISTS)?;
    if lists.len() < 3 {
        return Err(SheetError::TooFew {
            what: "feature lists",
            selector: FEAT_LISTS,
            expected: 3,
            found: lists.len(),
        }
        .into());
    }

    let sheet = CharacterSheet {
        traits: features(lists[0])?,
        passives: features(lists[1])?,
        maneuvers: features(lists[2])?,
        accuracy: accuracy(&doc)?,
        stats: stats(&doc)?,
        techs: techs(&doc)?,
    };

    logf!(
        "Sheet: traits={} passives={} maneuvers={} techs={} stats={}",
        sheet.traits.len(),
        sheet.passives.len(),
        sheet.maneuvers.len(),
        sheet.techs.len(),
        sheet.stats.len()
    );
    Ok(sheet)
}

fn features(list: ElementRef) -> Result<Vec<Feature>> {
    child_elements(list)
        .map(|li| describe(li, FEAT_NAME_TAG))
        .collect()
}

fn accuracy(doc: &Html) -> Result<Vec<String>> {
    Ok(select_all(doc, WEAPON_RANKS)?
        .into_iter()
        .enumerate()
        .map(|(i, el)| {
            let kind = if i == 0 { "Melee" } else { "Ranged" };
            format!("{} ({})", kind, text_of(el).trim())
        })
        .collect())
}

fn techs(doc: &Html) -> Result<Vec<Tech>> {
    select_all(doc, TECHS)?
        .into_iter()
        .map(|el| -> Result<Tech> {
            let icon = find_in(el, TECH_ICON, "tech type icon")?;
            let kind = TechKind::from_icon_class(icon.value().attr("class").unwrap_or(""));
            let name = title_first(text_of(find_in(el, TECH_NAME, "tech name")?).trim());
            let proficiency = text_of(find_in(el, TECH_PROF, "tech proficiency")?).trim().to_string();
            if kind.is_none() {
                logd!("Sheet: unknown tech icon for {}", name);
            }
            Ok(Tech { kind, name, proficiency })
        })
        .collect()
}

/// `STAT (mod)` pairs from the first script that carries any.
fn stats(doc: &Html) -> Result<Vec<String>> {
    for script in select_all(doc, "script")? {
        let src = text_of(script);
        let found = parse_stat_pairs(&src);
        if !found.is_empty() {
            return Ok(found);
        }
    }
    logd!("Sheet: no stat script found");
    Ok(Vec::new())
}

pub fn parse_stat_pairs(src: &str) -> Vec<String> {
    STAT_PAIR
        .captures_iter(src)
        .map(|c| format!("{} ({})", c[1].to_uppercase(), &c[2]))
        .collect()
}
