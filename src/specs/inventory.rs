// src/specs/inventory.rs
//! Inventory page.
//!
//! `.inv-stat-num` holds AC then HP. The first `.inv-section` is a flat run
//! of `<subheader>` section titles and `.inv-item` rows; the run ends at the
//! "crafting" header. Each item row is `[icon] [rank] [body]`, with the item
//! name as a `<subheader>` inside the body.

use scraper::{ElementRef, Html};

use crate::core::html::{child_elements, find_in, is_tag, select_all, text_of};
use crate::error::{Result, SheetError};
use crate::model::{Inventory, InventoryItem, InventorySection};

use super::entry::describe;

pub const STAT_NUMS: &str = ".inv-stat-num";
pub const SECTION: &str = ".inv-section";
pub const ITEM_CLASS: &str = "inv-item";
pub const HEADER_TAG: &str = "subheader";
pub const STOP_AT: &str = "crafting";

pub fn parse(html: &str) -> Result<Inventory> {
    let doc = Html::parse_document(html);

    let nums = select_all(&doc, STAT_NUMS)?;
    if nums.len() < 2 {
        return Err(SheetError::TooFew {
            what: "AC/HP values",
            selector: STAT_NUMS,
            expected: 2,
            found: nums.len(),
        }
        .into());
    }
    let ac = text_of(nums[0]).trim().to_string();
    let hp = text_of(nums[1]).trim().to_string();

    let section = find_in(doc.root_element(), SECTION, "inventory section")?;
    let sections = sections(section)?;

    logf!(
        "Inventory: hp={} ac={} sections=[{}]",
        hp,
        ac,
        sections
            .iter()
            .map(|s| format!("{}:{}", s.name, s.items.len()))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(Inventory { hp, ac, sections })
}

fn sections(container: ElementRef) -> Result<Vec<InventorySection>> {
    let mut out: Vec<InventorySection> = Vec::new();

    for el in child_elements(container) {
        if text_of(el) == STOP_AT {
            break;
        }

        if is_tag(el, HEADER_TAG) {
            out.push(InventorySection { name: text_of(el).trim().to_string(), items: Vec::new() });
        } else if is_item_row(el) {
            let item = item(el)?;
            match out.last_mut() {
                Some(current) => current.items.push(item),
                None => logd!("Inventory: item {:?} before any section header; skipped", item.feature.name),
            }
        }
    }

    Ok(out)
}

/// The class attribute must be exactly `inv-item`; rows carrying extra
/// classes are not inventory entries.
fn is_item_row(el: ElementRef) -> bool {
    el.value().attr("class") == Some(ITEM_CLASS)
}

fn item(row: ElementRef) -> Result<InventoryItem> {
    let cells: Vec<ElementRef> = child_elements(row).collect();
    if cells.len() < 3 {
        return Err(SheetError::TooFew {
            what: "inventory item cells",
            selector: ".inv-item > *",
            expected: 3,
            found: cells.len(),
        }
        .into());
    }

    Ok(InventoryItem {
        rank: text_of(cells[1]).trim().to_string(),
        feature: describe(cells[2], HEADER_TAG)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <div class="inv-stat-num">14</div><div class="inv-stat-num">32</div>
        <div class="inv-section">
            <div class="inv-item"><img><span>C</span><div><subheader>Stray</subheader></div></div>
            <subheader>weapons</subheader>
            <div class="inv-item">
                <img src="sword.png">
                <span> B </span>
                <div><subheader>Longsword</subheader> A keen blade. <tech>slash</tech></div>
            </div>
            <subheader>trinkets</subheader>
            <subheader>crafting</subheader>
            <div class="inv-item"><img><span>A</span><div><subheader>Hammer</subheader></div></div>
        </div>"#;

    #[test]
    fn sections_items_and_stats() {
        let inv = parse(PAGE).unwrap();
        assert_eq!(inv.ac, "14");
        assert_eq!(inv.hp, "32");

        let names: Vec<&str> = inv.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["weapons", "trinkets"]);

        let sword = &inv.items("weapons")[0];
        assert_eq!(sword.rank, "B");
        assert_eq!(sword.feature.name, "Longsword");
        assert_eq!(sword.feature.description, "A keen blade.");
        assert_eq!(sword.feature.tags, vec!["slash"]);
        assert!(inv.items("trinkets").is_empty());
    }

    #[test]
    fn repeated_header_keeps_later_items() {
        let html = r#"<div class="inv-stat-num">1</div><div class="inv-stat-num">2</div>
            <div class="inv-section">
            <subheader>weapons</subheader>
            <div class="inv-item"><img><span>C</span><div><subheader>First</subheader></div></div>
            <subheader>weapons</subheader>
            <div class="inv-item"><img><span>B</span><div><subheader>Second</subheader></div></div>
            </div>"#;
        let inv = parse(html).unwrap();
        let names: Vec<&str> = inv.items("weapons").iter().map(|i| i.feature.name.as_str()).collect();
        assert_eq!(names, vec!["Second"]);
    }

    #[test]
    fn only_exact_item_class_counts() {
        let html = r#"<div class="inv-stat-num">1</div><div class="inv-stat-num">2</div>
            <div class="inv-section">
            <subheader>weapons</subheader>
            <div class="inv-item locked"><img><span>A</span><div><subheader>Locked</subheader></div></div>
            <div class="inv-item"><img><span>B</span><div><subheader>Open</subheader></div></div>
            </div>"#;
        let inv = parse(html).unwrap();
        let names: Vec<&str> = inv.items("weapons").iter().map(|i| i.feature.name.as_str()).collect();
        assert_eq!(names, vec!["Open"]);
    }

    #[test]
    fn missing_stats_is_an_error() {
        let err = parse(r#"<div class="inv-section"></div>"#).unwrap_err();
        assert!(err.to_string().contains("AC/HP values"));
    }

    #[test]
    fn short_item_row_is_an_error() {
        let html = r#"<div class="inv-stat-num">1</div><div class="inv-stat-num">2</div>
            <div class="inv-section"><subheader>weapons</subheader>
            <div class="inv-item"><span>B</span></div></div>"#;
        assert!(parse(html).is_err());
    }
}
