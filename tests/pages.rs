// tests/pages.rs
//
// Page specs against saved pages in tests/fixtures.
//
use std::fs;

use sheet_scrape::model::TechKind;
use sheet_scrape::specs::{inventory, profile, sheet};

fn fixture(name: &str) -> String {
    fs::read_to_string(format!("tests/fixtures/{name}")).unwrap()
}

#[test]
fn profile_links_point_at_sheet_then_inventory() {
    let links = profile::character_links(
        &fixture("profile.html"),
        "http://forum.test/index.php?showuser=45",
    )
    .unwrap();
    assert_eq!(links.sheet, "http://forum.test/sheet.html");
    assert_eq!(links.inventory, "http://forum.test/inventory.html");
}

#[test]
fn sheet_feature_groups() {
    let cs = sheet::parse(&fixture("sheet.html")).unwrap();

    let names: Vec<&str> = cs.traits.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Stubborn", "Night Eyes"]);
    assert_eq!(cs.traits[0].description, "Advantage on saves against being moved.");
    assert_eq!(cs.traits[0].tags, vec!["defense"]);
    assert_eq!(cs.traits[1].description, "Sees in dim light as if it were bright.");
    assert!(cs.traits[1].tags.is_empty());

    assert_eq!(cs.passives.len(), 1);
    assert_eq!(cs.passives[0].description, "Once per thread, heal 1d6 HP.");
    assert_eq!(cs.passives[0].tags, vec!["heal", "self"]);

    assert_eq!(cs.maneuvers[0].name, "Shove");
    assert_eq!(cs.maneuvers[0].description, "Push a target  one square.");
    assert_eq!(cs.maneuvers[0].tags, vec!["melee"]);
}

#[test]
fn sheet_accuracy_stats_and_techs() {
    let cs = sheet::parse(&fixture("sheet.html")).unwrap();

    assert_eq!(cs.accuracy, vec!["Melee (B)", "Ranged (D)"]);
    assert_eq!(cs.stats, vec!["STR (+3)", "DEX (+1)", "WIS (-1)"]);

    let kinds: Vec<Option<TechKind>> = cs.techs.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![Some(TechKind::Off), Some(TechKind::Def), Some(TechKind::Com)]);
    assert_eq!(cs.techs[0].name, "Cleave");
    assert_eq!(cs.techs[2].name, "Wolf call");
    assert_eq!(cs.techs[1].proficiency, "Novice");
}

#[test]
fn inventory_sections_stop_at_crafting() {
    let inv = inventory::parse(&fixture("inventory.html")).unwrap();
    assert_eq!(inv.ac, "15");
    assert_eq!(inv.hp, "28");

    let names: Vec<&str> = inv.sections.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["weapons", "equipment", "trinkets", "consumables"]);

    let axe = &inv.items("weapons")[0];
    assert_eq!(axe.rank, "B");
    assert_eq!(axe.feature.name, "Hand Axe");
    assert_eq!(axe.feature.description, "Light and throwable.");
    assert_eq!(axe.feature.tags, vec!["slash", "thrown"]);

    assert_eq!(inv.items("equipment")[0].feature.description, "Rings of iron.");
    assert!(inv.items("trinkets").is_empty());
    assert_eq!(inv.items("consumables").len(), 1);
    assert!(inv.sections.iter().all(|s| s.items.iter().all(|i| i.feature.name != "Iron Ore")));
}

#[test]
fn wrong_page_is_an_error_not_a_panic() {
    // inventory page handed to the sheet parser and vice versa
    assert!(sheet::parse(&fixture("inventory.html")).is_err());
    assert!(inventory::parse(&fixture("sheet.html")).is_err());
    assert!(profile::character_links(&fixture("sheet.html"), "http://forum.test/").is_err());
}
