// src/bbcode.rs
//
// Forum markup for one character build. The layout is fixed: a stat header,
// then one bold heading per feature group / inventory section with one
// collapsed spoiler per entry.

use crate::config::consts::LRM;
use crate::config::options::RenderOptions;
use crate::model::{CharacterBuild, Feature, InventoryItem, Tech};

const OPEN: &str = r#"[dohtml]<style>.ibInstaStat details:not([open]) + br {display: none;}</style> <div class="ibInstaStat">[/dohtml][bdark]"#;
const CLOSE: &str = "[/bdark][dohtml]</div>[/dohtml]";

/// Inventory sections in output order: (page section name, heading).
pub const INVENTORY_SECTIONS: &[(&str, &str)] = &[
    ("weapons", "WEAPONS"),
    ("equipment", "ARMOR"),
    ("trinkets", "TRINKETS"),
    ("consumables", "CONSUMABLES"),
];

fn spoiler(title: &str, feature: &Feature) -> String {
    let body = format!("{}\n{}", feature.description, feature.tags_line());
    format!("[spoiler={}]{}[/spoiler]", title, body.trim())
}

pub fn feature_line(feature: &Feature, opts: &RenderOptions) -> String {
    if opts.with_descriptions {
        spoiler(&feature.name, feature)
    } else {
        feature.name.clone()
    }
}

pub fn item_line(item: &InventoryItem, opts: &RenderOptions) -> String {
    if opts.with_descriptions {
        let title = format!("{} ({LRM}{}{LRM})", item.feature.name, item.rank);
        spoiler(&title, &item.feature)
    } else {
        format!("{} ({})", item.feature.name, item.rank)
    }
}

pub fn tech_line(tech: &Tech) -> String {
    let kind = tech.kind.map(|k| k.label()).unwrap_or("???");
    format!("{}. {} ({})", kind, tech.name, tech.proficiency)
}

fn lines<T>(entries: &[T], f: impl Fn(&T) -> String) -> String {
    entries.iter().map(f).collect::<Vec<_>>().join("\n")
}

fn block(out: &mut String, heading: &str, body: &str) {
    out.push_str("\n\n[b]");
    out.push_str(heading);
    out.push_str("[/b]\n");
    out.push_str(body);
}

pub fn render(build: &CharacterBuild, opts: &RenderOptions) -> String {
    let sheet = &build.sheet;
    let inv = &build.inventory;
    let techs: Vec<String> = sheet.techs.iter().map(tech_line).collect();

    let mut out = join!(OPEN, "\n");
    out.push_str(&format!("{} HP | {} AC\n\n", inv.hp, inv.ac));
    out.push_str(&sheet.accuracy.join(", "));
    out.push_str("\n\n");
    out.push_str(&sheet.stats.join(", "));
    out.push_str("\n\n");
    out.push_str(&techs.join(", "));

    for (heading, group) in [
        ("TRAITS", &sheet.traits),
        ("PASSIVES", &sheet.passives),
        ("COMBAT MANEUVERS", &sheet.maneuvers),
    ] {
        block(&mut out, heading, &lines(group, |f| feature_line(f, opts)));
    }

    for (section, heading) in INVENTORY_SECTIONS {
        if inv.section(section).is_none() {
            logd!("Render: inventory has no {:?} section", section);
        }
        block(&mut out, heading, &lines(inv.items(section), |i| item_line(i, opts)));
    }

    out.push('\n');
    out.push_str(CLOSE);
    out
}
