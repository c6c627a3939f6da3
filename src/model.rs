// src/model.rs
//
// Transient shapes for one build. Nothing here outlives a single render.

/// A trait, passive, maneuver, or the text half of an inventory item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Feature {
    pub name: String,
    pub description: String,
    /// Raw label text of each inline `<tech>` marker, in page order.
    pub tags: Vec<String>,
}

impl Feature {
    /// Tags as forum inline code, comma separated.
    pub fn tags_line(&self) -> String {
        self.tags
            .iter()
            .map(|t| join!("[codeline]", t, "[/codeline]"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventoryItem {
    pub feature: Feature,
    pub rank: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InventorySection {
    pub name: String,
    pub items: Vec<InventoryItem>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    pub hp: String,
    pub ac: String,
    /// Page order
    pub sections: Vec<InventorySection>,
}

impl Inventory {
    /// Section lookup ignores case and surrounding whitespace. A repeated
    /// header starts the section over, so the last one wins.
    pub fn section(&self, name: &str) -> Option<&InventorySection> {
        self.sections
            .iter()
            .rev()
            .find(|s| s.name.trim().eq_ignore_ascii_case(name))
    }

    pub fn items(&self, name: &str) -> &[InventoryItem] {
        self.section(name).map(|s| s.items.as_slice()).unwrap_or(&[])
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TechKind {
    Off,
    Def,
    Sup,
    Com,
}

impl TechKind {
    /// From the icon class on `.cs-tech-type i`. Later matches win.
    pub fn from_icon_class(class: &str) -> Option<Self> {
        let mut kind = None;
        if class.contains("axe") { kind = Some(TechKind::Off); }
        if class.contains("shield") { kind = Some(TechKind::Def); }
        if class.contains("plus") { kind = Some(TechKind::Sup); }
        if class.contains("paw") { kind = Some(TechKind::Com); }
        kind
    }

    pub fn label(self) -> &'static str {
        match self {
            TechKind::Off => "OFF",
            TechKind::Def => "DEF",
            TechKind::Sup => "SUP",
            TechKind::Com => "COM",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tech {
    pub kind: Option<TechKind>,
    pub name: String,
    pub proficiency: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterSheet {
    pub traits: Vec<Feature>,
    pub passives: Vec<Feature>,
    pub maneuvers: Vec<Feature>,
    pub accuracy: Vec<String>,
    pub stats: Vec<String>,
    pub techs: Vec<Tech>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterBuild {
    pub sheet: CharacterSheet,
    pub inventory: Inventory,
}
