//! Static crafting tables.
//!
//! Each craftable category has a fixed slice of [`TemplateRecord`]s keyed by
//! a category-local identifier. The identifiers match the values produced by
//! the host's template selection macros (`#CraftWeaponTemplate`, ...).
//! Nothing here is mutable; a missing identifier is simply `None`.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

mod armor;
mod cybernetic;
mod droid;
mod gadget;
mod lightsaber;
mod vehicle;
mod weapon;

pub use armor::ArmorStats;
pub use droid::{DirectiveStats, DroidStats};
pub use lightsaber::HiltStats;
pub use vehicle::{EngineStats, FrameStats, HullStats};
pub use weapon::WeaponStats;

/// Every table of craftable templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, EnumIter, Serialize)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "snake_case")]
pub enum TemplateCategory {
    Weapon,
    Armor,
    Gadget,
    DroidChassis,
    DroidDirective,
    VehicleFrame,
    VehicleEngine,
    VehicleHull,
    LightsaberHilt,
    Cybernetic,
}

impl TemplateCategory {
    /// All records of this category
    pub fn records(self) -> &'static [TemplateRecord] {
        match self {
            TemplateCategory::Weapon => weapon::TEMPLATES,
            TemplateCategory::Armor => armor::TEMPLATES,
            TemplateCategory::Gadget => gadget::TEMPLATES,
            TemplateCategory::DroidChassis => droid::CHASSIS,
            TemplateCategory::DroidDirective => droid::DIRECTIVES,
            TemplateCategory::VehicleFrame => vehicle::FRAMES,
            TemplateCategory::VehicleEngine => vehicle::ENGINES,
            TemplateCategory::VehicleHull => vehicle::HULLS,
            TemplateCategory::LightsaberHilt => lightsaber::TEMPLATES,
            TemplateCategory::Cybernetic => cybernetic::TEMPLATES,
        }
    }

    /// Human readable name, shown under an item's name
    pub fn label(self) -> &'static str {
        match self {
            TemplateCategory::Weapon => "Weapon",
            TemplateCategory::Armor => "Armor",
            TemplateCategory::Gadget => "Gadget",
            TemplateCategory::DroidChassis => "Droid Chassis",
            TemplateCategory::DroidDirective => "Droid Directive",
            TemplateCategory::VehicleFrame => "Vehicle Frame",
            TemplateCategory::VehicleEngine => "Vehicle Engine",
            TemplateCategory::VehicleHull => "Vehicle Hull",
            TemplateCategory::LightsaberHilt => "Lightsaber Hilt",
            TemplateCategory::Cybernetic => "Cybernetic",
        }
    }
}

/// One craftable template
#[derive(Debug, Clone, Serialize)]
pub struct TemplateRecord {
    pub id: u32,
    pub name: &'static str,
    /// Base price of the materials, in credits
    pub price: u32,
    pub rarity: u8,
    /// Difficulty of the crafting check
    pub difficulty: u8,
    pub time: &'static str,
    /// Skills that may be used for the crafting check
    pub skills: &'static [&'static str],
    pub restricted: bool,
    pub special: &'static str,
    pub stats: Stats,
}

/// Category-specific statistics
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Stats {
    Weapon(WeaponStats),
    Armor(ArmorStats),
    Gadget { encumbrance: u8 },
    Droid(DroidStats),
    Directive(DirectiveStats),
    Frame(FrameStats),
    Engine(EngineStats),
    Hull(HullStats),
    Hilt(HiltStats),
    Cybernetic,
}

impl TemplateRecord {
    /// Category this record belongs to, derived from its stats
    pub fn category(&self) -> TemplateCategory {
        match self.stats {
            Stats::Weapon(_) => TemplateCategory::Weapon,
            Stats::Armor(_) => TemplateCategory::Armor,
            Stats::Gadget { .. } => TemplateCategory::Gadget,
            Stats::Droid(_) => TemplateCategory::DroidChassis,
            Stats::Directive(_) => TemplateCategory::DroidDirective,
            Stats::Frame(_) => TemplateCategory::VehicleFrame,
            Stats::Engine(_) => TemplateCategory::VehicleEngine,
            Stats::Hull(_) => TemplateCategory::VehicleHull,
            Stats::Hilt(_) => TemplateCategory::LightsaberHilt,
            Stats::Cybernetic => TemplateCategory::Cybernetic,
        }
    }

    /// Line shown under the item's name on its stat card
    pub fn item_type(&self) -> &'static str {
        match &self.stats {
            Stats::Weapon(w) => w.kind,
            _ => self.category().label(),
        }
    }

    /// Tables with no published statistics carry house numbers
    pub fn is_homebrew(&self) -> bool {
        matches!(
            self.category(),
            TemplateCategory::Armor
                | TemplateCategory::LightsaberHilt
                | TemplateCategory::VehicleEngine
                | TemplateCategory::VehicleHull
        )
    }

    /// Rows describing the finished item, in display order
    pub fn profile(&self) -> Vec<(&'static str, String)> {
        match &self.stats {
            Stats::Weapon(w) => w.profile(self.special),
            Stats::Armor(a) => a.profile(self.special),
            Stats::Gadget { encumbrance } => vec![
                ("Effect", self.special.to_string()),
                ("Encumbrance", encumbrance.to_string()),
            ],
            Stats::Droid(d) => d.profile(self.special),
            Stats::Directive(d) => d.profile(),
            Stats::Frame(f) => f.profile(self.special),
            Stats::Engine(e) => e.profile(self.special),
            Stats::Hull(h) => h.profile(self.special),
            Stats::Hilt(h) => h.profile(self.special),
            Stats::Cybernetic => vec![("Effect", self.special.to_string())],
        }
    }
}

/// Look up a record by category and identifier
pub fn lookup(category: TemplateCategory, id: u32) -> Option<&'static TemplateRecord> {
    category.records().iter().find(|r| r.id == id)
}

/// Optional numeric stat; absent values render as a dash
pub(crate) fn or_dash(value: Option<u8>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use strum::IntoEnumIterator;

    #[test]
    fn test_lookup_known_and_unknown() {
        let tool = lookup(TemplateCategory::Gadget, 1).unwrap();
        assert_eq!(tool.name, "Simple Tool");
        assert_eq!(tool.price, 50);
        assert_eq!(tool.rarity, 1);
        assert_eq!(tool.difficulty, 1);
        assert_eq!(tool.time, "2 hours");

        assert!(lookup(TemplateCategory::Gadget, 99).is_none());
        assert!(lookup(TemplateCategory::Weapon, 0).is_none());
    }

    #[test]
    fn test_ids_unique_and_ranges_valid() {
        for category in TemplateCategory::iter() {
            let records = category.records();
            assert!(!records.is_empty(), "{} has no records", category);
            let ids: HashSet<u32> = records.iter().map(|r| r.id).collect();
            assert_eq!(ids.len(), records.len(), "duplicate id in {}", category);
            for r in records {
                assert!(r.rarity <= 10, "{} rarity out of range", r.name);
                assert!(r.difficulty <= 5, "{} difficulty out of range", r.name);
                assert_eq!(r.category(), category, "{} in wrong table", r.name);
            }
        }
    }

    #[test]
    fn test_item_type_and_homebrew() {
        let pistol = lookup(TemplateCategory::Weapon, 9).unwrap();
        assert_eq!(pistol.item_type(), "Ranged (Light)");
        assert!(!pistol.is_homebrew());

        let tool = lookup(TemplateCategory::Gadget, 1).unwrap();
        assert_eq!(tool.item_type(), "Gadget");

        for category in [
            TemplateCategory::Armor,
            TemplateCategory::LightsaberHilt,
            TemplateCategory::VehicleEngine,
            TemplateCategory::VehicleHull,
        ] {
            assert!(category.records().iter().all(TemplateRecord::is_homebrew));
        }
        assert!(!TemplateCategory::VehicleFrame.records().iter().any(TemplateRecord::is_homebrew));
    }

    #[test]
    fn test_weapon_profile() {
        let pistol = lookup(TemplateCategory::Weapon, 9).unwrap();
        assert_eq!(pistol.name, "Energy Pistol");
        let profile = pistol.profile();
        assert!(profile.contains(&("Damage", "6".to_string())));
        assert!(profile.contains(&("Hard Points", "3".to_string())));

        let launcher = lookup(TemplateCategory::Weapon, 12).unwrap();
        assert!(launcher.profile().contains(&("Encumbrance", "-".to_string())));
    }

    #[test]
    fn test_vehicle_ids_do_not_overlap() {
        let mut seen = HashSet::new();
        for category in [
            TemplateCategory::VehicleFrame,
            TemplateCategory::VehicleEngine,
            TemplateCategory::VehicleHull,
        ] {
            for r in category.records() {
                assert!(seen.insert(r.id), "vehicle id {} reused", r.id);
            }
        }
    }
}
