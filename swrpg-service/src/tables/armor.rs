use serde::Serialize;

use super::{Stats, TemplateRecord};

#[derive(Debug, Clone, Serialize)]
pub struct ArmorStats {
    pub defense: u8,
    pub soak: u8,
    pub encumbrance: u8,
    pub hardpoints: u8,
}

impl ArmorStats {
    pub fn profile(&self, special: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Defense", self.defense.to_string()),
            ("Soak", self.soak.to_string()),
            ("Encumbrance", self.encumbrance.to_string()),
            ("Hard Points", self.hardpoints.to_string()),
            ("Qualities", special.to_string()),
        ]
    }
}

const BASIC: &[&str] = &["Mechanics", "Survival"];
const MECHANICS: &[&str] = &["Mechanics"];

pub(super) static TEMPLATES: &[TemplateRecord] = &[
    TemplateRecord {
        id: 1,
        name: "Heavy Clothing",
        price: 50,
        rarity: 0,
        difficulty: 1,
        time: "4 hours",
        skills: BASIC,
        restricted: false,
        special: "",
        stats: Stats::Armor(ArmorStats {
            defense: 0,
            soak: 1,
            encumbrance: 1,
            hardpoints: 1,
        }),
    },
    TemplateRecord {
        id: 2,
        name: "Padded Armor",
        price: 250,
        rarity: 1,
        difficulty: 2,
        time: "8 hours",
        skills: BASIC,
        restricted: false,
        special: "",
        stats: Stats::Armor(ArmorStats {
            defense: 0,
            soak: 2,
            encumbrance: 2,
            hardpoints: 2,
        }),
    },
    TemplateRecord {
        id: 3,
        name: "Armored Clothing",
        price: 500,
        rarity: 3,
        difficulty: 2,
        time: "12 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Concealed: add 1 Setback to checks to notice the armor",
        stats: Stats::Armor(ArmorStats {
            defense: 1,
            soak: 1,
            encumbrance: 3,
            hardpoints: 1,
        }),
    },
    TemplateRecord {
        id: 4,
        name: "Laminate Armor",
        price: 1250,
        rarity: 4,
        difficulty: 3,
        time: "24 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Armor(ArmorStats {
            defense: 0,
            soak: 3,
            encumbrance: 4,
            hardpoints: 3,
        }),
    },
    TemplateRecord {
        id: 5,
        name: "Heavy Battle Armor",
        price: 2500,
        rarity: 5,
        difficulty: 4,
        time: "48 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Sealed: immune to vacuum for up to one hour",
        stats: Stats::Armor(ArmorStats {
            defense: 1,
            soak: 2,
            encumbrance: 6,
            hardpoints: 4,
        }),
    },
    TemplateRecord {
        id: 6,
        name: "Powered Armor",
        price: 7500,
        rarity: 7,
        difficulty: 5,
        time: "96 hours",
        skills: MECHANICS,
        restricted: true,
        special: "+1 Brawn while worn; Encumbrance counts as 3 when worn",
        stats: Stats::Armor(ArmorStats {
            defense: 2,
            soak: 2,
            encumbrance: 8,
            hardpoints: 4,
        }),
    },
];
