use serde::Serialize;

use super::{Stats, TemplateRecord};

#[derive(Debug, Clone, Serialize)]
pub struct HiltStats {
    pub damage: u8,
    pub critical: u8,
    pub encumbrance: u8,
    pub hardpoints: u8,
    pub hands: &'static str,
}

impl HiltStats {
    pub fn profile(&self, qualities: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Skill", "Lightsaber".to_string()),
            ("Damage", self.damage.to_string()),
            ("Critical", self.critical.to_string()),
            ("Qualities", qualities.to_string()),
            ("Hands Required", self.hands.to_string()),
            ("Encumbrance", self.encumbrance.to_string()),
            ("Hard Points", self.hardpoints.to_string()),
        ]
    }
}

const MECHANICS: &[&str] = &["Mechanics"];

pub(super) static TEMPLATES: &[TemplateRecord] = &[
    TemplateRecord {
        id: 1,
        name: "Basic Hilt",
        price: 300,
        rarity: 4,
        difficulty: 2,
        time: "8 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Breach 1; Sunder; requires a crystal to function",
        stats: Stats::Hilt(HiltStats {
            damage: 6,
            critical: 2,
            encumbrance: 1,
            hardpoints: 2,
            hands: "One-handed",
        }),
    },
    TemplateRecord {
        id: 2,
        name: "Shoto Hilt",
        price: 250,
        rarity: 5,
        difficulty: 3,
        time: "12 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Accurate 1; Breach 1; Sunder; requires a crystal to function",
        stats: Stats::Hilt(HiltStats {
            damage: 5,
            critical: 2,
            encumbrance: 1,
            hardpoints: 2,
            hands: "One-handed",
        }),
    },
    TemplateRecord {
        id: 3,
        name: "Curved Hilt",
        price: 400,
        rarity: 5,
        difficulty: 3,
        time: "12 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Breach 1; Defensive 1; Sunder; requires a crystal to function",
        stats: Stats::Hilt(HiltStats {
            damage: 6,
            critical: 2,
            encumbrance: 1,
            hardpoints: 2,
            hands: "One-handed",
        }),
    },
    TemplateRecord {
        id: 4,
        name: "Pike Hilt",
        price: 500,
        rarity: 6,
        difficulty: 4,
        time: "24 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Breach 1; Cumbersome 3; Defensive 1; Sunder; requires a crystal to function",
        stats: Stats::Hilt(HiltStats {
            damage: 6,
            critical: 2,
            encumbrance: 3,
            hardpoints: 3,
            hands: "Two-handed",
        }),
    },
    TemplateRecord {
        id: 5,
        name: "Double-Bladed Hilt",
        price: 600,
        rarity: 6,
        difficulty: 4,
        time: "24 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Breach 1; Linked 1; Sunder; Unwieldy 3; requires two crystals to function",
        stats: Stats::Hilt(HiltStats {
            damage: 6,
            critical: 2,
            encumbrance: 2,
            hardpoints: 2,
            hands: "Two-handed",
        }),
    },
];
