use serde::Serialize;

use super::{Stats, TemplateRecord, or_dash};

#[derive(Debug, Clone, Serialize)]
pub struct WeaponStats {
    /// Combat skill used to wield the weapon, shown as the item's type
    pub kind: &'static str,
    /// Flat damage for ranged weapons, `+N` for Brawn-based weapons
    pub damage: &'static str,
    pub critical: u8,
    pub range: &'static str,
    pub hands: &'static str,
    pub encumbrance: Option<u8>,
    pub hardpoints: Option<u8>,
}

impl WeaponStats {
    pub fn profile(&self, qualities: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Damage", self.damage.to_string()),
            ("Critical", self.critical.to_string()),
            ("Qualities", qualities.to_string()),
            ("Range", self.range.to_string()),
            ("Hands Required", self.hands.to_string()),
            ("Encumbrance", or_dash(self.encumbrance)),
            ("Hard Points", or_dash(self.hardpoints)),
        ]
    }
}

const BASIC: &[&str] = &["Mechanics", "Survival"];
const MECHANICS: &[&str] = &["Mechanics"];

pub(super) static TEMPLATES: &[TemplateRecord] = &[
    TemplateRecord {
        id: 16,
        name: "Fist Weapon",
        price: 10,
        rarity: 0,
        difficulty: 2,
        time: "4 hours",
        skills: BASIC,
        restricted: false,
        special: "Disorient 3",
        stats: Stats::Weapon(WeaponStats {
            kind: "Brawl",
            damage: "+1",
            critical: 4,
            range: "Engaged",
            hands: "One-handed",
            encumbrance: Some(1),
            hardpoints: Some(0),
        }),
    },
    TemplateRecord {
        id: 1,
        name: "Blunt Weapon",
        price: 5,
        rarity: 0,
        difficulty: 1,
        time: "6 hours",
        skills: BASIC,
        restricted: false,
        special: "Disorient 2",
        stats: Stats::Weapon(WeaponStats {
            kind: "Melee",
            damage: "+2",
            critical: 5,
            range: "Engaged",
            hands: "One-handed",
            encumbrance: Some(3),
            hardpoints: Some(0),
        }),
    },
    TemplateRecord {
        id: 2,
        name: "Shield",
        price: 10,
        rarity: 0,
        difficulty: 2,
        time: "8 hours",
        skills: BASIC,
        restricted: false,
        special: "Defensive 1",
        stats: Stats::Weapon(WeaponStats {
            kind: "Melee",
            damage: "+0",
            critical: 5,
            range: "Engaged",
            hands: "One-handed",
            encumbrance: Some(1),
            hardpoints: Some(0),
        }),
    },
    TemplateRecord {
        id: 3,
        name: "Bladed Weapon",
        price: 10,
        rarity: 0,
        difficulty: 2,
        time: "16 hours",
        skills: BASIC,
        restricted: false,
        special: "",
        stats: Stats::Weapon(WeaponStats {
            kind: "Melee",
            damage: "+1",
            critical: 3,
            range: "Engaged",
            hands: "One-handed",
            encumbrance: Some(2),
            hardpoints: Some(0),
        }),
    },
    TemplateRecord {
        id: 4,
        name: "Vibro Weapon",
        price: 200,
        rarity: 3,
        difficulty: 3,
        time: "24 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Pierce 2; Vicious 1",
        stats: Stats::Weapon(WeaponStats {
            kind: "Melee",
            damage: "+1",
            critical: 2,
            range: "Engaged",
            hands: "One-handed",
            encumbrance: Some(2),
            hardpoints: Some(0),
        }),
    },
    TemplateRecord {
        id: 5,
        name: "Powered Weapon",
        price: 400,
        rarity: 4,
        difficulty: 4,
        time: "48 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Stun 3",
        stats: Stats::Weapon(WeaponStats {
            kind: "Melee",
            damage: "+2",
            critical: 3,
            range: "Engaged",
            hands: "One-handed",
            encumbrance: Some(3),
            hardpoints: Some(0),
        }),
    },
    TemplateRecord {
        id: 6,
        name: "Simple Projectile",
        price: 10,
        rarity: 0,
        difficulty: 2,
        time: "4 hours",
        skills: BASIC,
        restricted: false,
        special: "Limited Ammo 1",
        stats: Stats::Weapon(WeaponStats {
            kind: "Ranged (Light)",
            damage: "4",
            critical: 5,
            range: "Short",
            hands: "One-handed",
            encumbrance: Some(3),
            hardpoints: Some(0),
        }),
    },
    TemplateRecord {
        id: 7,
        name: "Projectile Pistol",
        price: 50,
        rarity: 2,
        difficulty: 2,
        time: "8 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Weapon(WeaponStats {
            kind: "Ranged (Light)",
            damage: "4",
            critical: 5,
            range: "Short",
            hands: "One-handed",
            encumbrance: Some(1),
            hardpoints: Some(0),
        }),
    },
    TemplateRecord {
        id: 8,
        name: "Projectile Rifle",
        price: 125,
        rarity: 2,
        difficulty: 3,
        time: "8 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Cumbersome 2",
        stats: Stats::Weapon(WeaponStats {
            kind: "Ranged (Heavy)",
            damage: "7",
            critical: 5,
            range: "Medium",
            hands: "One-handed",
            encumbrance: Some(5),
            hardpoints: Some(1),
        }),
    },
    TemplateRecord {
        id: 9,
        name: "Energy Pistol",
        price: 200,
        rarity: 3,
        difficulty: 3,
        time: "12 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Weapon(WeaponStats {
            kind: "Ranged (Light)",
            damage: "6",
            critical: 3,
            range: "Medium",
            hands: "One-handed",
            encumbrance: Some(1),
            hardpoints: Some(3),
        }),
    },
    TemplateRecord {
        id: 10,
        name: "Energy Rifle",
        price: 450,
        rarity: 4,
        difficulty: 3,
        time: "16 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Weapon(WeaponStats {
            kind: "Ranged (Heavy)",
            damage: "9",
            critical: 3,
            range: "Long",
            hands: "One-handed",
            encumbrance: Some(4),
            hardpoints: Some(4),
        }),
    },
    TemplateRecord {
        id: 11,
        name: "Heavy Rifle",
        price: 1000,
        rarity: 6,
        difficulty: 4,
        time: "24 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Cumbersome 3",
        stats: Stats::Weapon(WeaponStats {
            kind: "Gunnery",
            damage: "10",
            critical: 3,
            range: "Long",
            hands: "One-handed",
            encumbrance: Some(6),
            hardpoints: Some(4),
        }),
    },
    TemplateRecord {
        id: 12,
        name: "Launcher",
        price: 4000,
        rarity: 7,
        difficulty: 4,
        time: "16 hours",
        skills: MECHANICS,
        restricted: true,
        special: "",
        stats: Stats::Weapon(WeaponStats {
            kind: "Gunnery",
            damage: "0",
            critical: 0,
            range: "",
            hands: "One-handed",
            encumbrance: None,
            hardpoints: None,
        }),
    },
    TemplateRecord {
        id: 13,
        name: "Missile",
        price: 1100,
        rarity: 3,
        difficulty: 3,
        time: "4 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Blast 10; Breach 1; Cumbersome 3; Guided 3; Prepare 1; Limited Ammo 1",
        stats: Stats::Weapon(WeaponStats {
            kind: "Gunnery",
            damage: "20",
            critical: 2,
            range: "Extreme",
            hands: "One-handed",
            encumbrance: Some(7),
            hardpoints: Some(4),
        }),
    },
    TemplateRecord {
        id: 14,
        name: "Grenade",
        price: 35,
        rarity: 4,
        difficulty: 3,
        time: "2 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Blast 6; Limited Ammo 1",
        stats: Stats::Weapon(WeaponStats {
            kind: "Ranged (Light)",
            damage: "8",
            critical: 4,
            range: "Short",
            hands: "One-handed",
            encumbrance: Some(1),
            hardpoints: Some(0),
        }),
    },
    TemplateRecord {
        id: 15,
        name: "Mine",
        price: 425,
        rarity: 5,
        difficulty: 3,
        time: "4 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Blast 4; Limited Ammo 1",
        stats: Stats::Weapon(WeaponStats {
            kind: "Mechanics",
            damage: "12",
            critical: 3,
            range: "Engaged",
            hands: "Two-handed",
            encumbrance: Some(3),
            hardpoints: Some(0),
        }),
    },
];
