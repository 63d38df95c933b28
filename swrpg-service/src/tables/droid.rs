use serde::Serialize;

use super::{Stats, TemplateRecord};

/// Characteristic order: Brawn, Agility, Intellect, Cunning, Willpower, Presence
#[derive(Debug, Clone, Serialize)]
pub struct DroidStats {
    pub rank: &'static str,
    pub characteristics: [u8; 6],
    pub soak: u8,
    pub wounds: u8,
    pub strain: u8,
    pub ranged_defense: u8,
    pub melee_defense: u8,
}

impl DroidStats {
    pub fn profile(&self, special: &str) -> Vec<(&'static str, String)> {
        let characteristics = self
            .characteristics
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("/");
        vec![
            ("Characteristics", characteristics),
            (
                "Defense",
                format!("{} | {}", self.ranged_defense, self.melee_defense),
            ),
            ("Soak", self.soak.to_string()),
            ("Qualities", special.to_string()),
            ("Wound Threshold", self.wounds.to_string()),
            ("Strain Threshold", self.strain.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DirectiveStats {
    pub skills_granted: &'static [&'static str],
    pub talents_granted: &'static [&'static str],
}

impl DirectiveStats {
    pub fn profile(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Skills", self.skills_granted.join("; ")),
            ("Talents", self.talents_granted.join("; ")),
        ]
    }
}

const MECHANICS: &[&str] = &["Mechanics"];
const COMPUTERS: &[&str] = &["Computers"];

pub(super) static CHASSIS: &[TemplateRecord] = &[
    TemplateRecord {
        id: 19,
        name: "Monotask Chassis",
        price: 600,
        rarity: 2,
        difficulty: 2,
        time: "24 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Silhouette 0",
        stats: Stats::Droid(DroidStats {
            rank: "Minion",
            characteristics: [1, 1, 1, 1, 1, 1],
            soak: 2,
            wounds: 3,
            strain: 0,
            ranged_defense: 0,
            melee_defense: 0,
        }),
    },
    TemplateRecord {
        id: 20,
        name: "Labor Chassis",
        price: 3500,
        rarity: 3,
        difficulty: 2,
        time: "48 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Silhouette 1",
        stats: Stats::Droid(DroidStats {
            rank: "Minion",
            characteristics: [3, 1, 2, 1, 1, 1],
            soak: 4,
            wounds: 7,
            strain: 0,
            ranged_defense: 0,
            melee_defense: 0,
        }),
    },
    TemplateRecord {
        id: 21,
        name: "Combat Chassis",
        price: 3250,
        rarity: 2,
        difficulty: 3,
        time: "48 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Silhouette 1",
        stats: Stats::Droid(DroidStats {
            rank: "Minion",
            characteristics: [2, 2, 1, 1, 1, 1],
            soak: 2,
            wounds: 4,
            strain: 0,
            ranged_defense: 0,
            melee_defense: 0,
        }),
    },
    TemplateRecord {
        id: 22,
        name: "Specialist Chassis",
        price: 4500,
        rarity: 3,
        difficulty: 4,
        time: "56 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Silhouette 1",
        stats: Stats::Droid(DroidStats {
            rank: "Rival",
            characteristics: [1, 1, 2, 2, 2, 2],
            soak: 3,
            wounds: 11,
            strain: 0,
            ranged_defense: 0,
            melee_defense: 0,
        }),
    },
    TemplateRecord {
        id: 23,
        name: "Advanced Combat Chassis",
        price: 32500,
        rarity: 7,
        difficulty: 5,
        time: "240 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Silhouette 1",
        stats: Stats::Droid(DroidStats {
            rank: "Nemesis",
            characteristics: [4, 3, 3, 3, 1, 1],
            soak: 7,
            wounds: 19,
            strain: 10,
            ranged_defense: 1,
            melee_defense: 0,
        }),
    },
];

// Directives are programmed rather than built, so they carry no material cost
pub(super) static DIRECTIVES: &[TemplateRecord] = &[
    TemplateRecord {
        id: 24,
        name: "Labor Directive",
        price: 0,
        rarity: 0,
        difficulty: 1,
        time: "8 hours",
        skills: COMPUTERS,
        restricted: false,
        special: "",
        stats: Stats::Directive(DirectiveStats {
            skills_granted: &["1 General Skill +2 ranks"],
            talents_granted: &[],
        }),
    },
    TemplateRecord {
        id: 25,
        name: "Combat Directive",
        price: 0,
        rarity: 0,
        difficulty: 2,
        time: "16 hours",
        skills: COMPUTERS,
        restricted: false,
        special: "",
        stats: Stats::Directive(DirectiveStats {
            skills_granted: &["3 Combat Skills +1 rank"],
            talents_granted: &["Body Guard 1"],
        }),
    },
    TemplateRecord {
        id: 26,
        name: "Translation Directive",
        price: 0,
        rarity: 0,
        difficulty: 3,
        time: "24 hours",
        skills: COMPUTERS,
        restricted: false,
        special: "",
        stats: Stats::Directive(DirectiveStats {
            skills_granted: &["3 Knowledge Skills +1 rank", "Charm 1"],
            talents_granted: &["Convincing Demeanor 1", "Kill with Kindness 1"],
        }),
    },
    TemplateRecord {
        id: 27,
        name: "Repair Directive",
        price: 0,
        rarity: 0,
        difficulty: 3,
        time: "24 hours",
        skills: COMPUTERS,
        restricted: false,
        special: "",
        stats: Stats::Directive(DirectiveStats {
            skills_granted: &["Computers 1", "Mechanics 2"],
            talents_granted: &["Gearhead 1", "Solid Repairs 1"],
        }),
    },
    TemplateRecord {
        id: 28,
        name: "Navigation Directive",
        price: 0,
        rarity: 0,
        difficulty: 3,
        time: "72 hours",
        skills: COMPUTERS,
        restricted: false,
        special: "",
        stats: Stats::Directive(DirectiveStats {
            skills_granted: &["Astrogation 2", "Computers 1", "Piloting (Space) 1"],
            talents_granted: &["Galaxy Mapper 1", "Technical Aptitude 1"],
        }),
    },
    TemplateRecord {
        id: 29,
        name: "Healing Directive",
        price: 0,
        rarity: 0,
        difficulty: 4,
        time: "72 hours",
        skills: COMPUTERS,
        restricted: false,
        special: "",
        stats: Stats::Directive(DirectiveStats {
            skills_granted: &["Xenology 1", "Medicine 2"],
            talents_granted: &["Bacta Specialist 1", "Surgeon 1"],
        }),
    },
    TemplateRecord {
        id: 30,
        name: "Elimination Directive",
        price: 0,
        rarity: 0,
        difficulty: 5,
        time: "168 hours",
        skills: COMPUTERS,
        restricted: false,
        special: "",
        stats: Stats::Directive(DirectiveStats {
            skills_granted: &[
                "Nemesis; gain Strain Threshold equal to Wound Threshold",
                "4 ranks in each of 3 Combat Skills",
                "Cool 2",
                "Xenology 1",
                "Mechanics 2",
                "Stealth 2",
            ],
            talents_granted: &["Adversary 2", "Lethal Blows 3"],
        }),
    },
];
