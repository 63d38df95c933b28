use super::{Stats, TemplateRecord};

const MECHANICS: &[&str] = &["Mechanics"];

pub(super) static TEMPLATES: &[TemplateRecord] = &[
    TemplateRecord {
        id: 1,
        name: "Prosthetic Replacement",
        price: 1000,
        rarity: 3,
        difficulty: 3,
        time: "12 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Replace functionality of a lost limb or organ",
        stats: Stats::Cybernetic,
    },
    TemplateRecord {
        id: 2,
        name: "Cybernetic Appendage",
        price: 5000,
        rarity: 5,
        difficulty: 4,
        time: "48 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Replaces a limb: +1 Brawn for an arm, +1 Agility for a leg; can only benefit from one arm and one leg modification",
        stats: Stats::Cybernetic,
    },
    TemplateRecord {
        id: 3,
        name: "Cybernetic Implant",
        price: 1500,
        rarity: 6,
        difficulty: 4,
        time: "48 hours",
        skills: MECHANICS,
        restricted: false,
        special: "+1 Rank in a General Skill",
        stats: Stats::Cybernetic,
    },
];
