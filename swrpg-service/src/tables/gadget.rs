use super::{Stats, TemplateRecord};

const MECHANICS: &[&str] = &["Mechanics"];

pub(super) static TEMPLATES: &[TemplateRecord] = &[
    TemplateRecord {
        id: 1,
        name: "Simple Tool",
        price: 50,
        rarity: 1,
        difficulty: 1,
        time: "2 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Allows characters to make checks with chosen skill with the right tool",
        stats: Stats::Gadget { encumbrance: 4 },
    },
    TemplateRecord {
        id: 2,
        name: "Specialist Tool",
        price: 400,
        rarity: 4,
        difficulty: 2,
        time: "10 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Add automatic success to checks with chosen skill",
        stats: Stats::Gadget { encumbrance: 8 },
    },
    TemplateRecord {
        id: 3,
        name: "Precision Tool",
        price: 150,
        rarity: 3,
        difficulty: 3,
        time: "16 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Remove 2 Setback from checks with chosen skill",
        stats: Stats::Gadget { encumbrance: 5 },
    },
];
