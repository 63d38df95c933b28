use serde::Serialize;

use super::{Stats, TemplateRecord};

/// Altitude value used for frames that only operate in space
pub const SPACE_ALTITUDE: i64 = -1;

#[derive(Debug, Clone, Serialize)]
pub struct FrameStats {
    pub silhouette: u8,
    pub speed: u8,
    /// Maximum altitude in meters, or [`SPACE_ALTITUDE`]
    pub altitude: i64,
    pub hull_trauma: u8,
    pub hardpoints: u8,
    pub encumbrance: u32,
    pub crew: &'static str,
    pub passengers: u32,
    /// Workers required to assemble the frame
    pub assembly_crew: u32,
}

impl FrameStats {
    pub fn altitude_text(&self) -> String {
        match self.altitude {
            SPACE_ALTITUDE => "Space".to_string(),
            0 => "Ground".to_string(),
            meters => format!("{} meters", meters),
        }
    }

    pub fn profile(&self, special: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Silhouette", self.silhouette.to_string()),
            ("Speed", self.speed.to_string()),
            ("Altitude", self.altitude_text()),
            ("Hull Trauma", self.hull_trauma.to_string()),
            ("Hard Points", self.hardpoints.to_string()),
            ("Encumbrance", self.encumbrance.to_string()),
            ("Crew", self.crew.to_string()),
            ("Passengers", self.passengers.to_string()),
            ("Assembly Crew", self.assembly_crew.to_string()),
            ("Special", special.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EngineStats {
    pub speed: i8,
    pub handling: i8,
    pub system_strain: u8,
}

impl EngineStats {
    pub fn profile(&self, special: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Speed", signed(self.speed)),
            ("Handling", signed(self.handling)),
            ("System Strain", self.system_strain.to_string()),
            ("Special", special.to_string()),
        ]
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HullStats {
    pub armor: u8,
    pub handling: i8,
    pub defense: u8,
    /// Added to the frame's hull trauma threshold
    pub hull_trauma: i8,
    /// Multiplier applied to the frame's encumbrance capacity
    pub cargo_multiplier: u8,
}

impl HullStats {
    pub fn profile(&self, special: &str) -> Vec<(&'static str, String)> {
        vec![
            ("Armor", self.armor.to_string()),
            ("Handling", signed(self.handling)),
            ("Defense", self.defense.to_string()),
            ("Hull Trauma", signed(self.hull_trauma)),
            ("Special", special.to_string()),
        ]
    }
}

/// Modifier text with an explicit sign, e.g. `+1` or `-1`
pub(crate) fn signed(value: i8) -> String {
    format!("{:+}", value)
}

const MECHANICS: &[&str] = &["Mechanics"];

pub(super) static FRAMES: &[TemplateRecord] = &[
    TemplateRecord {
        id: 31,
        name: "Speeder Bike",
        price: 250,
        rarity: 1,
        difficulty: 2,
        time: "12 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Frame(FrameStats {
            silhouette: 2,
            speed: 4,
            altitude: 15,
            hull_trauma: 2,
            hardpoints: 4,
            encumbrance: 1,
            crew: "One pilot",
            passengers: 0,
            assembly_crew: 1,
        }),
    },
    TemplateRecord {
        id: 32,
        name: "Landspeeder",
        price: 500,
        rarity: 1,
        difficulty: 2,
        time: "24 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Frame(FrameStats {
            silhouette: 2,
            speed: 4,
            altitude: 20,
            hull_trauma: 7,
            hardpoints: 5,
            encumbrance: 5,
            crew: "One pilot",
            passengers: 2,
            assembly_crew: 1,
        }),
    },
    TemplateRecord {
        id: 33,
        name: "Airspeeder",
        price: 1000,
        rarity: 2,
        difficulty: 3,
        time: "24 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Can receive 'Larger Scope' upgrade twice",
        stats: Stats::Frame(FrameStats {
            silhouette: 2,
            speed: 4,
            altitude: 100000,
            hull_trauma: 5,
            hardpoints: 6,
            encumbrance: 5,
            crew: "One pilot",
            passengers: 2,
            assembly_crew: 1,
        }),
    },
    TemplateRecord {
        id: 34,
        name: "Walker",
        price: 5000,
        rarity: 2,
        difficulty: 3,
        time: "72 hours",
        skills: MECHANICS,
        restricted: false,
        special: "All-Terrain Legs (SM65); Race Hull has base speed 3",
        stats: Stats::Frame(FrameStats {
            silhouette: 3,
            speed: 5,
            altitude: 0,
            hull_trauma: 10,
            hardpoints: 8,
            encumbrance: 5,
            crew: "One pilot",
            passengers: 0,
            assembly_crew: 1,
        }),
    },
    TemplateRecord {
        id: 35,
        name: "Starfighter",
        price: 10000,
        rarity: 4,
        difficulty: 3,
        time: "72 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Frame(FrameStats {
            silhouette: 3,
            speed: 5,
            altitude: SPACE_ALTITUDE,
            hull_trauma: 10,
            hardpoints: 11,
            encumbrance: 5,
            crew: "One pilot",
            passengers: 0,
            assembly_crew: 1,
        }),
    },
    TemplateRecord {
        id: 36,
        name: "Transport",
        price: 75000,
        rarity: 3,
        difficulty: 3,
        time: "240 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Cargo Bays and Passenger Berths cost -1HP; can receive 'Integrated Improvements' twice",
        stats: Stats::Frame(FrameStats {
            silhouette: 4,
            speed: 4,
            altitude: SPACE_ALTITUDE,
            hull_trauma: 20,
            hardpoints: 17,
            encumbrance: 20,
            crew: "One pilot, one co-pilot",
            passengers: 4,
            assembly_crew: 5,
        }),
    },
    TemplateRecord {
        id: 38,
        name: "Corvette",
        price: 500000,
        rarity: 4,
        difficulty: 4,
        time: "480 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Can receive 'Integrated Improvements' twice",
        stats: Stats::Frame(FrameStats {
            silhouette: 5,
            speed: 3,
            altitude: SPACE_ALTITUDE,
            hull_trauma: 50,
            hardpoints: 33,
            encumbrance: 215,
            crew: "80 officers, pilots, and crew",
            passengers: 160,
            assembly_crew: 100,
        }),
    },
    TemplateRecord {
        id: 39,
        name: "Frigate",
        price: 1000000,
        rarity: 4,
        difficulty: 4,
        time: "480 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Medical Bays cost 1HP",
        stats: Stats::Frame(FrameStats {
            silhouette: 6,
            speed: 3,
            altitude: SPACE_ALTITUDE,
            hull_trauma: 80,
            hardpoints: 47,
            encumbrance: 0,
            crew: "1000",
            passengers: 0,
            assembly_crew: 100,
        }),
    },
    TemplateRecord {
        id: 40,
        name: "Heavy Cruiser",
        price: 2500000,
        rarity: 5,
        difficulty: 4,
        time: "1200 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Medical Bays and Weapon Banks cost 1HP",
        stats: Stats::Frame(FrameStats {
            silhouette: 7,
            speed: 3,
            altitude: SPACE_ALTITUDE,
            hull_trauma: 95,
            hardpoints: 65,
            encumbrance: 0,
            crew: "3000",
            passengers: 0,
            assembly_crew: 5000,
        }),
    },
    TemplateRecord {
        id: 41,
        name: "Destroyer",
        price: 10000000,
        rarity: 6,
        difficulty: 5,
        time: "1200 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Medical Bays and Weapon Banks cost 1HP; Cargo Bays, Hangar Bays, Repair Bays, Passenger Berths cost -1HP",
        stats: Stats::Frame(FrameStats {
            silhouette: 8,
            speed: 2,
            altitude: SPACE_ALTITUDE,
            hull_trauma: 125,
            hardpoints: 85,
            encumbrance: 0,
            crew: "8000",
            passengers: 0,
            assembly_crew: 5000,
        }),
    },
    TemplateRecord {
        id: 42,
        name: "Space Station",
        price: 50000000,
        rarity: 5,
        difficulty: 5,
        time: "2400 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Crafting Rules p5",
        stats: Stats::Frame(FrameStats {
            silhouette: 8,
            speed: 0,
            altitude: SPACE_ALTITUDE,
            hull_trauma: 150,
            hardpoints: 90,
            encumbrance: 0,
            crew: "0",
            passengers: 0,
            assembly_crew: 5000,
        }),
    },
    TemplateRecord {
        id: 54,
        name: "Patrol Ship",
        price: 500000,
        rarity: 4,
        difficulty: 4,
        time: "480 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Can receive 'Integrated Improvements' twice; spend Triumph during crafting to gain 'Unusually Agile'",
        stats: Stats::Frame(FrameStats {
            silhouette: 5,
            speed: 4,
            altitude: SPACE_ALTITUDE,
            hull_trauma: 40,
            hardpoints: 27,
            encumbrance: 20,
            crew: "8",
            passengers: 10,
            assembly_crew: 100,
        }),
    },
    TemplateRecord {
        id: 55,
        name: "Carrier",
        price: 1000000,
        rarity: 4,
        difficulty: 4,
        time: "480 hours",
        skills: MECHANICS,
        restricted: true,
        special: "Hangar and Repair Bays cost -1HP; can receive 'Larger Scope' and 'Integrated Improvements' twice",
        stats: Stats::Frame(FrameStats {
            silhouette: 6,
            speed: 3,
            altitude: SPACE_ALTITUDE,
            hull_trauma: 60,
            hardpoints: 37,
            encumbrance: 100,
            crew: "800",
            passengers: 250,
            assembly_crew: 100,
        }),
    },
];

pub(super) static ENGINES: &[TemplateRecord] = &[
    TemplateRecord {
        id: 43,
        name: "Single Coil",
        price: 250,
        rarity: 1,
        difficulty: 1,
        time: "8 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Engine(EngineStats {
            speed: 1,
            handling: 0,
            system_strain: 4,
        }),
    },
    TemplateRecord {
        id: 44,
        name: "Baffled Drive",
        price: 1500,
        rarity: 5,
        difficulty: 3,
        time: "24 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Add 2 Setback to checks to detect the vehicle by sensors",
        stats: Stats::Engine(EngineStats {
            speed: 0,
            handling: 0,
            system_strain: 6,
        }),
    },
    TemplateRecord {
        id: 45,
        name: "Ion Turbine",
        price: 2000,
        rarity: 3,
        difficulty: 2,
        time: "24 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Engine(EngineStats {
            speed: 1,
            handling: -1,
            system_strain: 8,
        }),
    },
    TemplateRecord {
        id: 46,
        name: "Fusial Thrust",
        price: 6000,
        rarity: 4,
        difficulty: 3,
        time: "48 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Engine(EngineStats {
            speed: 2,
            handling: -1,
            system_strain: 10,
        }),
    },
    TemplateRecord {
        id: 47,
        name: "Repulsor Array",
        price: 800,
        rarity: 2,
        difficulty: 2,
        time: "12 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Vehicle can hover; planetary use only",
        stats: Stats::Engine(EngineStats {
            speed: 0,
            handling: 1,
            system_strain: 5,
        }),
    },
    TemplateRecord {
        id: 48,
        name: "Drive Array",
        price: 15000,
        rarity: 5,
        difficulty: 4,
        time: "96 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Includes Class 3 hyperdrive",
        stats: Stats::Engine(EngineStats {
            speed: 1,
            handling: 0,
            system_strain: 12,
        }),
    },
];

pub(super) static HULLS: &[TemplateRecord] = &[
    TemplateRecord {
        id: 49,
        name: "Sleek",
        price: 500,
        rarity: 2,
        difficulty: 2,
        time: "12 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Hull(HullStats {
            armor: 0,
            handling: 1,
            defense: 0,
            hull_trauma: -1,
            cargo_multiplier: 1,
        }),
    },
    TemplateRecord {
        id: 50,
        name: "Holds",
        price: 750,
        rarity: 1,
        difficulty: 1,
        time: "16 hours",
        skills: MECHANICS,
        restricted: false,
        special: "Doubles encumbrance capacity",
        stats: Stats::Hull(HullStats {
            armor: 1,
            handling: -1,
            defense: 0,
            hull_trauma: 2,
            cargo_multiplier: 2,
        }),
    },
    TemplateRecord {
        id: 51,
        name: "Light",
        price: 300,
        rarity: 1,
        difficulty: 1,
        time: "8 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Hull(HullStats {
            armor: 1,
            handling: 0,
            defense: 0,
            hull_trauma: 0,
            cargo_multiplier: 1,
        }),
    },
    TemplateRecord {
        id: 52,
        name: "Deflective",
        price: 2500,
        rarity: 4,
        difficulty: 3,
        time: "24 hours",
        skills: MECHANICS,
        restricted: false,
        special: "",
        stats: Stats::Hull(HullStats {
            armor: 1,
            handling: 0,
            defense: 1,
            hull_trauma: 0,
            cargo_multiplier: 1,
        }),
    },
    TemplateRecord {
        id: 53,
        name: "Combat",
        price: 5000,
        rarity: 5,
        difficulty: 4,
        time: "48 hours",
        skills: MECHANICS,
        restricted: true,
        special: "",
        stats: Stats::Hull(HullStats {
            armor: 2,
            handling: -1,
            defense: 1,
            hull_trauma: 3,
            cargo_multiplier: 1,
        }),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_modifiers() {
        assert_eq!(signed(1), "+1");
        assert_eq!(signed(0), "+0");
        assert_eq!(signed(-1), "-1");
    }

    #[test]
    fn test_altitude_text() {
        let altitude = |id: u32| match &FRAMES.iter().find(|r| r.id == id).unwrap().stats {
            Stats::Frame(f) => f.altitude_text(),
            _ => unreachable!(),
        };
        assert_eq!(altitude(31), "15 meters");
        assert_eq!(altitude(34), "Ground");
        assert_eq!(altitude(35), "Space");
    }
}
