//! Vehicle assembly: combine a frame, an engine and a hull into one profile.

use serde::Serialize;
use tracing::debug;

use crate::chat::{ChatMessageRecord, Reply};
use crate::commands::args::Args;
use crate::dice::difficulty_to_dice;
use crate::error::CommandResult;
use crate::service::state::GameSession;
use crate::tables::{self, EngineStats, FrameStats, HullStats, Stats, TemplateCategory, TemplateRecord};

use super::{CraftingMode, HOMEBREW, crafting_card, prompt};

/// Profile of an assembled vehicle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assembly {
    pub silhouette: u8,
    pub speed: u8,
    pub handling: i8,
    pub defense: u8,
    pub armor: u8,
    pub hull_trauma: u8,
    pub system_strain: u8,
    pub altitude: String,
    pub crew: &'static str,
    pub passengers: u32,
    pub encumbrance: u32,
    pub hardpoints: u8,
    pub assembly_crew: u32,
    /// Sum of the three parts' prices
    pub price: u64,
    /// Hardest of the three parts' checks
    pub difficulty: u8,
    pub restricted: bool,
    /// Any part uses house statistics
    pub homebrew: bool,
    pub special: Vec<&'static str>,
}

/// Combine three parts; `None` when a record is not the expected part
pub fn combine(
    frame: &TemplateRecord,
    engine: &TemplateRecord,
    hull: &TemplateRecord,
) -> Option<Assembly> {
    let (Stats::Frame(f), Stats::Engine(e), Stats::Hull(h)) = (&frame.stats, &engine.stats, &hull.stats)
    else {
        return None;
    };
    Some(assemble_stats(f, e, h, [frame, engine, hull]))
}

fn assemble_stats(
    frame: &FrameStats,
    engine: &EngineStats,
    hull: &HullStats,
    parts: [&TemplateRecord; 3],
) -> Assembly {
    let speed = (i16::from(frame.speed) + i16::from(engine.speed)).max(0);
    let hull_trauma = (i16::from(frame.hull_trauma) + i16::from(hull.hull_trauma)).max(0);
    Assembly {
        silhouette: frame.silhouette,
        speed: u8::try_from(speed).unwrap_or(u8::MAX),
        handling: engine.handling.saturating_add(hull.handling),
        defense: hull.defense,
        armor: hull.armor,
        hull_trauma: u8::try_from(hull_trauma).unwrap_or(u8::MAX),
        system_strain: engine.system_strain,
        altitude: frame.altitude_text(),
        crew: frame.crew,
        passengers: frame.passengers,
        encumbrance: frame.encumbrance * u32::from(hull.cargo_multiplier),
        hardpoints: frame.hardpoints,
        assembly_crew: frame.assembly_crew,
        price: parts.iter().map(|p| u64::from(p.price)).sum(),
        difficulty: parts.iter().map(|p| p.difficulty).max().unwrap_or(0),
        restricted: parts.iter().any(|p| p.restricted),
        homebrew: parts.iter().any(|p| p.is_homebrew()),
        special: parts
            .iter()
            .map(|p| p.special)
            .filter(|s| !s.is_empty())
            .collect(),
    }
}

impl Assembly {
    fn card(&self, names: [&str; 3]) -> ChatMessageRecord {
        let mut card = ChatMessageRecord::new()
            .with("title", "Vehicle Assembly")
            .with("subtitle", names.join(" / "))
            .with(
                "flavor",
                format!("Mechanics ({})", difficulty_to_dice(i64::from(self.difficulty))),
            )
            .with("prewide", format!("Assembly Crew: {}", self.assembly_crew))
            .with("Silhouette", self.silhouette)
            .with("Speed", self.speed)
            .with("Handling", format!("{:+}", self.handling))
            .with("Defense", self.defense)
            .with("Armor", self.armor)
            .with("Hull Trauma", self.hull_trauma)
            .with("System Strain", self.system_strain)
            .with("Altitude", &self.altitude)
            .with("Crew", self.crew)
            .with("Passengers", self.passengers)
            .with("Encumbrance", self.encumbrance)
            .with("Hard Points", self.hardpoints)
            .with("Total Price", self.price);
        if self.restricted {
            card.insert("Restricted", "Yes");
        }
        if !self.special.is_empty() {
            card.insert("Special", self.special.join("; "));
        }
        if self.homebrew {
            card.insert("Source", HOMEBREW);
        }
        card
    }
}

/// `craft-assemble [frame engine hull]`
///
/// Omitted ids fall back to the parts picked in the vehicle wizard. If any
/// part is still unknown the wizard switches to vehicle mode and shows its
/// prompt instead.
pub fn assemble(session: &mut GameSession, args: &Args) -> CommandResult<Vec<Reply>> {
    let build = session.vehicle;
    let frame_id = args.optional_id(0, "frame")?.or(build.frame);
    let engine_id = args.optional_id(1, "engine")?.or(build.engine);
    let hull_id = args.optional_id(2, "hull")?.or(build.hull);

    let part = |category, id: Option<u32>| id.and_then(|id| tables::lookup(category, id));
    let parts = (
        part(TemplateCategory::VehicleFrame, frame_id),
        part(TemplateCategory::VehicleEngine, engine_id),
        part(TemplateCategory::VehicleHull, hull_id),
    );
    let (Some(frame), Some(engine), Some(hull)) = parts else {
        debug!(?frame_id, ?engine_id, ?hull_id, "Vehicle parts incomplete");
        return Ok(enter_vehicle_wizard(session));
    };
    let Some(assembly) = combine(frame, engine, hull) else {
        return Ok(enter_vehicle_wizard(session));
    };

    let speaker = CraftingMode::Vehicle.speaker();
    let mut replies: Vec<Reply> = [frame, engine, hull]
        .into_iter()
        .map(|record| Reply::private(speaker, crafting_card(record)))
        .collect();
    replies.push(Reply::private(
        speaker,
        assembly.card([frame.name, engine.name, hull.name]),
    ));
    Ok(replies)
}

fn enter_vehicle_wizard(session: &mut GameSession) -> Vec<Reply> {
    session.select_mode(CraftingMode::Vehicle);
    vec![prompt(session, CraftingMode::Vehicle)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandName;

    fn record(category: TemplateCategory, id: u32) -> &'static TemplateRecord {
        tables::lookup(category, id).unwrap()
    }

    #[test]
    fn test_combine_landspeeder() {
        let assembly = combine(
            record(TemplateCategory::VehicleFrame, 32),
            record(TemplateCategory::VehicleEngine, 45),
            record(TemplateCategory::VehicleHull, 50),
        )
        .unwrap();
        assert_eq!(assembly.silhouette, 2);
        assert_eq!(assembly.speed, 5);
        assert_eq!(assembly.handling, -2);
        assert_eq!(assembly.hull_trauma, 9);
        assert_eq!(assembly.armor, 1);
        assert_eq!(assembly.system_strain, 8);
        assert_eq!(assembly.encumbrance, 10);
        assert_eq!(assembly.price, 500 + 2000 + 750);
        assert_eq!(assembly.difficulty, 2);
        assert_eq!(assembly.special, vec!["Doubles encumbrance capacity"]);
        assert!(!assembly.restricted);
    }

    #[test]
    fn test_combine_floors_and_restrictions() {
        // Space station with a restricted combat hull
        let assembly = combine(
            record(TemplateCategory::VehicleFrame, 42),
            record(TemplateCategory::VehicleEngine, 44),
            record(TemplateCategory::VehicleHull, 53),
        )
        .unwrap();
        assert_eq!(assembly.speed, 0);
        assert_eq!(assembly.altitude, "Space");
        assert_eq!(assembly.difficulty, 5);
        assert!(assembly.restricted);

        assert!(
            combine(
                record(TemplateCategory::VehicleEngine, 44),
                record(TemplateCategory::VehicleEngine, 44),
                record(TemplateCategory::VehicleHull, 53),
            )
            .is_none()
        );
    }

    #[test]
    fn test_assemble_uses_remembered_parts() {
        let mut session = GameSession::new();
        session.select_mode(CraftingMode::Vehicle);
        for (category, id) in [
            (TemplateCategory::VehicleFrame, 31),
            (TemplateCategory::VehicleEngine, 43),
            (TemplateCategory::VehicleHull, 49),
        ] {
            session.select_template(id, Some(record(category, id)));
        }

        let replies = assemble(&mut session, &Args::new(CommandName::CraftAssemble, &[])).unwrap();
        assert_eq!(replies.len(), 4);
        assert!(replies[0].content().unwrap().contains("{{title=Vehicle Frame Construction}}"));
        assert!(replies[2].content().unwrap().contains("{{subtitle=Sleek}}"));
        let summary = replies[3].content().unwrap();
        assert!(summary.contains("{{subtitle=Speeder Bike / Single Coil / Sleek}}"));
        assert!(summary.contains("{{Speed: 5}}"));
        assert!(summary.contains("{{Handling: +1}}"));
        assert!(summary.contains("{{Hull Trauma: 1}}"));
        assert!(summary.contains("{{Total Price: 1000}}"));
        assert!(summary.contains("{{Source: Homebrew}}"));
        assert!(!summary.contains("Special"));
        assert!(!replies[0].content().unwrap().contains("Homebrew"));
        assert!(replies[1].content().unwrap().contains("{{Source: Homebrew}}"));
    }

    #[test]
    fn test_assemble_incomplete_shows_prompt() {
        let mut session = GameSession::new();
        let values = vec!["31".to_string()];
        let replies = assemble(
            &mut session,
            &Args::new(CommandName::CraftAssemble, &values),
        )
        .unwrap();
        assert_eq!(replies.len(), 1);
        assert!(replies[0].content().unwrap().contains("{{title=Vehicle Construction}}"));
        assert_eq!(session.mode, Some(CraftingMode::Vehicle));
    }

    #[test]
    fn test_assemble_without_mode_enters_vehicle_wizard() {
        let mut session = GameSession::new();
        let replies = assemble(&mut session, &Args::new(CommandName::CraftAssemble, &[])).unwrap();
        assert_eq!(replies.len(), 1);
        assert!(replies[0].content().unwrap().contains("{{title=Vehicle Construction}}"));
        assert_eq!(session.mode, Some(CraftingMode::Vehicle));

        // Parts picked afterwards are remembered by the wizard
        session.select_template(31, Some(record(TemplateCategory::VehicleFrame, 31)));
        assert_eq!(session.vehicle.frame, Some(31));
    }

    #[test]
    fn test_assemble_keeps_parts_already_picked() {
        let mut session = GameSession::new();
        session.select_mode(CraftingMode::Vehicle);
        session.select_template(31, Some(record(TemplateCategory::VehicleFrame, 31)));
        assemble(&mut session, &Args::new(CommandName::CraftAssemble, &[])).unwrap();
        assert_eq!(session.vehicle.frame, Some(31));
    }
}
