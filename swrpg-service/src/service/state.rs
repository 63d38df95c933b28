//! Per-game state for the chat command handlers.
//!
//! One [`GameSession`] exists per game id. It carries the crafting wizard's
//! progress and the slicing encounter's security counter, and is dropped by
//! the idle sweeper when a table goes quiet.

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::rules::crafting::CraftingMode;
use crate::tables::{Stats, TemplateRecord};

/// Parts chosen while building a vehicle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VehicleBuild {
    pub frame: Option<u32>,
    pub engine: Option<u32>,
    pub hull: Option<u32>,
}

impl VehicleBuild {
    /// Store a record in its matching slot; records that are not vehicle
    /// parts are ignored
    pub fn remember(&mut self, record: &TemplateRecord) {
        match record.stats {
            Stats::Frame(_) => self.frame = Some(record.id),
            Stats::Engine(_) => self.engine = Some(record.id),
            Stats::Hull(_) => self.hull = Some(record.id),
            _ => {}
        }
    }
}

/// Wizard and encounter state of one game table
#[derive(Debug, Clone)]
pub struct GameSession {
    pub mode: Option<CraftingMode>,
    pub selection: Option<u32>,
    pub vehicle: VehicleBuild,
    pub security_programs: u32,
    pub last_seen: Instant,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self {
            mode: None,
            selection: None,
            vehicle: VehicleBuild::default(),
            security_programs: 0,
            last_seen: Instant::now(),
        }
    }

    pub fn touch(&mut self) {
        self.last_seen = Instant::now();
    }

    pub fn is_idle(&self, timeout: Duration) -> bool {
        self.last_seen.elapsed() > timeout
    }

    /// Back to the crafting main menu with nothing selected
    pub fn reset_crafting(&mut self) {
        self.mode = None;
        self.selection = None;
        self.vehicle = VehicleBuild::default();
    }

    /// Enter a crafting mode; a different mode drops the previous selection
    pub fn select_mode(&mut self, mode: CraftingMode) {
        if self.mode != Some(mode) {
            self.selection = None;
            self.vehicle = VehicleBuild::default();
        }
        self.mode = Some(mode);
    }

    pub fn select_template(&mut self, id: u32, record: Option<&TemplateRecord>) {
        self.selection = Some(id);
        if let (Some(CraftingMode::Vehicle), Some(record)) = (self.mode, record) {
            self.vehicle.remember(record);
        }
    }

    pub fn security_increase(&mut self) {
        self.security_programs = self.security_programs.saturating_add(1);
    }

    pub fn security_decrease(&mut self) {
        self.security_programs = self.security_programs.saturating_sub(1);
    }

    pub fn security_reset(&mut self) {
        self.security_programs = 0;
    }
}
