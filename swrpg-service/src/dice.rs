//! Dice text for chat cards and dice-pool commands for the host dice engine.
//!
//! The host owns rolling. This module only renders symbol text for reference
//! cards and builds `!eed` command strings that the host shim forwards to
//! its dice engine.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

/// Check difficulty, indexed 0 (Simple) through 5 (Formidable)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter, Serialize)]
#[repr(u8)]
pub enum Difficulty {
    Simple = 0,
    Easy = 1,
    Average = 2,
    Hard = 3,
    Daunting = 4,
    Formidable = 5,
}

impl Difficulty {
    /// Convert a numeric difficulty, clamping to the 0-5 range
    pub fn from_level(level: i64) -> Self {
        match crate::formula::clamp_difficulty(level) {
            0 => Difficulty::Simple,
            1 => Difficulty::Easy,
            2 => Difficulty::Average,
            3 => Difficulty::Hard,
            4 => Difficulty::Daunting,
            _ => Difficulty::Formidable,
        }
    }

    /// Difficulty name followed by its dice, e.g. `Hard (◆◆◆)`
    pub fn dice(self) -> String {
        let count = self as usize;
        if count == 0 {
            format!("{} (-)", self)
        } else {
            format!("{} ({})", self, DIFFICULTY_DIE.repeat(count))
        }
    }
}

const DIFFICULTY_DIE: &str = "◆";

/// Render the dice for a numeric difficulty
pub fn difficulty_to_dice(level: i64) -> String {
    Difficulty::from_level(level).dice()
}

/// Symbols and dice referenced on reference cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Symbol {
    Success,
    Advantage,
    Triumph,
    Failure,
    Threat,
    Despair,
    Boost,
    Setback,
}

impl Symbol {
    /// Text for `count` of this symbol, e.g. `2 Advantage`
    pub fn count(self, count: u32) -> String {
        format!("{} {}", count, self)
    }
}

/// Request to the host dice engine, in the `!eed` command syntax
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolCommand {
    pub ability: u32,
    pub difficulty: u32,
    pub ability_upgrades: u32,
    pub difficulty_upgrades: u32,
}

impl PoolCommand {
    /// Build the chat command understood by the dice engine
    pub fn to_command(&self) -> String {
        let mut parts = vec!["!eed".to_string()];
        if self.ability > 0 {
            parts.push(format!("{}g", self.ability));
        }
        if self.difficulty > 0 {
            parts.push(format!("{}p", self.difficulty));
        }
        parts.push(format!("upgrade(ability|{})", self.ability_upgrades));
        parts.push(format!("upgrade(difficulty|{})", self.difficulty_upgrades));
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_dice() {
        assert_eq!(difficulty_to_dice(0), "Simple (-)");
        assert_eq!(difficulty_to_dice(3), "Hard (◆◆◆)");
        assert_eq!(difficulty_to_dice(9), "Formidable (◆◆◆◆◆)");
        assert_eq!(difficulty_to_dice(-1), "Simple (-)");
    }

    #[test]
    fn test_symbol_count() {
        assert_eq!(Symbol::Success.count(2), "2 Success");
        assert_eq!(Symbol::Setback.count(1), "1 Setback");
    }

    #[test]
    fn test_pool_command() {
        let pool = PoolCommand {
            ability: 3,
            difficulty: 2,
            ability_upgrades: 1,
            difficulty_upgrades: 0,
        };
        assert_eq!(
            pool.to_command(),
            "!eed 3g 2p upgrade(ability|1) upgrade(difficulty|0)"
        );
    }
}
