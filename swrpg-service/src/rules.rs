//! Domain calculators behind each chat command.
//!
//! Handlers are synchronous: they parse their own arguments, run formulas
//! and table lookups, and return the [`Reply`] list for the host to deliver.
//! Nothing in here sends chat directly.

pub mod contact;
pub mod crafting;
pub mod gm;
pub mod navigation;
pub mod recovery;
pub mod repair;
pub mod slicing;
pub mod social;
pub mod trade;

use crate::chat::{ChatMessageRecord, Reply};
use crate::error::CommandError;

/// Speaker for GM-level cards
pub const GM_SPEAKER: &str = "The Dark Side";

/// Round a credit amount up to a whole credit
pub fn credits(amount: f64) -> i64 {
    amount.ceil() as i64
}

/// Card whispered to the GM when a command's arguments cannot be parsed
pub fn invalid_command(error: &CommandError) -> Reply {
    let record = ChatMessageRecord::new()
        .with("title", "Invalid Command")
        .with("subtitle", format!("!swrpg-{}", error.command()))
        .with("wide", error);
    Reply::private(GM_SPEAKER, record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credits_round_up() {
        assert_eq!(credits(100.0), 100);
        assert_eq!(credits(100.25), 101);
        assert_eq!(credits(0.0), 0);
    }

    #[test]
    fn test_invalid_command_card() {
        let error = CommandError::MissingArgument {
            command: "repair".to_string(),
            name: "base price",
        };
        let reply = invalid_command(&error);
        assert_eq!(
            reply.content().unwrap(),
            "/w gm &{template:base} {{title=Invalid Command}}{{subtitle=!swrpg-repair}}{{wide=repair: missing base price}}"
        );
    }
}
