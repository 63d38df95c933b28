//! Chat command router.
//!
//! A chat event is a command when its type is `api` and its content starts
//! with [`COMMAND_PREFIX`]. The first token names the command, the remaining
//! whitespace-separated tokens are its positional arguments (no quoting).

use std::str::FromStr;

use metrics::counter;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::chat::Reply;
use crate::error::CommandResult;
use crate::rules::{self, contact, crafting, gm, navigation, recovery, repair, slicing, social, trade};
use crate::service::state::GameSession;

pub mod args;
pub mod registry;

pub use registry::CommandName;

use args::Args;

/// Every command starts with this
pub const COMMAND_PREFIX: &str = "!swrpg-";

/// Chat message type the host uses for script commands
const API_MESSAGE_TYPE: &str = "api";

/// A chat message as forwarded by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEvent {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub who: Option<String>,
}

/// A recognised command and its raw arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEnvelope {
    pub name: CommandName,
    pub args: Vec<String>,
}

/// Extract the command from a chat event; `None` for anything that is not
/// one of our commands
pub fn parse_envelope(event: &ChatEvent) -> Option<CommandEnvelope> {
    if event.kind != API_MESSAGE_TYPE || !event.content.starts_with(COMMAND_PREFIX) {
        return None;
    }

    let mut tokens = event.content.split_whitespace();
    let raw = tokens.next()?.to_lowercase();
    let name = raw.strip_prefix(COMMAND_PREFIX).unwrap_or(&raw);
    let Ok(name) = CommandName::from_str(name) else {
        debug!(command = %name, "Ignoring unknown command");
        return None;
    };

    Some(CommandEnvelope {
        name,
        args: tokens.map(str::to_string).collect(),
    })
}

/// Run a command against a game's session
pub fn dispatch(session: &mut GameSession, envelope: &CommandEnvelope) -> CommandResult<Vec<Reply>> {
    let args = Args::new(envelope.name, &envelope.args);

    let replies = match envelope.name {
        CommandName::Trade => trade::item(&args)?,
        CommandName::Repair => repair::item(&args)?,
        CommandName::Contact => contact::investigate(&args)?,

        CommandName::CraftUi => crafting::main(session),
        CommandName::CraftMode => crafting::mode(session, &args),
        CommandName::CraftTemplate => crafting::template(session, &args)?,
        CommandName::CraftAcquire => crafting::acquire(&args)?,
        CommandName::CraftConstruct => crafting::construct(session, &args)?,
        CommandName::CraftProgram | CommandName::CraftDirective => {
            crafting::program(session, &args)?
        }
        CommandName::CraftAssemble => crafting::assembly::assemble(session, &args)?,

        CommandName::SliceUi => slicing::main(session),
        CommandName::SliceAccess => slicing::access(),
        CommandName::SliceActivate => slicing::activate(),
        CommandName::SliceBackdoor => slicing::backdoor(),
        CommandName::SliceDisable => slicing::disable(),
        CommandName::SliceEnact => slicing::enact(),
        CommandName::SliceExpel => slicing::expel(),
        CommandName::SliceLockdown => slicing::lockdown(),
        CommandName::SliceRestart => slicing::restart(),
        CommandName::SliceTrace => slicing::trace(),
        CommandName::SliceSecurityInc => slicing::security_increase(session),
        CommandName::SliceSecurityDec => slicing::security_decrease(session),
        CommandName::SliceSecurityReset => slicing::security_reset(session),

        CommandName::SocialUi => social::main(),
        CommandName::SocialCharm => social::charm(),
        CommandName::SocialCoercion => social::coercion(),
        CommandName::SocialDeception => social::deception(),
        CommandName::SocialLeadership => social::leadership(),
        CommandName::SocialNegotiation => social::negotiation(),

        CommandName::NavUi => navigation::main(),
        CommandName::NavChase => navigation::chase(),
        CommandName::NavDifficulty => navigation::difficulty(&args)?,

        CommandName::RecoverUi => recovery::main(),
        CommandName::RecoverWound => recovery::wound(&args)?,
        CommandName::RecoverStrain => recovery::strain(),
        CommandName::RecoverInjury => recovery::injury(),
        CommandName::RecoverHull => recovery::hull(&args)?,
        CommandName::RecoverSystem => recovery::system(),
        CommandName::RecoverHit => recovery::hit(),

        CommandName::Ui => gm::main(),
    };
    Ok(replies)
}

/// Run one command and count it. Argument errors become a GM-only
/// "Invalid Command" card instead of failing the event.
pub fn handle(session: &mut GameSession, envelope: &CommandEnvelope) -> Vec<Reply> {
    let command = envelope.name.as_str();
    counter!("swrpg_commands_total", "command" => command).increment(1);

    match dispatch(session, envelope) {
        Ok(replies) => replies,
        Err(e) => {
            warn!(command, error = %e, "Invalid command arguments");
            counter!("swrpg_command_errors_total", "command" => command).increment(1);
            vec![rules::invalid_command(&e)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: &str, content: &str) -> ChatEvent {
        ChatEvent {
            kind: kind.to_string(),
            content: content.to_string(),
            who: None,
        }
    }

    #[test]
    fn test_parse_envelope() {
        let envelope = parse_envelope(&event("api", "!swrpg-trade 4  3 1\t1 100")).unwrap();
        assert_eq!(envelope.name, CommandName::Trade);
        assert_eq!(envelope.args, vec!["4", "3", "1", "1", "100"]);

        let envelope = parse_envelope(&event("api", "!swrpg-CRAFT-UI")).unwrap();
        assert_eq!(envelope.name, CommandName::CraftUi);
        assert!(envelope.args.is_empty());
    }

    #[test]
    fn test_parse_envelope_ignores_other_messages() {
        assert!(parse_envelope(&event("general", "!swrpg-trade 4 3 1 1 100")).is_none());
        assert!(parse_envelope(&event("api", "!eed 3g 2p")).is_none());
        assert!(parse_envelope(&event("api", "!swrpg-unknown 1 2")).is_none());
        assert!(parse_envelope(&event("api", "hello !swrpg-trade")).is_none());
    }

    #[test]
    fn test_chat_event_wire_format() {
        let event: ChatEvent =
            serde_json::from_str(r#"{"type": "api", "content": "!swrpg-ui", "who": "GM"}"#).unwrap();
        assert_eq!(event.kind, "api");
        assert_eq!(event.who.as_deref(), Some("GM"));

        let event: ChatEvent =
            serde_json::from_str(r#"{"type": "general", "content": "hi"}"#).unwrap();
        assert!(event.who.is_none());
    }

    #[test]
    fn test_handle_turns_errors_into_card() {
        let mut session = GameSession::new();
        let envelope = parse_envelope(&event("api", "!swrpg-repair major")).unwrap();
        let replies = handle(&mut session, &envelope);
        assert_eq!(replies.len(), 1);
        let content = replies[0].content().unwrap();
        assert!(content.contains("{{title=Invalid Command}}"));
        assert!(content.contains("repair: missing base price"));
    }

    #[test]
    fn test_handle_dispatches_with_session() {
        let mut session = GameSession::new();
        for content in ["!swrpg-craft-mode gadget", "!swrpg-craft-template 1"] {
            let envelope = parse_envelope(&event("api", content)).unwrap();
            handle(&mut session, &envelope);
        }
        let envelope = parse_envelope(&event("api", "!swrpg-craft-construct")).unwrap();
        let replies = handle(&mut session, &envelope);
        assert!(replies[0].content().unwrap().contains("{{subtitle=Simple Tool}}"));

        let envelope = parse_envelope(&event("api", "!swrpg-slice-security-inc")).unwrap();
        handle(&mut session, &envelope);
        assert_eq!(session.security_programs, 1);
    }
}
