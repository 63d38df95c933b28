//! Slicing encounter reference cards and the security program counter.

use crate::buttons::{button, row};
use crate::chat::{ChatMessageRecord, Reply};
use crate::commands::CommandName;
use crate::dice::{Difficulty, Symbol};
use crate::service::state::GameSession;

const SPEAKER: &str = "H4-x0r";

fn send(record: ChatMessageRecord) -> Vec<Reply> {
    vec![Reply::private(SPEAKER, record)]
}

fn computers(difficulty: Difficulty) -> String {
    format!("Computers ({})", difficulty.dice())
}

/// `slice-ui`: encounter card with the active security program count
pub fn main(session: &GameSession) -> Vec<Reply> {
    let b = |label: &str, command| button(label, command, &[]);
    let record = ChatMessageRecord::new()
        .with("title", "Slicing Encounter")
        .with(
            "flavor",
            "Actions with * may only be executed by an Intruder when no Security Programs are active.",
        )
        .with(
            "prewide",
            format!(
                "*Active Security Programs: {}*\n{}",
                session.security_programs,
                row(&[
                    b("+1", CommandName::SliceSecurityInc),
                    b("-1", CommandName::SliceSecurityDec),
                    b("Reset", CommandName::SliceSecurityReset),
                ])
            ),
        )
        .with("wide", b("Access System", CommandName::SliceAccess))
        .with(
            "wide2",
            row(&[
                b("Activate Security Program", CommandName::SliceActivate),
                b("Disable Security Program", CommandName::SliceDisable),
            ]),
        )
        .with(
            "wide3",
            row(&[
                b("Enact Command*", CommandName::SliceEnact),
                b("Lockdown*", CommandName::SliceLockdown),
            ]),
        )
        .with(
            "wide4",
            row(&[
                b("Expel User", CommandName::SliceExpel),
                b("Trace User", CommandName::SliceTrace),
            ]),
        )
        .with(
            "wide5",
            row(&[
                b("Create Backdoor*", CommandName::SliceBackdoor),
                b("Restart System", CommandName::SliceRestart),
            ]),
        );
    send(record)
}

pub fn security_increase(session: &mut GameSession) -> Vec<Reply> {
    session.security_increase();
    main(session)
}

pub fn security_decrease(session: &mut GameSession) -> Vec<Reply> {
    session.security_decrease();
    main(session)
}

pub fn security_reset(session: &mut GameSession) -> Vec<Reply> {
    session.security_reset();
    main(session)
}

/// Access System; disabling a security program uses the same difficulties
pub fn access() -> Vec<Reply> {
    let record = ChatMessageRecord::new()
        .with("title", "Access Difficulties")
        .with("flavor", "Computers (INT)")
        .with(
            "prewide",
            format!(
                "**Defensive Slicing** adds {} per Rank\n**Improved Defensive Slicing** upgrades difficulty per Rank",
                Symbol::Setback.count(1)
            ),
        )
        .with("wide", format!("*Cantina Terminal, Datapad*: {}", Difficulty::Easy.dice()))
        .with("wide2", format!("*Common Vehicle Computer*: {}", Difficulty::Average.dice()))
        .with("wide3", format!("*Local HoloNet, Military system*: {}", Difficulty::Hard.dice()))
        .with(
            "wide4",
            format!("*Regional HoloNet, Imperial Datavault*: {}", Difficulty::Daunting.dice()),
        )
        .with("wide5", format!("*Ancient Archive*: {}", Difficulty::Formidable.dice()));
    send(record)
}

pub fn disable() -> Vec<Reply> {
    access()
}

pub fn activate() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Activate a Security Program")
            .with("flavor", computers(Difficulty::Average)),
    )
}

pub fn backdoor() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Create or Locate Backdoor")
            .with("flavor", computers(Difficulty::Hard)),
    )
}

pub fn enact() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Enact Command")
            .with("flavor", "Computers")
            .with(
                "wide",
                "Difficulty is set by similarity of command to the intended function of the system",
            ),
    )
}

pub fn expel() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Expel User")
            .with("flavor", "Opposed Computers")
            .with(
                "prewide",
                format!("Add {} per known Signature fragment", Symbol::Boost.count(1)),
            )
            .with(
                "wide",
                "If expelled, upgrade the difficulty of further Access System checks by two",
            ),
    )
}

pub fn lockdown() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Lockdown")
            .with("flavor", computers(Difficulty::Hard))
            .with("wide", "Character must have physical access to restart the system"),
    )
}

pub fn restart() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Restart System")
            .with("flavor", computers(Difficulty::Average))
            .with("wide", "Must have physical access")
            .with("wide2", "Takes one hour"),
    )
}

pub fn trace() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Trace User")
            .with("flavor", "Opposed Computers")
            .with(
                "prewide",
                format!("Add {} per known Signature fragment", Symbol::Boost.count(1)),
            )
            .with("header", "On Success, learn one of:")
            .with("wide", "Target's physical location")
            .with("wide2", "One segment of target's Signature")
            .with(
                "wide3",
                "Full list of actions target has taken in system this encounter",
            ),
    )
}
