use crate::buttons::{TRADE_LOCATION, ask, button, choose, crafting_main, row};
use crate::chat::{ChatMessageRecord, Reply};
use crate::commands::CommandName;
use crate::formula::{Condition, Relevance, Reputation};

use super::GM_SPEAKER;

/// `ui`: GM tools menu linking every area
pub fn main() -> Vec<Reply> {
    let plain = |label: &str, command| button(label, command, &[]);
    let trade = button(
        "Trade",
        CommandName::Trade,
        &[ask("Rarity", "0").as_str(), TRADE_LOCATION, ask("Base Price", "100").as_str()],
    );
    let repair = button(
        "Repair",
        CommandName::Repair,
        &[
            choose::<Condition>("Condition", |c| *c as i64).as_str(),
            ask("Base Price", "100").as_str(),
        ],
    );
    let contact = button(
        "Contact",
        CommandName::Contact,
        &[
            ask("Scope", "1").as_str(),
            ask("Expertise", "1").as_str(),
            ask("Obscurity", "1").as_str(),
            choose::<Reputation>("Reputation", |r| *r as i64).as_str(),
            choose::<Relevance>("Relevance", |r| *r as i64).as_str(),
        ],
    );

    let record = ChatMessageRecord::new()
        .with("title", "GM Tools")
        .with("prewide", plain("Medical Bay", CommandName::RecoverUi))
        .with("wide", crafting_main())
        .with(
            "wide2",
            row(&[
                plain("Navigation", CommandName::NavUi),
                plain("Chase", CommandName::NavChase),
            ]),
        )
        .with(
            "wide3",
            row(&[
                plain("Slicing", CommandName::SliceUi),
                plain("Social", CommandName::SocialUi),
            ]),
        )
        .with("wide4", row(&[repair, trade]))
        .with("wide5", contact);
    vec![Reply::private(GM_SPEAKER, record)]
}
