//! Recovery reference cards for characters and vehicles.
//!
//! The wound and hull trauma cards also work out the repair check's
//! difficulty when the current damage and threshold are supplied.

use crate::buttons::{ask, button, row, yes_no};
use crate::chat::{ChatMessageRecord, Reply};
use crate::commands::CommandName;
use crate::commands::args::Args;
use crate::dice::{Symbol, difficulty_to_dice};
use crate::error::CommandResult;
use crate::formula::{hull_repair_difficulty, medicine_difficulty};

const SPEAKER: &str = "TB-77";

fn send(record: ChatMessageRecord) -> Vec<Reply> {
    vec![Reply::private(SPEAKER, record)]
}

pub fn main() -> Vec<Reply> {
    let wound = button(
        "Wounds",
        CommandName::RecoverWound,
        &[
            ask("Wounds", "0").as_str(),
            ask("Wound Threshold", "10").as_str(),
            yes_no("Healing self", false).as_str(),
            yes_no("Medical equipment", true).as_str(),
        ],
    );
    let hull = button(
        "Hull Trauma",
        CommandName::RecoverHull,
        &[ask("Hull Trauma", "0").as_str(), ask("Hull Trauma Threshold", "10").as_str()],
    );
    let record = ChatMessageRecord::new()
        .with("title", "Medical Bay")
        .with("wide", "**Character:**")
        .with(
            "wide2",
            row(&[
                wound,
                button("Strain", CommandName::RecoverStrain, &[]),
                button("Critical Injury", CommandName::RecoverInjury, &[]),
            ]),
        )
        .with("wide3", "**Vehicle:**")
        .with(
            "wide4",
            row(&[
                hull,
                button("System Strain", CommandName::RecoverSystem, &[]),
                button("Critical Hit", CommandName::RecoverHit, &[]),
            ]),
        );
    send(record)
}

/// `recover-wound [wounds threshold self equipment]`
pub fn wound(args: &Args) -> CommandResult<Vec<Reply>> {
    let mut record = ChatMessageRecord::new()
        .with("title", "Wound Recovery")
        .with("wide", "Full night rest: recover 1 Wound")
        .with(
            "wide2",
            format!(
                "Medicine check once per encounter: each {} heals 1 Wound, each {} heals 1 Strain",
                Symbol::Success,
                Symbol::Advantage
            ),
        )
        .with(
            "wide3",
            "Stimpacks heal 5 Wounds, 1 fewer for each used that day",
        );
    if !args.is_empty() {
        let wounds = args.int(0, "wounds")?;
        let threshold = args.int(1, "wound threshold")?;
        let self_heal = args.flag(2, "healing self", false)?;
        let equipment = args.flag(3, "medical equipment", true)?;
        let difficulty = medicine_difficulty(wounds, threshold, self_heal, equipment);
        record.insert("flavor", format!("Medicine ({})", difficulty_to_dice(difficulty)));
        record.insert("Wounds", format!("{} / {}", wounds, threshold));
    }
    Ok(send(record))
}

pub fn strain() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Strain Recovery")
            .with(
                "wide",
                format!(
                    "End of encounter: Simple Cool or Discipline check, each {} recovers 1 Strain",
                    Symbol::Success
                ),
            )
            .with("wide2", "Full night rest: recover all Strain"),
    )
}

pub fn injury() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Critical Injury Recovery")
            .with("flavor", "Medicine (difficulty equals the injury's severity)")
            .with("wide", "One attempt per week for each Critical Injury")
            .with("wide2", "A bacta tank allows one attempt per day instead"),
    )
}

/// `recover-hull [trauma threshold]`
pub fn hull(args: &Args) -> CommandResult<Vec<Reply>> {
    let mut record = ChatMessageRecord::new()
        .with("title", "Hull Trauma Recovery")
        .with(
            "wide",
            format!(
                "Mechanics check once per day: each {} repairs 1 Hull Trauma",
                Symbol::Success
            ),
        )
        .with("wide2", "Starport repairs: 500 credits per point of Hull Trauma");
    if !args.is_empty() {
        let trauma = args.int(0, "hull trauma")?;
        let threshold = args.int(1, "hull trauma threshold")?;
        let difficulty = hull_repair_difficulty(trauma, threshold);
        record.insert("flavor", format!("Mechanics ({})", difficulty_to_dice(difficulty)));
        record.insert("Hull Trauma", format!("{} / {}", trauma, threshold));
    }
    Ok(send(record))
}

pub fn system() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "System Strain Recovery")
            .with(
                "wide",
                format!(
                    "Damage control: Mechanics check, each {} removes 1 System Strain",
                    Symbol::Success
                ),
            )
            .with("wide2", "All System Strain recovers once the vehicle is powered down for a rest"),
    )
}

pub fn hit() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Critical Hit Recovery")
            .with("flavor", "Mechanics (difficulty equals the hit's severity)")
            .with("wide", "Each successful check repairs one Critical Hit"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_wound_reference_only() {
        let replies = wound(&Args::new(CommandName::RecoverWound, &[])).unwrap();
        let content = replies[0].content().unwrap();
        assert!(content.contains("{{title=Wound Recovery}}{{wide=Full night rest: recover 1 Wound}}"));
        assert!(!content.contains("flavor="));
    }

    #[test]
    fn test_wound_difficulty() {
        let v = values(&["8", "10", "yes", "no"]);
        let replies = wound(&Args::new(CommandName::RecoverWound, &v)).unwrap();
        let content = replies[0].content().unwrap();
        assert!(content.contains("{{flavor=Medicine (Formidable (◆◆◆◆◆))}}"));
        assert!(content.contains("{{Wounds: 8 / 10}}"));

        let v = values(&["8"]);
        assert!(wound(&Args::new(CommandName::RecoverWound, &v)).is_err());
    }

    #[test]
    fn test_hull_difficulty() {
        let v = values(&["12", "10"]);
        let replies = hull(&Args::new(CommandName::RecoverHull, &v)).unwrap();
        assert!(replies[0].content().unwrap().contains("{{flavor=Mechanics (Hard (◆◆◆))}}"));
    }

    #[test]
    fn test_medical_bay_menu() {
        let content = main()[0].content().unwrap().to_string();
        assert!(content.contains("{{title=Medical Bay}}"));
        assert!(content.contains("[Strain](!swrpg-recover-strain)"));
        assert!(content.contains("[Hull Trauma](!swrpg-recover-hull ?{Hull Trauma|0} ?{Hull Trauma Threshold|10})"));
    }
}
