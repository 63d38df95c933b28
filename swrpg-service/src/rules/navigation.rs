use crate::buttons::{button, choose, yes_no};
use crate::chat::{ChatMessageRecord, Reply};
use crate::commands::CommandName;
use crate::commands::args::Args;
use crate::dice::difficulty_to_dice;
use crate::error::CommandResult;
use crate::formula::{Route, navigation_difficulty};

const NAVIGATOR: &str = "Navigator Holomap";
const CHASE: &str = "SecFor Holocam";

fn astrogation_button() -> String {
    button(
        "Astrogation",
        CommandName::NavDifficulty,
        &[
            choose::<Route>("Route", |r| *r as i64).as_str(),
            yes_no("Hyperdrive damaged", false).as_str(),
            yes_no("Navicomputer", true).as_str(),
        ],
    )
}

/// `nav-ui`: terrain navigation steps
pub fn main() -> Vec<Reply> {
    let record = ChatMessageRecord::new()
        .with("title", "Terrain Navigation")
        .with("wide", "Step 1: Determine range scale")
        .with("wide2", "Step 2: Determine initial range separation")
        .with("wide3", "Step 3: Determine Difficulty")
        .with("wide4", astrogation_button());
    vec![Reply::private(NAVIGATOR, record)]
}

/// `nav-chase`: chase encounter steps
pub fn chase() -> Vec<Reply> {
    let record = ChatMessageRecord::new()
        .with("title", "Chase Encounter")
        .with("wide", "Step 1: Determine range scale")
        .with("wide2", "Step 2: Determine initial range separation")
        .with("wide3", "Step 3: Determine Difficulty");
    vec![Reply::private(CHASE, record)]
}

/// `nav-difficulty route [damaged] [navicomputer]`
pub fn difficulty(args: &Args) -> CommandResult<Vec<Reply>> {
    let route: Route = args.coded(0, "route")?;
    let damaged = args.flag(1, "hyperdrive damaged", false)?;
    let navicomputer = args.flag(2, "navicomputer", true)?;

    let difficulty = navigation_difficulty(route, damaged, navicomputer);
    let record = ChatMessageRecord::new()
        .with("title", "Hyperspace Navigation")
        .with("flavor", format!("Astrogation ({})", difficulty_to_dice(difficulty)))
        .with("Route", route)
        .with("Hyperdrive", if damaged { "Damaged" } else { "Operational" })
        .with("Navicomputer", if navicomputer { "Installed" } else { "Missing" });
    Ok(vec![Reply::private(NAVIGATOR, record)])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(values: &[&str]) -> CommandResult<Vec<Reply>> {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        difficulty(&Args::new(CommandName::NavDifficulty, &values))
    }

    #[test]
    fn test_astrogation_difficulty() {
        let replies = run(&["remote", "1", "0"]).unwrap();
        let content = replies[0].content().unwrap();
        assert!(content.contains("{{flavor=Astrogation (Formidable (◆◆◆◆◆))}}"));
        assert!(content.contains("{{Route: remote}}"));
        assert!(content.contains("{{Navicomputer: Missing}}"));

        let replies = run(&["1"]).unwrap();
        assert!(replies[0].content().unwrap().contains("Astrogation (Easy (◆))"));
        assert!(run(&["galactic"]).is_err());
    }

    #[test]
    fn test_menu_cards() {
        let content = main()[0].content().unwrap().to_string();
        assert!(content.contains("{{title=Terrain Navigation}}"));
        assert!(content.contains(
            "(!swrpg-nav-difficulty ?{Route|local,1|established,2|remote,3|uncharted,4} \
             ?{Hyperdrive damaged|No,0|Yes,1} ?{Navicomputer|Yes,1|No,0})"
        ));
        match &chase()[0] {
            Reply::Chat(chat) => assert_eq!(chat.speaking_as, "SecFor Holocam"),
            other => panic!("expected chat, got {:?}", other),
        }
    }
}
