use crate::chat::{ChatMessageRecord, Reply};
use crate::commands::args::Args;
use crate::dice::PoolCommand;
use crate::error::CommandResult;
use crate::formula::{Relevance, Reputation, clamp_rating, contact_response_days};

const SPEAKER: &str = "Information Broker";

/// `contact scope expertise obscurity reputation relevance`
///
/// Rolls the network's check through the host dice engine, then whispers how
/// many days the answer takes.
pub fn investigate(args: &Args) -> CommandResult<Vec<Reply>> {
    let scope = args.int(0, "scope")?;
    let expertise = args.int(1, "expertise")?;
    let obscurity = args.int(2, "obscurity")?;
    let reputation: Reputation = args.coded(3, "reputation")?;
    let relevance: Relevance = args.coded(4, "relevance")?;

    let pool = PoolCommand {
        ability: clamp_rating(scope) as u32,
        ability_upgrades: clamp_rating(expertise) as u32,
        difficulty: clamp_rating(obscurity) as u32,
        difficulty_upgrades: relevance as u32 - 1,
    };
    let days = contact_response_days(obscurity, reputation, relevance);

    let record = ChatMessageRecord::new()
        .with("title", "Response Time")
        .with("Days", days);

    Ok(vec![
        Reply::roll(SPEAKER, &pool),
        Reply::private(SPEAKER, record),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandName;

    #[test]
    fn test_contact_roll_and_days() {
        let values: Vec<String> = ["2", "1", "2", "3", "1"].iter().map(|v| v.to_string()).collect();
        let replies = investigate(&Args::new(CommandName::Contact, &values)).unwrap();
        assert_eq!(replies.len(), 2);
        match &replies[0] {
            Reply::Roll(roll) => {
                assert_eq!(roll.speaking_as, "Information Broker");
                assert_eq!(
                    roll.command,
                    "!eed 2g 2p upgrade(ability|1) upgrade(difficulty|0)"
                );
            }
            other => panic!("expected roll, got {:?}", other),
        }
        assert!(replies[1].content().unwrap().ends_with("{{title=Response Time}}{{Days: 18}}"));
    }

    #[test]
    fn test_contact_ratings_clamped() {
        let values: Vec<String> = ["9", "7", "6", "famous", "none"].iter().map(|v| v.to_string()).collect();
        let replies = investigate(&Args::new(CommandName::Contact, &values)).unwrap();
        let Reply::Roll(roll) = &replies[0] else {
            panic!("expected roll");
        };
        assert_eq!(roll.command, "!eed 5g 5p upgrade(ability|5) upgrade(difficulty|3)");
    }

    #[test]
    fn test_contact_huge_obscurity_saturates() {
        let values: Vec<String> = ["1", "1", "9223372036854775807", "6", "4"]
            .iter()
            .map(|v| v.to_string())
            .collect();
        let replies = investigate(&Args::new(CommandName::Contact, &values)).unwrap();
        let Reply::Roll(roll) = &replies[0] else {
            panic!("expected roll");
        };
        assert_eq!(roll.command, "!eed 1g 5p upgrade(ability|1) upgrade(difficulty|3)");
        assert!(
            replies[1]
                .content()
                .unwrap()
                .ends_with(&format!("{{{{Days: {}}}}}", i64::MAX))
        );
    }
}
