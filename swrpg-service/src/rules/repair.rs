use crate::chat::{ChatMessageRecord, Reply};
use crate::commands::args::Args;
use crate::dice::difficulty_to_dice;
use crate::error::CommandResult;
use crate::formula::{Condition, repair_cost};

use super::credits;

const SPEAKER: &str = "Repair Droid";

/// `repair condition basePrice`
pub fn item(args: &Args) -> CommandResult<Vec<Reply>> {
    let condition: Condition = args.coded(0, "condition")?;
    let base_price = args.number(1, "base price")?;

    let record = ChatMessageRecord::new()
        .with("title", "Item Repair")
        .with("Difficulty", difficulty_to_dice(condition.difficulty()))
        .with("Repair Cost", credits(repair_cost(condition, base_price)))
        .with("Self Repair", "Each Advantage reduces cost by 10%");

    Ok(vec![Reply::private(SPEAKER, record)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandName;

    #[test]
    fn test_repair_card() {
        let values = vec!["moderate".to_string(), "1000".to_string()];
        let replies = item(&Args::new(CommandName::Repair, &values)).unwrap();
        assert_eq!(
            replies[0].content().unwrap(),
            "/w gm &{template:base} {{title=Item Repair}}{{Difficulty: Average (◆◆)}}\
             {{Repair Cost: 500}}{{Self Repair: Each Advantage reduces cost by 10%}}"
        );
    }

    #[test]
    fn test_repair_new_item_is_free() {
        let values = vec!["0".to_string(), "1000".to_string()];
        let replies = item(&Args::new(CommandName::Repair, &values)).unwrap();
        assert!(replies[0].content().unwrap().contains("{{Repair Cost: 0}}"));
    }

    #[test]
    fn test_repair_unknown_condition() {
        let values = vec!["7".to_string(), "1000".to_string()];
        assert!(item(&Args::new(CommandName::Repair, &values)).is_err());
    }
}
