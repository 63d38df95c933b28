use tracing::debug;

use crate::chat::{ChatMessageRecord, Reply};
use crate::commands::args::Args;
use crate::dice::{Symbol, difficulty_to_dice};
use crate::error::CommandResult;
use crate::formula::{purchase_price, sell_prices, trade_difficulty};

use super::credits;

const SPEAKER: &str = "Trade Representative";

/// `trade rarity region proximity population basePrice`
pub fn item(args: &Args) -> CommandResult<Vec<Reply>> {
    let rarity = args.int(0, "rarity")?;
    let region = args.coded(1, "region")?;
    let proximity = args.coded(2, "proximity")?;
    let population = args.coded(3, "population")?;
    let base_price = args.number(4, "base price")?;

    let difficulty = trade_difficulty(rarity, region, proximity, population);
    let buy = credits(purchase_price(difficulty, base_price));
    let sell = sell_prices(buy as f64).map(credits);
    debug!(difficulty, buy, ?region, "Trade calculated");

    let record = ChatMessageRecord::new()
        .with("title", "Trade Negotiations")
        .with(
            "flavor",
            format!("Negotiation or Streetwise ({})", difficulty_to_dice(difficulty)),
        )
        .with("prewide", format!("Purchase Price: {}", buy))
        .with("header", "Sell Prices")
        .with("wide", format!("{} {}", Symbol::Success.count(1), sell[0]))
        .with("wide2", format!("{} {}", Symbol::Success.count(2), sell[1]))
        .with("wide3", format!("{} {}", Symbol::Success.count(3), sell[2]));

    Ok(vec![Reply::private(SPEAKER, record)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandName;

    fn run(values: &[&str]) -> CommandResult<Vec<Reply>> {
        let values: Vec<String> = values.iter().map(|v| v.to_string()).collect();
        item(&Args::new(CommandName::Trade, &values))
    }

    #[test]
    fn test_trade_card() {
        // rarity 4 -> 2, Mid Rim +1, Near 0, Average 0 -> Hard; price x3
        let replies = run(&["4", "3", "1", "1", "100"]).unwrap();
        assert_eq!(replies.len(), 1);
        let content = replies[0].content().unwrap();
        assert!(content.starts_with("/w gm &{template:base} {{title=Trade Negotiations}}"));
        assert!(content.contains("{{flavor=Negotiation or Streetwise (Hard (◆◆◆))}}"));
        assert!(content.contains("{{prewide=Purchase Price: 300}}"));
        assert!(content.contains("{{header=Sell Prices}}"));
        assert!(content.contains("{{wide=1 Success 75}}"));
        assert!(content.contains("{{wide2=2 Success 150}}"));
        assert!(content.contains("{{wide3=3 Success 225}}"));
    }

    #[test]
    fn test_trade_accepts_names_and_rounds_up() {
        let replies = run(&["0", "core", "on", "high", "99.5"]).unwrap();
        let content = replies[0].content().unwrap();
        assert!(content.contains("Simple (-)"));
        assert!(content.contains("Purchase Price: 100}}"));
        assert!(content.contains("{{wide=1 Success 25}}"));
    }

    #[test]
    fn test_trade_rejects_bad_price() {
        assert!(run(&["4", "3", "1", "1", "abc"]).is_err());
        assert!(run(&["4", "3", "1"]).is_err());
    }
}
