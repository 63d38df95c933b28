//! Chat buttons and host macro references used on menu cards.
//!
//! A button is `[Label](!swrpg-command args)`; clicking it in the host sends
//! the command back through chat. `#Name` tokens are host macros that expand
//! into query prompts (for example the trade location drop-downs).

use std::fmt::Display;

use strum::IntoEnumIterator;

use crate::commands::{COMMAND_PREFIX, CommandName};

/// Host macros prompting for region, trade route proximity and population
pub const TRADE_LOCATION: &str = "#TradeLocation #TradeProximity #TradePopulation";

/// Render a chat button for a command
pub fn button(label: &str, command: CommandName, args: &[&str]) -> String {
    let mut target = format!("{}{}", COMMAND_PREFIX, command);
    for arg in args {
        target.push(' ');
        target.push_str(arg);
    }
    format!("[{}]({})", label, target)
}

/// Join several buttons on one line
pub fn row(buttons: &[String]) -> String {
    buttons.join(" ")
}

pub fn crafting_main() -> String {
    button("Crafting Station", CommandName::CraftUi, &[])
}

/// Host query asking for a free value, e.g. `?{Base Price|100}`
pub fn ask(prompt: &str, default: &str) -> String {
    format!("?{{{}|{}}}", prompt, default)
}

/// Host query offering every variant of an enum by name, answering its code
pub fn choose<T: IntoEnumIterator + Display>(prompt: &str, code: impl Fn(&T) -> i64) -> String {
    let options: Vec<String> = T::iter()
        .map(|v| format!("{},{}", v, code(&v)))
        .collect();
    format!("?{{{}|{}}}", prompt, options.join("|"))
}

/// Host query for a yes/no flag, first option is the default
pub fn yes_no(prompt: &str, default: bool) -> String {
    if default {
        format!("?{{{}|Yes,1|No,0}}", prompt)
    } else {
        format!("?{{{}|No,0|Yes,1}}", prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_without_args() {
        assert_eq!(crafting_main(), "[Crafting Station](!swrpg-craft-ui)");
    }

    #[test]
    fn test_queries() {
        use crate::formula::Condition;

        assert_eq!(ask("Base Price", "100"), "?{Base Price|100}");
        assert_eq!(
            choose::<Condition>("Condition", |c| *c as i64),
            "?{Condition|new,0|minor,1|moderate,2|major,3}"
        );
        assert_eq!(yes_no("Self heal", false), "?{Self heal|No,0|Yes,1}");
    }

    #[test]
    fn test_button_with_args() {
        assert_eq!(
            button("Select", CommandName::CraftTemplate, &["#CraftGadgetTemplate"]),
            "[Select](!swrpg-craft-template #CraftGadgetTemplate)"
        );
    }
}
