//! Social encounter reference cards.

use crate::buttons::{button, row};
use crate::chat::{ChatMessageRecord, Reply};
use crate::commands::CommandName;
use crate::dice::Symbol::{Advantage, Boost, Despair, Setback, Success, Threat, Triumph};

const SPEAKER: &str = "C-4D4";

const OPPOSED_INTERESTS: &str =
    "Increase Difficulty when desired outcome is directly opposed to target's interests";

fn send(record: ChatMessageRecord) -> Vec<Reply> {
    vec![Reply::private(SPEAKER, record)]
}

fn lines(lines: &[String]) -> String {
    lines.join("\n")
}

pub fn main() -> Vec<Reply> {
    let b = |label: &str, command| button(label, command, &[]);
    send(
        ChatMessageRecord::new()
            .with("title", "Social Encounter")
            .with(
                "flavor",
                format!(
                    "Prior relationship may add {} / {} as appropriate",
                    Boost.count(1),
                    Setback.count(1)
                ),
            )
            .with(
                "wide",
                row(&[
                    b("Charm", CommandName::SocialCharm),
                    b("Coercion", CommandName::SocialCoercion),
                ]),
            )
            .with(
                "wide2",
                row(&[
                    b("Deception", CommandName::SocialDeception),
                    b("Leadership", CommandName::SocialLeadership),
                ]),
            )
            .with("wide3", b("Negotiation", CommandName::SocialNegotiation)),
    )
}

pub fn charm() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Charm (Presence)")
            .with("subtitle", "Opposed by: Cool")
            .with("flavor", OPPOSED_INTERESTS)
            .with(
                "wide",
                "Charming a crowd has a fixed difficulty instead of being opposed",
            )
            .with(
                "wide2",
                lines(&[
                    format!("Extra {} extends support for additional scenes", Success.count(1)),
                    format!("{} affects unexpected subjects beyond target", Advantage.count(1)),
                    format!(
                        "{} may be used to have target become minor recurring ally",
                        Triumph.count(1)
                    ),
                ]),
            )
            .with(
                "wide4",
                lines(&[
                    format!("{} reduces the number of affected people", Threat.count(1)),
                    format!(
                        "{} turns the NPC into a minor recurring adversary",
                        Despair.count(1)
                    ),
                ]),
            ),
    )
}

pub fn coercion() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Coercion (Willpower)")
            .with("subtitle", "Opposed by: Discipline")
            .with("flavor", OPPOSED_INTERESTS)
            .with(
                "wide",
                "Intimidating a crowd has a fixed difficulty instead of being opposed",
            )
            .with(
                "wide2",
                lines(&[
                    format!("{} inflicts 1 strain on the target", Success.count(2)),
                    format!("{} affects unexpected subjects beyond target", Advantage.count(2)),
                    format!(
                        "{} may be used to have target become subjugated, if flighty",
                        Triumph.count(1)
                    ),
                ]),
            )
            .with(
                "wide3",
                lines(&[
                    format!("{} builds resentment towards coercer", Threat.count(1)),
                    format!("{} reveals too much information to target", Despair.count(1)),
                ]),
            ),
    )
}

pub fn deception() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Deception (Cunning)")
            .with("subtitle", "Opposed by: Discipline")
            .with("flavor", OPPOSED_INTERESTS)
            .with(
                "wide",
                lines(&[
                    format!("Extra {} extends the life of the lie", Success.count(1)),
                    format!(
                        "{} increases the value of goods/services provided",
                        Advantage.count(1)
                    ),
                    format!(
                        "{} fools target into believing the liar is trustworthy",
                        Triumph.count(1)
                    ),
                ]),
            )
            .with(
                "wide2",
                lines(&[
                    format!("{} increases suspicion", Threat.count(1)),
                    format!(
                        "{} increases hostility and harms reputation",
                        Despair.count(1)
                    ),
                ]),
            ),
    )
}

pub fn leadership() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Leadership (Presence)")
            .with("subtitle", "Opposed by: Discipline")
            .with(
                "flavor",
                "Modify Difficulty based on complexity of orders and intelligence/professionalism of targets",
            )
            .with(
                "wide",
                lines(&[
                    format!(
                        "Extra {} extends duration of obedience or increases target effectiveness",
                        Success.count(1)
                    ),
                    format!("{} affects bystanders as well", Advantage.count(1)),
                    format!(
                        "{} may be used to have target become minor recurring ally",
                        Triumph.count(1)
                    ),
                ]),
            )
            .with(
                "wide2",
                lines(&[
                    format!("{} decreases effectiveness of targets", Threat.count(1)),
                    format!("{} undermines authority", Despair.count(1)),
                ]),
            ),
    )
}

pub fn negotiation() -> Vec<Reply> {
    send(
        ChatMessageRecord::new()
            .with("title", "Negotiation (Presence)")
            .with("subtitle", "Opposed by: Cool or Negotiation")
            .with(
                "wide",
                lines(&[
                    format!(
                        "Extra {} increases acting character's profit by 5% each or improves scope of agreement",
                        Success.count(1)
                    ),
                    format!(
                        "{} grants concessions on a failed check or extra perks on success",
                        Advantage.count(1)
                    ),
                    format!(
                        "{} target may become regular client or specialist vendor, may offer specific goods or referrals",
                        Triumph.count(1)
                    ),
                ]),
            )
            .with(
                "wide2",
                lines(&[
                    format!(
                        "{} decreases acting character's profit by 5% each or reduces scope of deal",
                        Threat.count(1)
                    ),
                    format!("{} seriously sabotages deal or relationship", Despair.count(1)),
                ]),
            ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_links_every_skill() {
        let content = main()[0].content().unwrap().to_string();
        for command in [
            "social-charm",
            "social-coercion",
            "social-deception",
            "social-leadership",
            "social-negotiation",
        ] {
            assert!(content.contains(&format!("(!swrpg-{})", command)), "{}", command);
        }
        assert!(content.contains("may add 1 Boost / 1 Setback"));
    }

    #[test]
    fn test_coercion_card() {
        let content = coercion()[0].content().unwrap().to_string();
        assert!(content.contains("{{title=Coercion (Willpower)}}"));
        assert!(content.contains("{{subtitle=Opposed by: Discipline}}"));
        assert!(content.contains("2 Success inflicts 1 strain on the target\n2 Advantage"));
    }

    #[test]
    fn test_negotiation_has_no_flavor() {
        let content = negotiation()[0].content().unwrap().to_string();
        assert!(!content.contains("flavor="));
        assert!(content.contains("1 Despair seriously sabotages deal or relationship"));
    }
}
