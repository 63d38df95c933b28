//! Chat message formatting for the host's "base" roll template.
//!
//! Structural template slots are written as `{{key=value}}`; any other label
//! is written as `{{key: value}}` so the template shows it as a row.

use serde::Serialize;

use crate::dice::PoolCommand;

/// Roll template slots the host interprets itself
pub const STRUCTURAL_KEYS: [&str; 13] = [
    "title", "flavor", "roll", "results", "subtitle", "header", "item", "prewide", "wide",
    "wide2", "wide3", "wide4", "wide5",
];

/// Placeholder shown when a template record is missing
pub const NONE_PLACEHOLDER: &str = "- None -";

/// Ordered label/value pairs for one chat card
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChatMessageRecord {
    entries: Vec<(String, String)>,
}

impl ChatMessageRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`ChatMessageRecord::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    /// Set a value; an existing key keeps its position
    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Render a record into roll template markup
pub fn render(record: &ChatMessageRecord) -> String {
    record
        .iter()
        .map(|(key, value)| {
            let separator = if STRUCTURAL_KEYS.contains(&key) {
                "="
            } else {
                ": "
            };
            format!("{{{{{}{}{}}}}}", key, separator, value)
        })
        .collect()
}

/// Who can see a chat message
///
/// Every command whispers to the GM; the public form only exists so the
/// formatter can be checked against the host's plain template prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Delivery {
    /// Visible to all players
    #[cfg(test)]
    Public,
    /// Whispered to the GM only
    Private,
}

impl Delivery {
    fn prefix(self) -> &'static str {
        match self {
            #[cfg(test)]
            Delivery::Public => "&{template:base} ",
            Delivery::Private => "/w gm &{template:base} ",
        }
    }
}

/// Chat message ready for the host's `sendChat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingChat {
    pub speaking_as: String,
    pub content: String,
    pub delivery: Delivery,
    pub noarchive: bool,
}

impl OutgoingChat {
    pub fn new(speaking_as: &str, record: &ChatMessageRecord, delivery: Delivery) -> Self {
        Self {
            speaking_as: speaking_as.to_string(),
            content: format!("{}{}", delivery.prefix(), render(record)),
            delivery,
            noarchive: true,
        }
    }
}

/// Dice pool the host should roll on behalf of a speaker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiceRequest {
    pub speaking_as: String,
    pub command: String,
}

impl DiceRequest {
    pub fn new(speaking_as: &str, pool: &PoolCommand) -> Self {
        Self {
            speaking_as: speaking_as.to_string(),
            command: pool.to_command(),
        }
    }
}

/// Something for the host to do after a command ran
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    Chat(OutgoingChat),
    Roll(DiceRequest),
}

impl Reply {
    /// Whisper a record to the GM
    pub fn private(speaking_as: &str, record: ChatMessageRecord) -> Self {
        Reply::Chat(OutgoingChat::new(speaking_as, &record, Delivery::Private))
    }

    pub fn roll(speaking_as: &str, pool: &PoolCommand) -> Self {
        Reply::Roll(DiceRequest::new(speaking_as, pool))
    }

    /// Chat content, if this is a chat reply
    #[cfg(test)]
    pub fn content(&self) -> Option<&str> {
        match self {
            Reply::Chat(chat) => Some(&chat.content),
            Reply::Roll(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_mixed_keys() {
        let record = ChatMessageRecord::new()
            .with("title", "Trade Negotiations")
            .with("Difficulty", 3);
        assert_eq!(
            render(&record),
            "{{title=Trade Negotiations}}{{Difficulty: 3}}"
        );
    }

    #[test]
    fn test_render_structural_only_uses_equals() {
        let record = ChatMessageRecord::new()
            .with("title", "GM Tools")
            .with("wide", "a")
            .with("wide5", "b");
        let out = render(&record);
        assert!(!out.contains(": "));
        assert_eq!(out, "{{title=GM Tools}}{{wide=a}}{{wide5=b}}");
    }

    #[test]
    fn test_render_labels_only_use_colon() {
        let record = ChatMessageRecord::new()
            .with("Purchase Price", 400)
            .with("Days", 18);
        let out = render(&record);
        assert!(!out.contains('='));
        assert_eq!(out, "{{Purchase Price: 400}}{{Days: 18}}");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut record = ChatMessageRecord::new().with("title", "A").with("Cost", 1);
        record.insert("title", "B");
        assert_eq!(render(&record), "{{title=B}}{{Cost: 1}}");
        assert_eq!(record.get("title"), Some("B"));
    }

    #[test]
    fn test_delivery_prefixes() {
        let record = ChatMessageRecord::new().with("title", "X");
        let private = OutgoingChat::new("Droid", &record, Delivery::Private);
        assert_eq!(private.content, "/w gm &{template:base} {{title=X}}");
        assert!(private.noarchive);

        let public = OutgoingChat::new("Droid", &record, Delivery::Public);
        assert_eq!(public.content, "&{template:base} {{title=X}}");
    }

    #[test]
    fn test_reply_serialization() {
        let reply = Reply::private("Repair Droid", ChatMessageRecord::new().with("title", "X"));
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["kind"], "chat");
        assert_eq!(json["speaking_as"], "Repair Droid");
        assert_eq!(json["delivery"], "private");
    }
}
