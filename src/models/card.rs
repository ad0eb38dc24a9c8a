//! Card is a pair <title, content>. The title doubles as the lookup key for edits
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl Card {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new("Ownership", "Each value has a single owner");

        assert_eq!(card.title, "Ownership");
        assert_eq!(card.content, "Each value has a single owner");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let card: Card = serde_json::from_str(r#"{ "title": "Only a title" }"#).unwrap();
        assert_eq!(card.title, "Only a title");
        assert_eq!(card.content, "");

        let card: Card = serde_json::from_str("{}").unwrap();
        assert_eq!(card, Card::default());
    }
}
