//! JSON decoding for card documents.
//! Reads `{ "cards": [ { "title": ..., "content": ... } ] }` from a file or a URL.

use crate::error::{LoadError, Result};
use crate::models::Deck;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Parses a cards document. A document without a `cards` key is an empty deck.
pub fn parse_deck(contents: &str) -> Result<Deck> {
    let deck: Deck = serde_json::from_str(contents)?;
    Ok(deck)
}

/// Reads a cards document from a local file.
pub fn read_deck(path: &Path) -> Result<Deck> {
    let mut file = File::open(path).map_err(|e| LoadError::Read(path.to_path_buf(), e))?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| LoadError::Read(path.to_path_buf(), e))?;

    parse_deck(&contents)
}

/// Fetches a cards document with a plain unauthenticated GET.
pub fn fetch_deck(url: &str) -> Result<Deck> {
    let res = reqwest::blocking::get(url).map_err(|e| LoadError::Fetch(url.to_owned(), e))?;
    let status = res.status();
    if !status.is_success() {
        return Err(LoadError::Status(url.to_owned(), status));
    }

    let contents = res.text().map_err(|e| LoadError::Fetch(url.to_owned(), e))?;
    parse_deck(&contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Card;
    use std::fs;

    #[test]
    fn test_parse_deck() {
        let json_content = r#"{
  "cards": [
    { "title": "Move", "content": "Transfers ownership" },
    { "title": "Borrow", "content": "Temporary access" }
  ]
}"#;

        let deck = parse_deck(json_content).unwrap();
        assert_eq!(
            deck.cards,
            vec![
                Card::new("Move", "Transfers ownership"),
                Card::new("Borrow", "Temporary access"),
            ]
        );
    }

    #[test]
    fn test_missing_cards_key_is_empty_deck() {
        let deck = parse_deck(r#"{ "name": "no cards here" }"#).unwrap();
        assert!(deck.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let result = parse_deck("{ this is not valid json }");
        assert!(matches!(result, Err(LoadError::Parse(_))));
    }

    #[test]
    fn test_read_deck_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cards.json");
        fs::write(&path, r#"{ "cards": [ { "title": "Trait", "content": "Shared behavior" } ] }"#)
            .unwrap();

        let deck = read_deck(&path).unwrap();
        assert_eq!(deck.len(), 1);
        assert_eq!(deck.cards[0].title, "Trait");
    }

    #[test]
    fn test_read_nonexistent_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_deck(&dir.path().join("nonexistent_file_xyz123.json"));
        assert!(matches!(result, Err(LoadError::Read(_, _))));
    }
}
