//! Deck is an ordered set of cards. Insertion order is display order
use super::Card;
use serde::{Deserialize, Serialize};

/// What a call to [`Deck::upsert`] did to the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Upsert {
    /// Content of the card at this index was overwritten.
    Updated(usize),
    /// A new card was appended at this index.
    Created(usize),
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Index of the first card whose title is exactly `title`.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.cards.iter().position(|card| card.title == title)
    }

    /// Overwrites the content of the first card titled `title`, or appends a
    /// new card when no title matches. Titles are never changed.
    pub fn upsert(&mut self, title: &str, content: &str) -> Upsert {
        match self.position_of(title) {
            Some(index) => {
                self.cards[index].content = content.to_string();
                Upsert::Updated(index)
            }
            None => {
                self.cards.push(Card::new(title, content));
                Upsert::Created(self.cards.len() - 1)
            }
        }
    }

    /// Overwrites the content of the card at `index` if it is still titled
    /// `title`. Returns false when the deck no longer has that card there.
    pub fn update_at(&mut self, index: usize, title: &str, content: &str) -> bool {
        match self.cards.get_mut(index) {
            Some(card) if card.title == title => {
                card.content = content.to_string();
                true
            }
            _ => false,
        }
    }
}
