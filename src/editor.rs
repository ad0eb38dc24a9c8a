//! The create/edit card form.

use crate::error::ValidationError;
use crate::models::Card;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    /// Editing the card at `index`. `title` is its stored title, untrimmed,
    /// and the title field is locked.
    Edit { index: usize, title: String },
}

/// A validated form, ready to apply to the deck.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Overwrite the first card with this title, or append it.
    Upsert(Card),
    /// Overwrite the content of the card at `index`, provided it still has `title`.
    Update {
        index: usize,
        title: String,
        content: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardForm {
    pub mode: FormMode,
    pub title: String,
    pub content: String,
}

impl CardForm {
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            title: String::new(),
            content: String::new(),
        }
    }

    pub fn edit(index: usize, card: &Card) -> Self {
        Self {
            mode: FormMode::Edit {
                index,
                title: card.title.clone(),
            },
            title: card.title.clone(),
            content: card.content.clone(),
        }
    }

    pub fn title_locked(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "New Card",
            FormMode::Edit { .. } => "Edit Card",
        }
    }

    /// Trims the editable fields and rejects empty ones. A locked title is
    /// passed through exactly as stored.
    pub fn validate(&self) -> Result<Submission, ValidationError> {
        let content = self.content.trim();

        match &self.mode {
            FormMode::Create => {
                let title = self.title.trim();
                if title.is_empty() {
                    return Err(ValidationError::EmptyTitle);
                }
                if content.is_empty() {
                    return Err(ValidationError::EmptyContent);
                }
                Ok(Submission::Upsert(Card::new(title, content)))
            }
            FormMode::Edit { index, title } => {
                if content.is_empty() {
                    return Err(ValidationError::EmptyContent);
                }
                Ok(Submission::Update {
                    index: *index,
                    title: title.clone(),
                    content: content.to_string(),
                })
            }
        }
    }
}
