//! View-model for the card deck screen.
//!
//! The UI never mutates state directly: it turns clicks into [`Message`]s and
//! hands them to [`DeckView::update`], then draws whatever the view exposes.
//! Any transition that changes what is shown goes through a single re-render
//! step which clamps the page and clears every flip.

use chrono::{DateTime, Local};
use tracing::{debug, error, info, warn};

use crate::editor::{CardForm, Submission};
use crate::error::{LoadError, ValidationError};
use crate::models::{Card, Deck, Upsert};
use crate::pagination::{self, PageControl, PageState};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Pending,
    Loaded { cards: usize, at: DateTime<Local> },
    Failed,
}

/// Everything the user (or the loader) can do to the view.
#[derive(Debug)]
pub enum Message {
    /// A load has been started; show the spinner.
    LoadStarted,
    /// The loader finished.
    Loaded(Result<Deck, LoadError>),
    PrevPage,
    NextPage,
    GoToPage(usize),
    /// Flip the card in this slot of the visible page.
    ToggleFlip(usize),
    OpenCreate,
    /// Open the form on the card at this deck index.
    OpenEdit(usize),
    SubmitForm,
    CancelForm,
    DismissAlert,
}

/// A card as drawn on the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardView<'a> {
    /// Position in the deck.
    pub index: usize,
    /// Position on the page.
    pub slot: usize,
    pub card: &'a Card,
    pub flipped: bool,
}

#[derive(Debug)]
pub struct DeckView {
    deck: Deck,
    page: PageState,
    flipped: Vec<bool>,
    form: Option<CardForm>,
    alert: Option<ValidationError>,
    status: LoadStatus,
    has_loaded: bool,
}

impl Default for DeckView {
    fn default() -> Self {
        Self::new(pagination::DEFAULT_PAGE_SIZE)
    }
}

impl DeckView {
    /// An empty view waiting for its first load.
    pub fn new(page_size: usize) -> Self {
        Self {
            deck: Deck::default(),
            page: PageState::new(page_size),
            flipped: Vec::new(),
            form: None,
            alert: None,
            status: LoadStatus::Pending,
            has_loaded: false,
        }
    }

    /// A view over an already loaded deck.
    pub fn with_deck(deck: Deck, page_size: usize) -> Self {
        let mut view = Self::new(page_size);
        view.status = LoadStatus::Loaded {
            cards: deck.len(),
            at: Local::now(),
        };
        view.deck = deck;
        view.has_loaded = true;
        view.rerender();
        view
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::LoadStarted => self.status = LoadStatus::Pending,
            Message::Loaded(Ok(deck)) => {
                info!(cards = deck.len(), "deck loaded");
                self.status = LoadStatus::Loaded {
                    cards: deck.len(),
                    at: Local::now(),
                };
                self.deck = deck;
                self.has_loaded = true;
                // An open form refers to cards of the old deck.
                self.form = None;
                self.alert = None;
                self.page.reset();
                self.rerender();
            }
            Message::Loaded(Err(e)) => {
                error!("Error fetching cards data: {}", e);
                self.status = LoadStatus::Failed;
            }
            Message::PrevPage => {
                if self.page.prev() {
                    debug!(page = self.page.current_page(), "previous page");
                    self.rerender();
                }
            }
            Message::NextPage => {
                if self.page.next(self.total_pages()) {
                    debug!(page = self.page.current_page(), "next page");
                    self.rerender();
                }
            }
            Message::GoToPage(page) => {
                self.page.go_to(page);
                debug!(page = self.page.current_page(), "go to page");
                self.rerender();
            }
            Message::ToggleFlip(slot) => {
                if let Some(flipped) = self.flipped.get_mut(slot) {
                    *flipped = !*flipped;
                }
            }
            Message::OpenCreate => {
                self.form = Some(CardForm::create());
                self.alert = None;
            }
            Message::OpenEdit(index) => {
                if let Some(card) = self.deck.get(index) {
                    self.form = Some(CardForm::edit(index, card));
                    self.alert = None;
                }
            }
            Message::SubmitForm => self.submit(),
            Message::CancelForm => {
                self.form = None;
                self.alert = None;
            }
            Message::DismissAlert => self.alert = None,
        }
    }

    fn submit(&mut self) {
        let Some(form) = &self.form else {
            return;
        };

        match form.validate() {
            Ok(Submission::Upsert(card)) => {
                match self.deck.upsert(&card.title, &card.content) {
                    Upsert::Updated(index) => info!(index, title = %card.title, "card updated"),
                    Upsert::Created(index) => info!(index, title = %card.title, "card created"),
                }
                self.close_form_and_rerender();
            }
            Ok(Submission::Update {
                index,
                title,
                content,
            }) => {
                if self.deck.update_at(index, &title, &content) {
                    info!(index, title = %title, "card updated");
                } else {
                    warn!(index, title = %title, "edited card is no longer in the deck");
                }
                self.close_form_and_rerender();
            }
            Err(e) => {
                warn!("rejected card form: {}", e);
                self.alert = Some(e);
            }
        }
    }

    fn close_form_and_rerender(&mut self) {
        self.form = None;
        self.alert = None;
        self.rerender();
    }

    fn rerender(&mut self) {
        self.page.clamp(self.total_pages());
        self.flipped = vec![false; self.visible_range().len()];
    }

    fn visible_range(&self) -> std::ops::Range<usize> {
        pagination::page_range(
            self.deck.len(),
            self.page.current_page(),
            self.page.page_size(),
        )
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn current_page(&self) -> usize {
        self.page.current_page()
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.deck.len(), self.page.page_size())
    }

    /// Pagination controls. None until a deck has loaded successfully.
    pub fn controls(&self) -> Vec<PageControl> {
        if !self.has_loaded {
            return Vec::new();
        }
        pagination::controls(self.total_pages())
    }

    pub fn visible_cards(&self) -> Vec<CardView<'_>> {
        let range = self.visible_range();
        let start = range.start;
        self.deck.cards[range]
            .iter()
            .enumerate()
            .map(|(slot, card)| CardView {
                index: start + slot,
                slot,
                card,
                flipped: self.flipped.get(slot).copied().unwrap_or(false),
            })
            .collect()
    }

    pub fn form(&self) -> Option<&CardForm> {
        self.form.as_ref()
    }

    /// The open form, for binding text fields.
    pub fn form_mut(&mut self) -> Option<&mut CardForm> {
        self.form.as_mut()
    }

    pub fn alert(&self) -> Option<ValidationError> {
        self.alert
    }

    pub fn status(&self) -> &LoadStatus {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck_of(n: usize) -> Deck {
        Deck::new(
            (1..=n)
                .map(|i| Card::new(format!("Card {i}"), format!("Back {i}")))
                .collect(),
        )
    }

    #[test]
    fn test_new_view_is_pending_and_empty() {
        let view = DeckView::default();
        assert_eq!(view.status(), &LoadStatus::Pending);
        assert!(view.visible_cards().is_empty());
        assert_eq!(view.total_pages(), 0);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_loaded_deck_shows_first_page() {
        let mut view = DeckView::new(5);
        view.update(Message::Loaded(Ok(deck_of(12))));

        let cards = view.visible_cards();
        assert_eq!(cards.len(), 5);
        assert_eq!(cards[0].card.title, "Card 1");
        assert!(matches!(view.status(), LoadStatus::Loaded { cards: 12, .. }));
    }

    #[test]
    fn test_load_failure_leaves_deck_empty() {
        let mut view = DeckView::new(5);
        view.update(Message::Loaded(Err(LoadError::Interrupted)));

        assert_eq!(view.status(), &LoadStatus::Failed);
        assert!(view.deck().is_empty());
        assert!(view.controls().is_empty());
    }

    #[test]
    fn test_no_controls_while_first_load_pending() {
        let view = DeckView::new(5);
        assert!(view.controls().is_empty());
    }

    #[test]
    fn test_empty_loaded_deck_shows_prev_and_next() {
        let mut view = DeckView::new(5);
        view.update(Message::Loaded(Ok(Deck::default())));
        assert_eq!(view.controls(), vec![PageControl::Prev, PageControl::Next]);
    }

    #[test]
    fn test_failed_reload_keeps_controls() {
        let mut view = DeckView::with_deck(deck_of(7), 5);
        view.update(Message::LoadStarted);
        view.update(Message::Loaded(Err(LoadError::Interrupted)));

        assert_eq!(view.deck().len(), 7);
        assert_eq!(view.controls().len(), 4);
    }

    #[test]
    fn test_reload_returns_to_first_page() {
        let mut view = DeckView::with_deck(deck_of(12), 5);
        view.update(Message::GoToPage(3));
        view.update(Message::Loaded(Ok(deck_of(20))));

        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_visible_card_indices_follow_page() {
        let mut view = DeckView::with_deck(deck_of(12), 5);
        view.update(Message::GoToPage(3));

        let indices: Vec<_> = view.visible_cards().iter().map(|c| c.index).collect();
        assert_eq!(indices, vec![10, 11]);
    }

    #[test]
    fn test_page_clamped_when_deck_shrinks() {
        let mut view = DeckView::with_deck(deck_of(12), 5);
        view.update(Message::GoToPage(3));
        view.update(Message::Loaded(Ok(deck_of(3))));
        view.update(Message::GoToPage(9));

        assert_eq!(view.current_page(), 1);
        assert_eq!(view.visible_cards().len(), 3);
    }

    #[test]
    fn test_flip_out_of_range_slot_is_ignored() {
        let mut view = DeckView::with_deck(deck_of(2), 5);
        view.update(Message::ToggleFlip(4));
        assert!(view.visible_cards().iter().all(|c| !c.flipped));
    }

    #[test]
    fn test_open_edit_prefills_form() {
        let mut view = DeckView::with_deck(deck_of(3), 5);
        view.update(Message::OpenEdit(1));

        let form = view.form().unwrap();
        assert!(form.title_locked());
        assert_eq!(form.title, "Card 2");
        assert_eq!(form.content, "Back 2");
    }

    #[test]
    fn test_edit_submit_updates_content() {
        let mut view = DeckView::with_deck(deck_of(3), 5);
        view.update(Message::OpenEdit(1));
        view.form_mut().unwrap().content = "Rewritten".to_string();
        view.update(Message::SubmitForm);

        assert!(view.form().is_none());
        assert_eq!(view.deck().len(), 3);
        assert_eq!(view.deck().cards[1].content, "Rewritten");
    }

    #[test]
    fn test_invalid_submit_keeps_form_open() {
        let mut view = DeckView::with_deck(deck_of(1), 5);
        view.update(Message::OpenCreate);
        view.form_mut().unwrap().title = "Only title".to_string();
        view.update(Message::SubmitForm);

        assert_eq!(view.alert(), Some(ValidationError::EmptyContent));
        assert!(view.form().is_some());

        view.update(Message::DismissAlert);
        assert_eq!(view.alert(), None);
        assert!(view.form().is_some());
    }

    #[test]
    fn test_cancel_closes_form_without_changes() {
        let mut view = DeckView::with_deck(deck_of(1), 5);
        view.update(Message::OpenCreate);
        view.form_mut().unwrap().title = "Draft".to_string();
        view.update(Message::CancelForm);

        assert!(view.form().is_none());
        assert_eq!(view.deck().len(), 1);
    }

    #[test]
    fn test_submit_without_form_is_noop() {
        let mut view = DeckView::with_deck(deck_of(1), 5);
        view.update(Message::SubmitForm);
        assert_eq!(view.deck().len(), 1);
        assert_eq!(view.alert(), None);
    }

    #[test]
    fn test_repeated_opens_submit_once() {
        let mut view = DeckView::with_deck(deck_of(1), 5);
        view.update(Message::OpenCreate);
        view.update(Message::OpenCreate);
        view.update(Message::OpenCreate);
        let form = view.form_mut().unwrap();
        form.title = "New".to_string();
        form.content = "Once".to_string();
        view.update(Message::SubmitForm);

        assert_eq!(view.deck().len(), 2);
    }
}
