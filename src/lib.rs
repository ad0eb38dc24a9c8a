pub mod config;
pub mod editor;
pub mod error;
pub mod models;
pub mod pagination;
pub mod source;
pub mod view;

pub use models::{Card, Deck};
pub use view::{DeckView, Message};
