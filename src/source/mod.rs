//! Where a deck comes from, and loading it off the UI thread.

pub mod json;

use crate::error::{LoadError, Result};
use crate::models::Deck;
use std::convert::Infallible;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

pub const DEFAULT_SOURCE: &str = "cards.json";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeckSource {
    File(PathBuf),
    Url(String),
}

impl DeckSource {
    pub fn load(&self) -> Result<Deck> {
        match self {
            DeckSource::File(path) => json::read_deck(path),
            DeckSource::Url(url) => json::fetch_deck(url),
        }
    }
}

impl Default for DeckSource {
    fn default() -> Self {
        DeckSource::File(PathBuf::from(DEFAULT_SOURCE))
    }
}

impl FromStr for DeckSource {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(DeckSource::Url(s.to_owned()))
        } else {
            Ok(DeckSource::File(PathBuf::from(s)))
        }
    }
}

impl fmt::Display for DeckSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeckSource::File(path) => write!(f, "{}", path.display()),
            DeckSource::Url(url) => f.write_str(url),
        }
    }
}

/// A load running on a background thread.
pub struct PendingLoad {
    rx: Receiver<Result<Deck>>,
}

impl PendingLoad {
    /// Starts loading `source`. `on_done` runs on the loader thread once the
    /// result has been sent, e.g. to wake the UI.
    pub fn spawn<F>(source: DeckSource, on_done: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let _ = tx.send(source.load());
            on_done();
        });

        Self { rx }
    }

    /// Non-blocking check for the result.
    pub fn poll(&self) -> Option<Result<Deck>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(LoadError::Interrupted)),
        }
    }

    /// Blocks until the loader reports.
    pub fn wait(self) -> Result<Deck> {
        self.rx.recv().unwrap_or(Err(LoadError::Interrupted))
    }
}
