use crate::pagination::DEFAULT_PAGE_SIZE;
use crate::source::DeckSource;

/// Start-up settings for the deck window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewConfig {
    pub source: DeckSource,
    pub page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            source: DeckSource::default(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Parses a `--page-size` value. Zero is rejected.
pub fn parse_page_size(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|e| format!("`{s}` is not a page size: {e}"))?;
    if n == 0 {
        return Err("page size must be at least 1".to_string());
    }
    Ok(n)
}
