//! Page arithmetic for the card list.
//!
//! Pages are 1-based. Everything derived from the deck length is a pure
//! function so the view can recompute it on every frame.

use std::ops::Range;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// A pagination control, in the order it is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageControl {
    Prev,
    Page(usize),
    Next,
}

impl PageControl {
    pub fn label(&self) -> String {
        match self {
            PageControl::Prev => "Prev".to_string(),
            PageControl::Page(n) => n.to_string(),
            PageControl::Next => "Next".to_string(),
        }
    }
}

/// Number of pages needed for `len` cards.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1))
}

/// Indices of the cards on `page`. Pages past the end yield an empty range.
pub fn page_range(len: usize, page: usize, page_size: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

/// `Prev`, one numbered control per page, then `Next`.
pub fn controls(total_pages: usize) -> Vec<PageControl> {
    let mut controls = Vec::with_capacity(total_pages + 2);
    controls.push(PageControl::Prev);
    controls.extend((1..=total_pages).map(PageControl::Page));
    controls.push(PageControl::Next);
    controls
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageState {
    current_page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns false when already on the first page.
    pub fn prev(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Returns false when already on the last page.
    pub fn next(&mut self, total_pages: usize) -> bool {
        if self.current_page < total_pages {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    pub fn go_to(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Keeps the current page within `[1, max(1, total_pages)]`.
    pub fn clamp(&mut self, total_pages: usize) {
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
    }

    pub fn reset(&mut self) {
        self.current_page = 1;
    }
}
