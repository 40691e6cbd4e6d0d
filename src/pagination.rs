//! Page-window arithmetic for the products table.

use serde::Serialize;

/// Fixed number of products requested per page.
pub const ITEMS_PER_PAGE: usize = 20;

/// Maximum number of numbered page links shown at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// A numbered link in the pagination control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: usize,
    pub active: bool,
}

/// The previous/next controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageStep {
    pub target: usize,
    pub disabled: bool,
}

/// Everything the pagination template needs.
///
/// An empty `pages` list means the control is not rendered at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub current: usize,
    pub total_pages: usize,
    pub pages: Vec<PageLink>,
    pub previous: PageStep,
    pub next: PageStep,
}

impl PageWindow {
    /// Builds the window for `current` given the server-reported item total.
    pub fn new(current: usize, total_items: usize, per_page: usize) -> Self {
        let total_pages = total_items.div_ceil(per_page.max(1));
        let current = current.max(1);

        let pages = if total_pages <= 1 {
            Vec::new()
        } else {
            let (start, end) = window_bounds(current, total_pages);
            (start..=end)
                .map(|number| PageLink {
                    number,
                    active: number == current,
                })
                .collect()
        };

        Self {
            current,
            total_pages,
            pages,
            previous: PageStep {
                target: current.saturating_sub(1).max(1),
                disabled: current == 1,
            },
            next: PageStep {
                target: current + 1,
                disabled: current >= total_pages,
            },
        }
    }

    /// Whether the control should be rendered.
    pub fn is_visible(&self) -> bool {
        !self.pages.is_empty()
    }
}

fn window_bounds(current: usize, total_pages: usize) -> (usize, usize) {
    let start = current.saturating_sub(MAX_VISIBLE_PAGES / 2).max(1);
    let end = (start + MAX_VISIBLE_PAGES - 1).min(total_pages);
    // `current` may lie past the last page; the window then ends on it.
    if end < start + MAX_VISIBLE_PAGES - 1 {
        return (end.saturating_sub(MAX_VISIBLE_PAGES - 1).max(1), end);
    }
    (start, end)
}
