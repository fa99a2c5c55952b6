//! Category pane — the fixed filter list in the left pane.
//!
//! The list holds "All" followed by the five categories in canonical order.
//! Moving the cursor applies the filter immediately; there is no separate
//! confirm step, matching how the filter chips on the original site behaved.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use gloss_core::{Category, CATEGORIES};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Cursor over the filter list: row 0 is "All", rows 1..=5 are the categories.
#[derive(Debug, Default)]
pub struct CategoryPaneState {
    pub cursor: usize,
}

impl CategoryPaneState {
    /// The category filter the cursor currently selects; `None` means "All".
    pub fn selected(&self) -> Option<Category> {
        if self.cursor == 0 {
            None
        } else {
            CATEGORIES.get(self.cursor - 1).copied()
        }
    }

    /// Handle a navigation event. Returns `true` when the selection changed
    /// and the result list must be recomputed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        let before = self.cursor;
        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor < CATEGORIES.len() {
                    self.cursor += 1;
                }
            }
            AppEvent::JumpTop => self.cursor = 0,
            AppEvent::JumpBottom => self.cursor = CATEGORIES.len(),
            _ => {}
        }
        if self.cursor != before {
            tracing::debug!(category = ?self.selected().map(|c| c.name()), "category filter");
            true
        } else {
            false
        }
    }

    /// Point the cursor at `category` (or "All" for `None`), e.g. after a
    /// `:category` command.
    pub fn select(&mut self, category: Option<Category>) {
        self.cursor = match category {
            None => 0,
            Some(c) => CATEGORIES.iter().position(|&x| x == c).map_or(0, |i| i + 1),
        };
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct CategoryPane<'a> {
    state: &'a CategoryPaneState,
    /// Entry counts per row: index 0 is the whole collection, 1..=5 per category.
    counts: &'a [usize],
    focused: bool,
    theme: &'a Theme,
}

impl<'a> CategoryPane<'a> {
    pub fn new(
        state: &'a CategoryPaneState,
        counts: &'a [usize],
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, counts, focused, theme }
    }
}

impl Widget for CategoryPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let block = Block::bordered().title("Categories").border_style(border_style);

        let count = |row: usize| self.counts.get(row).copied().unwrap_or(0);

        let mut items: Vec<ListItem> = Vec::with_capacity(CATEGORIES.len() + 1);
        items.push(ListItem::new(Line::from(vec![
            Span::raw("All "),
            Span::styled(format!("({})", count(0)), self.theme.muted),
        ])));
        for (i, cat) in CATEGORIES.iter().enumerate() {
            items.push(ListItem::new(Line::from(vec![
                Span::styled("● ", self.theme.category_style(*cat)),
                Span::raw(cat.name()),
                Span::styled(format!(" ({})", count(i + 1)), self.theme.muted),
            ])));
        }

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        let highlight = if self.focused {
            self.theme.selection
        } else {
            Style::default()
        };
        StatefulWidget::render(
            List::new(items).block(block).highlight_style(highlight),
            area,
            buf,
            &mut list_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
