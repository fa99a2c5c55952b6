//! Results list — the scrollable entry list in the right pane.
//!
//! Each row shows the term, its category dot, and the start of its
//! definition. Rows are collection indices supplied by the query engine, so
//! the widget never re-orders anything; it only windows and highlights.
//!
//! # Scroll semantics
//!
//! `scroll` = index of the first visible row (0 = top). `cursor` = index into
//! `rows` of the highlighted entry. The cursor is always kept within the
//! visible window; moving it past an edge drags the window along.

use std::cell::Cell;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use gloss_core::GlossaryEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ResultsListState {
    /// Collection indices of the visible results, in display order.
    pub rows: Vec<usize>,
    /// Index into `rows` of the highlighted entry.
    pub cursor: usize,
    /// Index into `rows` of the first visible row.
    pub scroll: usize,
    /// Cached from the last render so `handle()` can do cursor-aware scrolling.
    last_height: Cell<usize>,
}

impl ResultsListState {
    /// Replace the result set, keeping the cursor in bounds and snapping the
    /// window back to the top — a changed query invalidates the old position.
    pub fn set_rows(&mut self, rows: Vec<usize>) {
        self.rows = rows;
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Collection index of the highlighted entry, if any.
    pub fn selected(&self) -> Option<usize> {
        self.rows.get(self.cursor).copied()
    }

    fn height(&self) -> usize {
        self.last_height.get().max(1)
    }

    /// Keep the window positioned so the cursor stays visible.
    fn follow_cursor(&mut self) {
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + self.height() {
            self.scroll = self.cursor + 1 - self.height();
        }
    }

    /// Handle a navigation event from the app shell.
    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.rows.len();
        if total == 0 {
            return;
        }

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                if self.cursor + 1 < total {
                    self.cursor += 1;
                }
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(PAGE_STEP);
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + PAGE_STEP).min(total - 1);
            }
            AppEvent::JumpTop => self.cursor = 0,
            AppEvent::JumpBottom => self.cursor = total - 1,
            _ => return,
        }
        self.follow_cursor();
        tracing::debug!(cursor = self.cursor, scroll = self.scroll, "results: nav");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultsList<'a> {
    state: &'a ResultsListState,
    entries: &'a [GlossaryEntry],
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultsList<'a> {
    pub fn new(
        state: &'a ResultsListState,
        entries: &'a [GlossaryEntry],
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, entries, focused, theme }
    }
}

impl Widget for ResultsList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            self.theme.border_focused
        } else {
            self.theme.border_unfocused
        };
        let title = format!(
            "Terms ({} {})",
            self.state.rows.len(),
            if self.state.rows.len() == 1 { "term" } else { "terms" }
        );
        let block = Block::bordered().title(title).border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let height = inner.height as usize;
        // Cache for handle() — safe because draw always runs before handle()
        self.state.last_height.set(height);

        if self.state.rows.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                "No terms found. Try a different search or category.",
                self.theme.muted,
            )));
            empty.render(inner, buf);
            return;
        }

        let total = self.state.rows.len();
        let start = self.state.scroll.min(total.saturating_sub(1));
        let end = (start + height).min(total);

        let lines: Vec<Line<'static>> = self.state.rows[start..end]
            .iter()
            .enumerate()
            .map(|(row, &idx)| {
                let entry = &self.entries[idx];
                let mut line = render_row(entry, self.theme);
                if self.focused && start + row == self.state.cursor {
                    line = line.patch_style(self.theme.selection);
                }
                line
            })
            .collect();

        // Split inner into text (fill) + 1-column scrollbar strip inside the
        // borders, so the track height matches the visible content rows.
        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };

        Paragraph::new(lines).render(text_area, buf);

        let mut sb_state = ScrollbarState::new(total)
            .position(start)
            .viewport_content_length(height);
        StatefulWidget::render(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            sb_area,
            buf,
            &mut sb_state,
        );
    }
}

// ---------------------------------------------------------------------------
// Row rendering
// ---------------------------------------------------------------------------

fn render_row(entry: &GlossaryEntry, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("● ".to_string(), theme.category_style(entry.category)),
        Span::styled(format!("{:<18} ", entry.term), Style::default()),
        Span::styled(entry.definition.clone(), theme.muted),
    ])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
