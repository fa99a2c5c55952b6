//! Detail view — a full-screen overlay showing one glossary entry.
//!
//! Mirrors the term page of the original glossary: definition first, then the
//! optional metaphor and example, the long-form article sections when present,
//! related terms, and an "Explore more" strip of suggested entries.
//!
//! The view is a plain scrollable document. The app shell resolves related
//! and suggested entries through the query engine before rendering, so this
//! widget only formats what it is handed.

use crate::event::AppEvent;
use crate::theme::Theme;
use gloss_core::GlossaryEntry;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget, Wrap},
};

const SCROLL_PAGE: u16 = 10;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Scroll position for the open detail view.
#[derive(Debug, Default)]
pub struct DetailState {
    /// Collection index of the entry being shown.
    pub index: usize,
    /// Vertical scroll offset in lines.
    pub scroll: u16,
}

impl DetailState {
    pub fn open(index: usize) -> Self {
        Self { index, scroll: 0 }
    }

    /// Handle a scroll event while the detail view is open. The upper bound
    /// is soft; `Paragraph::scroll` simply shows blank space past the end.
    pub fn handle(&mut self, event: &AppEvent) {
        use crate::event::Direction;
        match event {
            AppEvent::Nav(Direction::Up) => self.scroll = self.scroll.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.scroll = self.scroll.saturating_add(1),
            AppEvent::ScrollUp => self.scroll = self.scroll.saturating_sub(SCROLL_PAGE),
            AppEvent::ScrollDown => self.scroll = self.scroll.saturating_add(SCROLL_PAGE),
            AppEvent::JumpTop => self.scroll = 0,
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct Detail<'a> {
    entry: &'a GlossaryEntry,
    /// Resolved related entries, in collection order.
    related: &'a [&'a GlossaryEntry],
    /// Suggested entries for the "Explore more" strip.
    suggestions: &'a [&'a GlossaryEntry],
    state: &'a DetailState,
    theme: &'a Theme,
}

impl<'a> Detail<'a> {
    pub fn new(
        entry: &'a GlossaryEntry,
        related: &'a [&'a GlossaryEntry],
        suggestions: &'a [&'a GlossaryEntry],
        state: &'a DetailState,
        theme: &'a Theme,
    ) -> Self {
        Self { entry, related, suggestions, state, theme }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let t = self.theme;
        let e = self.entry;
        let mut lines: Vec<Line<'static>> = Vec::new();

        // Header: term + category badge
        lines.push(Line::from(vec![
            Span::styled(e.term.clone(), t.title),
            Span::raw("  "),
            Span::styled("● ".to_string(), t.category_style(e.category)),
            Span::styled(e.category.name().to_string(), t.muted),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(e.definition.clone()));

        if let Some(ref metaphor) = e.metaphor {
            lines.push(Line::default());
            section(&mut lines, "Think of it like", t);
            lines.push(Line::from(Span::styled(
                metaphor.clone(),
                Style::default().add_modifier(ratatui::style::Modifier::ITALIC),
            )));
        }

        if let Some(ref example) = e.example {
            lines.push(Line::default());
            section(&mut lines, "Example", t);
            lines.push(Line::from(example.clone()));
        }

        if let Some(ref article) = e.article {
            if !article.use_cases.is_empty() {
                lines.push(Line::default());
                section(&mut lines, "Use cases", t);
                for case in &article.use_cases {
                    bullet(&mut lines, case.clone(), t);
                }
            }
            if !article.key_concepts.is_empty() {
                lines.push(Line::default());
                section(&mut lines, "Key concepts", t);
                for kc in &article.key_concepts {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {}: ", kc.title), t.title),
                        Span::raw(kc.description.clone()),
                    ]));
                }
            }
            if !article.benefits.is_empty() {
                lines.push(Line::default());
                section(&mut lines, "Benefits", t);
                for benefit in &article.benefits {
                    bullet(&mut lines, benefit.clone(), t);
                }
            }
            if let Some(ref cmp) = article.comparison {
                lines.push(Line::default());
                section(&mut lines, &format!("{} vs {}", e.term, cmp.term), t);
                lines.push(Line::from(cmp.description.clone()));
            }
            if !article.tools.is_empty() {
                lines.push(Line::default());
                section(&mut lines, "Tools", t);
                for tool in &article.tools {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {}: ", tool.name), t.title),
                        Span::raw(tool.description.clone()),
                    ]));
                }
            }
            if !article.challenges.is_empty() {
                lines.push(Line::default());
                section(&mut lines, "Challenges", t);
                for ch in &article.challenges {
                    lines.push(Line::from(vec![
                        Span::raw("  ! ".to_string()),
                        Span::raw(ch.challenge.clone()),
                    ]));
                    lines.push(Line::from(Span::styled(
                        format!("    → {}", ch.solution),
                        t.muted,
                    )));
                }
            }
            if !article.faq.is_empty() {
                lines.push(Line::default());
                section(&mut lines, "FAQ", t);
                for faq in &article.faq {
                    lines.push(Line::from(Span::styled(
                        format!("  Q: {}", faq.question),
                        t.title,
                    )));
                    lines.push(Line::from(format!("  A: {}", faq.answer)));
                }
            }
        }

        if !self.related.is_empty() {
            lines.push(Line::default());
            section(&mut lines, "Related terms", t);
            for rel in self.related {
                lines.push(Line::from(vec![
                    Span::styled("  ● ".to_string(), t.category_style(rel.category)),
                    Span::raw(rel.term.clone()),
                    Span::styled(format!("  {}", rel.definition), t.muted),
                ]));
            }
        }

        if !self.suggestions.is_empty() {
            lines.push(Line::default());
            section(&mut lines, "Explore more", t);
            let strip = self
                .suggestions
                .iter()
                .map(|s| s.term.clone())
                .collect::<Vec<_>>()
                .join("  ·  ");
            lines.push(Line::from(Span::styled(format!("  {strip}"), t.muted)));
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Esc to go back · j/k to scroll",
            t.muted,
        )));

        lines
    }
}

fn section(lines: &mut Vec<Line<'static>>, title: &str, theme: &Theme) {
    lines.push(Line::from(Span::styled(title.to_string(), theme.title)));
}

fn bullet(lines: &mut Vec<Line<'static>>, text: String, _theme: &Theme) {
    lines.push(Line::from(format!("  • {text}")));
}

impl Widget for Detail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = Block::bordered()
            .title(self.entry.term.clone())
            .border_style(self.theme.border_focused);
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.state.scroll, 0))
            .render(area, buf);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
