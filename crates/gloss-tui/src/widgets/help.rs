//! Help popup — a centred overlay listing the keybindings.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("/", "search"),
    ("Tab", "switch pane"),
    ("j/k, ↑/↓", "move"),
    ("g / G", "jump to top / bottom"),
    ("Ctrl+u / Ctrl+d", "page up / down"),
    ("Enter", "open the selected term"),
    (":", "command (:help, :theme, :category, :clear, :q)"),
    ("Esc", "close / back"),
    ("q, Ctrl+c", "quit"),
];

pub struct Help<'a> {
    theme: &'a Theme,
}

impl<'a> Help<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for Help<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 58.min(area.width);
        let height = (BINDINGS.len() as u16 + 2).min(area.height);
        let [popup] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(popup);

        Clear.render(popup, buf);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, action)| {
                Line::from(vec![
                    Span::styled(format!("  {keys:<16}"), self.theme.title),
                    Span::raw(*action),
                ])
            })
            .collect();

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title("Help")
                    .border_style(self.theme.border_focused),
            )
            .render(popup, buf);
    }
}
