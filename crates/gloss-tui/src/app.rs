//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        category_pane::{CategoryPane, CategoryPaneState},
        command_bar::{Command, CommandBar, CommandBarState},
        detail::{Detail, DetailState},
        help::Help,
        query_bar::{QueryBar, QueryBarState},
        results_list::{ResultsList, ResultsListState},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use gloss_core::{config::Config, Glossary, QueryState, CATEGORIES};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDir, Layout},
    Frame, Terminal,
};
use std::{
    io,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Categories,
    Results,
    QueryBar,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub glossary: Glossary,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,

    pub categories: CategoryPaneState,
    pub results: ResultsListState,
    pub query: QueryBarState,
    pub command_bar: CommandBarState,
    /// Open detail view, if any. Overlays the whole screen.
    pub detail: Option<DetailState>,
    pub show_help: bool,
    pub quit: bool,

    /// Per-row entry counts for the category pane: index 0 is the whole
    /// collection, 1..=5 one per category.
    counts: Vec<usize>,
    /// Seed for the shuffled "explore more" strip, fixed per session so the
    /// strip is stable while a detail view stays open.
    session_seed: u64,
}

impl AppState {
    /// Recompute the visible result rows from the current query text and
    /// category selection. Call after every input that changes either.
    fn refresh_results(&mut self) {
        let state = QueryState {
            query: self.query.query.clone(),
            category: self.categories.selected(),
        };
        self.results.set_rows(self.glossary.result_indices(&state));
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(glossary: Glossary, config: Config, theme: Theme) -> Self {
        let entries = glossary.store().entries();
        let mut counts = vec![entries.len()];
        for cat in CATEGORIES {
            counts.push(entries.iter().filter(|e| e.category == cat).count());
        }

        let session_seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        let mut state = AppState {
            glossary,
            focus: Focus::Results,
            prev_focus: Focus::Results,
            theme,
            config,
            categories: CategoryPaneState::default(),
            results: ResultsListState::default(),
            query: QueryBarState::default(),
            command_bar: CommandBarState::default(),
            detail: None,
            show_help: false,
            quit: false,
            counts,
            session_seed,
        };
        state.refresh_results();

        App { state }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.clone();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input — just close
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                other => s.command_bar.handle(&other),
            }
            return;
        }

        // Detail view intercepts everything except the overlay toggles.
        if let Some(detail) = s.detail.as_mut() {
            match event {
                AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("detail view closed");
                    s.detail = None;
                }
                AppEvent::Char('?') => s.show_help = true,
                AppEvent::Char(':') => {
                    s.prev_focus = s.focus;
                    s.command_bar.clear();
                    s.focus = Focus::Command;
                }
                other => detail.handle(&other),
            }
            return;
        }

        match event {
            // Toggle help (only when not typing in the query bar)
            AppEvent::Char('?') if s.focus != Focus::QueryBar => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            // Enter command mode with `:` (not from the query bar)
            AppEvent::Char(':') if s.focus != Focus::QueryBar => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Return focus from query bar
            AppEvent::Escape => {
                if s.focus == Focus::QueryBar {
                    tracing::debug!("focus: QueryBar -> Results");
                    s.focus = Focus::Results;
                }
            }

            // Tab-cycle focus: Categories → Results → QueryBar → Categories
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Categories => Focus::Results,
                    Focus::Results => Focus::QueryBar,
                    Focus::QueryBar | Focus::Command => Focus::Categories,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            // Jump to query bar
            AppEvent::QueryFocus => {
                tracing::debug!("focus -> QueryBar");
                s.focus = Focus::QueryBar;
            }

            // Open the selected entry
            AppEvent::Enter => {
                if s.focus == Focus::QueryBar {
                    // Confirm the search: move to the results to pick one
                    s.focus = Focus::Results;
                } else if let Some(index) = s.results.selected() {
                    tracing::debug!(index, "detail view opened");
                    s.detail = Some(DetailState::open(index));
                }
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::QueryBar | Focus::Command)
}

/// Execute a parsed [`Command`] against the application state.
fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => {
            if s.detail.take().is_none() {
                s.quit = true;
            }
        }
        Command::Help => {
            s.show_help = !s.show_help;
        }
        Command::Theme(name) => {
            s.theme = match name.to_ascii_lowercase().as_str() {
                "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Theme::load_gruvbox_dark(),
                _ => Theme::load_default(),
            };
        }
        Command::Category(category) => {
            s.categories.select(category);
            s.refresh_results();
        }
        Command::Clear => {
            s.query.clear();
            s.categories.select(None);
            s.refresh_results();
        }
    }
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState, event: AppEvent) {
    match s.focus {
        Focus::Categories => {
            if s.categories.handle(&event) {
                s.refresh_results();
            }
        }
        Focus::Results => s.results.handle(&event),
        Focus::QueryBar => {
            if s.query.handle(&event) {
                s.refresh_results();
            }
        }
        Focus::Command => {} // handled before dispatch, should not reach here
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Vertical: body | 3-line query bar
    let vert = Layout::default()
        .direction(LayoutDir::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(3)])
        .split(area);

    // Horizontal body split
    let pct = state.config.ui.category_pane_width_pct;
    let horiz = Layout::default()
        .direction(LayoutDir::Horizontal)
        .constraints([Constraint::Percentage(pct), Constraint::Fill(1)])
        .split(vert[0]);

    frame.render_widget(
        CategoryPane::new(
            &state.categories,
            &state.counts,
            state.focus == Focus::Categories,
            &state.theme,
        ),
        horiz[0],
    );
    frame.render_widget(
        ResultsList::new(
            &state.results,
            state.glossary.store().entries(),
            state.focus == Focus::Results,
            &state.theme,
        ),
        horiz[1],
    );

    let query_bar = QueryBar::new(
        &state.query,
        state.results.rows.len(),
        state.focus == Focus::QueryBar,
        &state.theme,
    );
    let cursor = query_bar.cursor_position(vert[1]);
    frame.render_widget(query_bar, vert[1]);
    if state.focus == Focus::QueryBar && state.detail.is_none() {
        frame.set_cursor_position(cursor);
    }

    if let Some(detail) = &state.detail {
        let entries = state.glossary.store().entries();
        if let Some(entry) = entries.get(detail.index) {
            let related = state.glossary.related(&entry.id);
            let suggestions = state
                .glossary
                .suggestions_shuffled(&entry.id, state.session_seed);
            frame.render_widget(
                Detail::new(entry, &related, &suggestions, detail, &state.theme),
                area,
            );
        }
    }

    if state.show_help {
        frame.render_widget(Help::new(&state.theme), area);
    }

    if state.focus == Focus::Command {
        // 1-row overlay on the bottom line
        let bottom = ratatui::layout::Rect {
            x: area.x,
            y: area.bottom().saturating_sub(1),
            width: area.width,
            height: 1,
        };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), bottom);
        frame.set_cursor_position((state.command_bar.cursor_col(bottom), bottom.y));
    }
}

/// Restore the terminal before printing a panic, so the message is readable
/// instead of being swallowed by the alternate screen.
fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
