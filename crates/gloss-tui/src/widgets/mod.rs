//! TUI widgets. Each widget pairs a plain state struct (owned by the app
//! shell, mutated through `handle()`) with a render-only ratatui [`Widget`]
//! borrowing that state for a single frame.

pub mod category_pane;
pub mod command_bar;
pub mod detail;
pub mod help;
pub mod query_bar;
pub mod results_list;

pub use category_pane::{CategoryPane, CategoryPaneState};
pub use command_bar::{Command, CommandBar, CommandBarState};
pub use detail::{Detail, DetailState};
pub use help::Help;
pub use query_bar::{QueryBar, QueryBarState};
pub use results_list::{ResultsList, ResultsListState};
