//! gloss TUI — ratatui application shell.

pub mod app;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use gloss_core::{config::Config, Glossary, Store};
use std::path::{Path, PathBuf};

/// Load the configured glossary and start the TUI.
///
/// `data` overrides the `[data] path` config entry; with neither set, the
/// bundled collection embedded in the binary is used. Search threshold comes
/// from `[search] threshold`.
pub fn run(data: Option<PathBuf>) -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|_| Config::defaults());

    let store = load_store(&config, data.as_deref())?;
    let glossary = Glossary::with_threshold(store, config.search.threshold);

    let theme = theme::Theme::load_default();
    App::new(glossary, config, theme).run()
}

/// Resolve the data source: explicit override, then `[data] path`, then the
/// bundled collection.
fn load_store(config: &Config, data: Option<&Path>) -> anyhow::Result<Store> {
    match data.or(config.data.path.as_deref()) {
        Some(path) => Ok(Store::from_file(path)?),
        None => Ok(Store::builtin()),
    }
}
