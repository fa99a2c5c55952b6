//! Configuration types for gloss.
//!
//! [`Config::load`] reads `~/.config/gloss/config.toml`, creating it with
//! hardcoded defaults if it does not yet exist. [`Config::defaults`] returns
//! the same defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[ui]
show_categories        = true
category_pane_width_pct = 24

[search]
# Fuzzy tolerance: 0.0 = exact match only, 1.0 = match almost anything.
threshold = 0.3

[data]
# path = "/absolute/path/to/glossary.json"

[contribute]
repo = "jessperate/AO-glossary"

[keybindings]
toggle_focus = "Tab"
query_focus  = "/"
open_detail  = "Enter"
back         = "Esc"
jump_top     = "g"
jump_bottom  = "G"
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration, loaded from `~/.config/gloss/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub contribute: ContributeConfig,
    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

/// `[ui]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_show_categories")]
    pub show_categories: bool,
    #[serde(default = "default_category_pane_width_pct")]
    pub category_pane_width_pct: u16,
}

fn default_show_categories() -> bool { true }
fn default_category_pane_width_pct() -> u16 { 24 }

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_categories: default_show_categories(),
            category_pane_width_pct: default_category_pane_width_pct(),
        }
    }
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_threshold")]
    pub threshold: f32,
}

fn default_threshold() -> f32 { crate::search::DEFAULT_THRESHOLD }

impl Default for SearchConfig {
    fn default() -> Self {
        Self { threshold: default_threshold() }
    }
}

/// `[data]` section — an optional override for the bundled glossary file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// `[contribute]` section — where suggestion issues are filed.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributeConfig {
    #[serde(default = "default_repo")]
    pub repo: String,
}

fn default_repo() -> String { "jessperate/AO-glossary".to_string() }

impl Default for ContributeConfig {
    fn default() -> Self {
        Self { repo: default_repo() }
    }
}

/// `[keybindings]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeybindingsConfig {
    #[serde(default = "default_toggle_focus")]
    pub toggle_focus: String,
    #[serde(default = "default_query_focus")]
    pub query_focus: String,
    #[serde(default = "default_open_detail")]
    pub open_detail: String,
    #[serde(default = "default_back")]
    pub back: String,
    #[serde(default = "default_jump_top")]
    pub jump_top: String,
    #[serde(default = "default_jump_bottom")]
    pub jump_bottom: String,
}

fn default_toggle_focus() -> String { "Tab".to_string() }
fn default_query_focus() -> String { "/".to_string() }
fn default_open_detail() -> String { "Enter".to_string() }
fn default_back() -> String { "Esc".to_string() }
fn default_jump_top() -> String { "g".to_string() }
fn default_jump_bottom() -> String { "G".to_string() }

impl Default for KeybindingsConfig {
    fn default() -> Self {
        Self {
            toggle_focus: default_toggle_focus(),
            query_focus: default_query_focus(),
            open_detail: default_open_detail(),
            back: default_back(),
            jump_top: default_jump_top(),
            jump_bottom: default_jump_bottom(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/gloss/config.toml`, layered on top of the built-in
    /// defaults. Creates the file with defaults if it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("gloss")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
