//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.kanban/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! default is generated so users can discover all options.

use clap::ValueEnum;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::layout::DEFAULT_CHROME_HEIGHT;
use crate::core::task::{Column, Seed, Task, default_seed, group_by_column};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct KanbanConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default)]
    pub tasks: Vec<TaskEntry>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub chrome_height: Option<u16>,
    pub start_column: Option<Column>,
    pub show_help: Option<bool>,
    pub show_description: Option<bool>,
    pub reseed_on_resize: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub accent: Option<String>,
    pub muted: Option<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TaskEntry {
    pub status: Column,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub chrome_height: u16,
    pub start_column: Column,
    pub show_help: bool,
    pub show_description: bool,
    pub reseed_on_resize: bool,
    pub theme: ThemeConfig,
    pub seed: Seed,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            chrome_height: DEFAULT_CHROME_HEIGHT,
            start_column: Column::default(),
            show_help: false,
            show_description: true,
            reseed_on_resize: false,
            theme: ThemeConfig::default(),
            seed: default_seed(),
        }
    }
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub start_column: Option<Column>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.kanban/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".kanban").join("config.toml"))
}

/// Load config from `~/.kanban/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `KanbanConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<KanbanConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(KanbanConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(KanbanConfig::default());
    }

    load_config_from(&path)
}

/// Load config from an explicit path. A missing file is an error here.
pub fn load_config_from(path: &Path) -> Result<KanbanConfig, ConfigError> {
    let contents = fs::read_to_string(path)?;
    let config: KanbanConfig = toml::from_str(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG: &str = r##"# Kanban Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# chrome_height = 20                 # rows kept free below the columns
# start_column = "todo"              # "todo", "in-progress" or "done"
# show_help = false                  # key help under each column
# show_description = true            # second line under each task title
# reseed_on_resize = false           # reload tasks on every terminal resize

# [theme]
# accent = "62"                      # focused border; name, 0-255 or "#rrggbb"
# muted = "darkgray"
# selected = "170"

# [[tasks]]
# status = "todo"
# title = "one title"
# description = "one description"

# [[tasks]]
# status = "in-progress"
# title = "four title"
# description = "four description"
"##;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Layer `KANBAN_*` environment variables over the file config.
///
/// Runs between loading the file and `resolve`, so the CLI still wins.
pub fn apply_env(config: &mut KanbanConfig) {
    apply_env_from(config, |key| std::env::var(key).ok());
}

fn apply_env_from(config: &mut KanbanConfig, var: impl Fn(&str) -> Option<String>) {
    if let Some(value) = var("KANBAN_START_COLUMN") {
        match Column::from_str(value.trim(), true) {
            Ok(column) => config.general.start_column = Some(column),
            Err(_) => warn!("Ignoring KANBAN_START_COLUMN={value:?}: not a column"),
        }
    }
    if let Some(value) = var("KANBAN_CHROME_HEIGHT") {
        match value.trim().parse() {
            Ok(height) => config.general.chrome_height = Some(height),
            Err(_) => warn!("Ignoring KANBAN_CHROME_HEIGHT={value:?}: not a row count"),
        }
    }
}

/// Resolve the final config by collapsing: defaults → config file → CLI.
///
/// Environment overrides are already folded into `config` by `apply_env`.
pub fn resolve(config: &KanbanConfig, cli: &CliOverrides) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let start_column = cli
        .start_column
        .or(config.general.start_column)
        .unwrap_or(defaults.start_column);

    let chrome_height = config
        .general
        .chrome_height
        .unwrap_or(defaults.chrome_height);

    let seed = if config.tasks.is_empty() {
        defaults.seed
    } else {
        group_by_column(
            config
                .tasks
                .iter()
                .map(|t| Task::new(t.status, t.title.clone(), t.description.clone())),
        )
    };

    ResolvedConfig {
        chrome_height,
        start_column,
        show_help: config.general.show_help.unwrap_or(defaults.show_help),
        show_description: config
            .general
            .show_description
            .unwrap_or(defaults.show_description),
        reseed_on_resize: config
            .general
            .reseed_on_resize
            .unwrap_or(defaults.reseed_on_resize),
        theme: config.theme.clone(),
        seed,
    }
}
