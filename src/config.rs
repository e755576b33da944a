// ABOUTME: Configuration module for the mdslides application
// ABOUTME: Holds destination, editor and split settings, with environment variable handling

use crate::splitter::SplitOptions;
use crate::watch::WatchConfig;
use std::env;
use std::path::{Path, PathBuf};

pub const DEFAULT_DEST_DIR: &str = "dest";
pub const DEFAULT_EDITOR: &str = "vim";
pub const DEFAULT_DEBOUNCE_MS: u64 = 200;

/// Runtime configuration, resolved once at the CLI layer and passed down explicitly
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory the slides are written to
    pub dest: PathBuf,
    /// Editor command shown after each run
    pub editor: String,
    pub split: SplitOptions,
    pub debounce_ms: u64,
}

impl Config {
    /// Defaults relative to `cwd`, without looking at the environment
    pub fn new(cwd: &Path) -> Self {
        Self {
            dest: cwd.join(DEFAULT_DEST_DIR),
            editor: DEFAULT_EDITOR.to_string(),
            split: SplitOptions::default(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env(cwd: &Path) -> Self {
        let editor = env::var("EDITOR")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_EDITOR.to_string());
        let debounce_ms = env::var("MDSLIDES_DEBOUNCE_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_DEBOUNCE_MS);

        Self {
            editor,
            debounce_ms,
            ..Self::new(cwd)
        }
    }

    /// Get a watch configuration for `source` using these settings
    pub fn watch_config(&self, source: PathBuf) -> WatchConfig {
        WatchConfig {
            source,
            dest: self.dest.clone(),
            editor: self.editor.clone(),
            split: self.split,
            debounce_ms: self.debounce_ms,
        }
    }
}
