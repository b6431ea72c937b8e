//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! We look for a hekate-ini.toml in the working directory and load settings from it if
//! present. This controls lookup case sensitivity, blank line handling, which file
//! extensions count as INI files, and whether saves are synced to the device.

use crate::document::ParseOptions;
use crate::storage::{Commit, NoCommit, SyncAll};
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File name searched for in the working directory.
pub const CONFIG_FILE: &str = "hekate-ini.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from hekate-ini.toml or falling back to defaults.
pub struct Config {
    #[facet(default = true)]
    /// Whether key and section lookups compare case exactly.
    pub case_sensitive: bool,
    #[facet(default = true)]
    /// Keep empty lines in the document so they survive a rewrite.
    pub keep_blank_lines: bool,
    #[facet(default = vec!["ini".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = true)]
    /// Sync written files to the device before reporting success.
    pub commit: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case_sensitive: true,
            keep_blank_lines: true,
            file_extensions: vec!["ini".to_string()],
            commit: true,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from hekate-ini.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), "ignoring invalid config: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    /// Parser settings derived from this configuration.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            keep_blank_lines: self.keep_blank_lines,
        }
    }

    #[must_use]
    /// The durability step to run after writing a file.
    pub fn committer(&self) -> &'static dyn Commit {
        if self.commit {
            &SyncAll
        } else {
            &NoCommit
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
