//! Layered configuration from XDG config files.
//!
//! Files are read in order and merged key by key, later files winning:
//!
//! 1. `$XDG_CONFIG_DIRS/recipe-creator/config.toml` (default `/etc/xdg`)
//! 2. `$XDG_CONFIG_HOME/recipe-creator/config.toml`
//! 3. an explicit `--config` file
//!
//! ```toml
//! color = "never"        # auto | always | never
//! verbose = false
//! sort_recipes = true    # list recipes alphabetically when selecting
//! ```

use crate::output::ColorChoice;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "recipe-creator";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ConfigToml {
    color: Option<String>,
    verbose: Option<bool>,
    sort_recipes: Option<bool>,
}

impl ConfigToml {
    fn merge(&mut self, other: ConfigToml) {
        if other.color.is_some() {
            self.color = other.color;
        }
        if other.verbose.is_some() {
            self.verbose = other.verbose;
        }
        if other.sort_recipes.is_some() {
            self.sort_recipes = other.sort_recipes;
        }
    }
}

/// Resolved settings for a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub color: ColorChoice,
    pub verbose: bool,
    pub sort_recipes: bool,
    /// Files that were actually read, in merge order
    pub sources: Vec<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            verbose: false,
            sort_recipes: true,
            sources: Vec::new(),
        }
    }
}

impl Config {
    /// Load the XDG config files, then `explicit` if given.
    ///
    /// Missing XDG files are skipped; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let mut paths = find_config_files();
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            paths.push(path.to_path_buf());
        }
        Self::from_files(&paths)
    }

    /// Merge the given files in order, skipping ones that don't exist
    pub fn from_files(paths: &[PathBuf]) -> Result<Self> {
        let mut merged = ConfigToml::default();
        let mut sources = Vec::new();

        for path in paths {
            if !path.exists() {
                continue;
            }
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            let parsed: ConfigToml = toml::from_str(&text)
                .with_context(|| format!("Config {} is not valid", path.display()))?;
            merged.merge(parsed);
            sources.push(path.clone());
        }

        let color = match merged.color.as_deref() {
            None => ColorChoice::default(),
            Some(raw) => ColorChoice::parse(raw).with_context(|| {
                format!(
                    "Invalid color '{}' in config (expected auto, always or never); read from: {}",
                    raw,
                    display_paths(&sources)
                )
            })?,
        };

        Ok(Self {
            color,
            verbose: merged.verbose.unwrap_or(false),
            sort_recipes: merged.sort_recipes.unwrap_or(true),
            sources,
        })
    }
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Candidate config files, lowest precedence first
pub fn find_config_files() -> Vec<PathBuf> {
    config_candidates(
        std::env::var("XDG_CONFIG_DIRS").ok().as_deref(),
        std::env::var("XDG_CONFIG_HOME").ok().as_deref(),
    )
}

/// `config_dirs` lists system directories most important first, so they are
/// reversed; the user's config home always comes last.
fn config_candidates(config_dirs: Option<&str>, config_home: Option<&str>) -> Vec<PathBuf> {
    let in_dir = |dir: PathBuf| dir.join(CONFIG_DIR).join(CONFIG_FILE);

    let mut paths: Vec<PathBuf> = config_dirs
        .unwrap_or("/etc/xdg")
        .rsplit(':')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(|d| in_dir(PathBuf::from(d)))
        .collect();

    let home = match config_home.map(str::trim) {
        Some(h) if !h.is_empty() => PathBuf::from(h),
        _ => dirs::config_dir().unwrap_or_else(|| PathBuf::from(".config")),
    };
    paths.push(in_dir(home));
    paths
}
