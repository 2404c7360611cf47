//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/bintree/bintree.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `BINTREE_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::token::{TokenGrammar, DEFAULT_NULL_TOKEN, DEFAULT_QUIT_TOKEN};

/// How the tree is rendered by the display command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayStyle {
    /// One line per level, `null` for missing children
    #[default]
    Levels,
    /// Indented outline
    Tree,
}

impl fmt::Display for DisplayStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayStyle::Levels => write!(f, "levels"),
            DisplayStyle::Tree => write!(f, "tree"),
        }
    }
}

/// Unified configuration for bintree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Word meaning "no child here" (default: null)
    pub null_token: String,
    /// Word meaning "stop building" (default: q)
    pub quit_token: String,
    /// Rendering used by the display command
    pub display: DisplayStyle,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            null_token: DEFAULT_NULL_TOKEN.into(),
            quit_token: DEFAULT_QUIT_TOKEN.into(),
            display: DisplayStyle::default(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub null_token: Option<String>,
    pub quit_token: Option<String>,
    pub display: Option<DisplayStyle>,
}

/// Get the XDG config directory for bintree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "bintree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("bintree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            null_token: overlay
                .null_token
                .clone()
                .unwrap_or_else(|| self.null_token.clone()),
            quit_token: overlay
                .quit_token
                .clone()
                .unwrap_or_else(|| self.quit_token.clone()),
            display: overlay.display.unwrap_or(self.display),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file; unlike the global file it must exist
    pub fn load(explicit: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("loading global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("loading config {}", path.display());
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.validate()?;
        Ok(current)
    }

    /// Apply BINTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("BINTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("null_token") {
            settings.null_token = val;
        }
        if let Ok(val) = config.get_string("quit_token") {
            settings.quit_token = val;
        }
        if let Ok(val) = config.get_string("display") {
            settings.display =
                DisplayStyle::from_str(&val, true).map_err(|e| ApplicationError::Config {
                    message: format!("BINTREE_DISPLAY: {}", e),
                })?;
        }

        Ok(settings)
    }

    /// Sentinels must be non-empty, distinct and not look like numbers.
    pub fn validate(&self) -> ApplicationResult<()> {
        let null_token = self.null_token.trim().to_lowercase();
        let quit_token = self.quit_token.trim().to_lowercase();

        for (name, token) in [("null_token", &null_token), ("quit_token", &quit_token)] {
            if token.is_empty() {
                return Err(ApplicationError::Config {
                    message: format!("{name} must not be empty"),
                });
            }
            if token.parse::<i64>().is_ok() {
                return Err(ApplicationError::Config {
                    message: format!("{name} must not be a number: {token}"),
                });
            }
        }
        if null_token == quit_token {
            return Err(ApplicationError::Config {
                message: format!("null_token and quit_token are both '{null_token}'"),
            });
        }
        Ok(())
    }

    pub fn grammar(&self) -> TokenGrammar {
        TokenGrammar::new(&self.null_token, &self.quit_token)
    }

    /// Effective settings as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
