//! User keymap overrides.
//!
//! Overrides are read from a JSON file and prepended to the built-in map of
//! their group, so a user bind wins over a default bind for the same key.
//! Binding a key to `"Noop"` disables the default.
//!
//! # Configuration File Location
//!
//! - Linux: `~/.config/lazydb/keymap.json`
//! - macOS: `~/Library/Application Support/lazydb/keymap.json`
//! - Windows: `%APPDATA%/lazydb/keymap.json`
//!
//! # Format
//!
//! ```json
//! {
//!   "overrides": {
//!     "table": [
//!       { "key": "<Ctrl-D>", "command": "Delete", "description": "Delete row" },
//!       { "key": "d", "command": "Noop" }
//!     ]
//!   }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::commands::Command;
use crate::error::KeymapError;
use crate::keymap::{Bind, Group, Key, Keymaps};

// ============================================================================
// Constants
// ============================================================================

/// Application name used for the configuration directory.
const APP_NAME: &str = "lazydb";

/// Keymap file name.
const CONFIG_FILE: &str = "keymap.json";

// ============================================================================
// BindConfig
// ============================================================================

/// One user bind as written in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BindConfig {
    /// Key in rendered form: `"j"`, `"<Enter>"`, `"<Ctrl-D>"`.
    pub key: String,
    /// Command name, e.g. `"MoveDown"`.
    pub command: String,
    /// Help text. Defaults to the command name.
    #[serde(default)]
    pub description: Option<String>,
}

impl BindConfig {
    /// Parses the key and command into a [`Bind`].
    ///
    /// # Errors
    ///
    /// Returns an error if the key string or the command name is invalid.
    pub fn to_bind(&self) -> Result<Bind, KeymapError> {
        let key: Key = self.key.parse()?;
        let command: Command = self
            .command
            .parse()
            .map_err(|_| KeymapError::unknown_command(&self.command))?;
        let description = self
            .description
            .clone()
            .unwrap_or_else(|| command.name().to_string());
        Ok(Bind::new(key, command, description))
    }
}

// ============================================================================
// KeymapConfig
// ============================================================================

/// Keymap configuration: per-group lists of user binds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeymapConfig {
    /// User binds per group, in precedence order.
    #[serde(default)]
    pub overrides: BTreeMap<Group, Vec<BindConfig>>,
}

impl KeymapConfig {
    /// Returns the default path of the keymap file.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, KeymapError> {
        let mut path = dirs::config_dir().ok_or(KeymapError::ConfigDir)?;
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        Ok(path)
    }

    /// Loads the keymap file from the default location.
    ///
    /// A missing or broken file yields the empty configuration, so the
    /// built-in keymaps stay usable.
    #[must_use]
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(err) => {
                tracing::warn!("Keymap config unavailable, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Loads the keymap file at `path`, falling back to the empty
    /// configuration on any error.
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        match Self::try_load_from(path) {
            Ok(config) => config,
            Err(err) if err.is_not_found() => {
                tracing::debug!("No keymap config at {}, using defaults", path.display());
                Self::default()
            }
            Err(err) => {
                tracing::warn!("Keymap config load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Reads and parses the keymap file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid
    /// keymap config.
    pub fn try_load_from(path: &Path) -> Result<Self, KeymapError> {
        let content = fs::read_to_string(path).map_err(|err| KeymapError::io(path, err))?;
        let config = Self::from_json(&content)?;
        tracing::debug!(
            path = %path.display(),
            groups = config.overrides.len(),
            "Loaded keymap config"
        );
        Ok(config)
    }

    /// Parses a keymap config from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a keymap config.
    pub fn from_json(content: &str) -> Result<Self, KeymapError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Builds the built-in keymaps with this config's overrides applied.
    ///
    /// # Errors
    ///
    /// Returns the first invalid key or command found.
    pub fn build_keymaps(&self) -> Result<Keymaps, KeymapError> {
        self.overrides
            .iter()
            .try_fold(Keymaps::default(), |keymaps, (group, binds)| {
                let binds = binds
                    .iter()
                    .map(BindConfig::to_bind)
                    .collect::<Result<Vec<_>, _>>()?;
                tracing::debug!(%group, count = binds.len(), "Applying keymap overrides");
                Ok(keymaps.with_overrides(*group, binds))
            })
    }
}

// ============================================================================
// Tests
// ============================================================================
