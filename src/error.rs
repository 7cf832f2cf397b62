//! Error types for keymap configuration.
//!
//! Resolution and rendering never fail; these errors only come out of
//! parsing key strings and loading user overrides.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while parsing keys or loading a keymap config.
#[derive(Debug, Error)]
pub enum KeymapError {
    /// The key string is neither a single character nor a `<Name>` form.
    #[error("Invalid key syntax: '{key}'. Expected a single character or a name like '<Enter>', '<Ctrl-C>', '<F5>'")]
    InvalidKey {
        /// The rejected key string.
        key: String,
    },

    /// The key used the `<Name>` form with a name no key is registered under.
    #[error("Unknown key name: '{name}'")]
    UnknownKeyName {
        /// The unrecognized name, without angle brackets.
        name: String,
    },

    /// The command name does not match any [`Command`](crate::commands::Command).
    #[error("Unknown command: '{name}'")]
    UnknownCommand {
        /// The unrecognized command name.
        name: String,
    },

    /// The platform config directory could not be determined.
    #[error(
        "Could not determine config directory. Expected XDG_CONFIG_HOME or ~/.config on Linux, ~/Library/Application Support on macOS, %APPDATA% on Windows"
    )]
    ConfigDir,

    /// Reading the config file failed.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid JSON for a keymap config.
    #[error("Invalid keymap config: {0}")]
    Json(#[from] serde_json::Error),
}

impl KeymapError {
    /// Create an invalid key error.
    #[must_use]
    pub fn invalid_key(key: impl Into<String>) -> Self {
        Self::InvalidKey { key: key.into() }
    }

    /// Create an unknown key name error.
    #[must_use]
    pub fn unknown_key_name(name: impl Into<String>) -> Self {
        Self::UnknownKeyName { name: name.into() }
    }

    /// Create an unknown command error.
    #[must_use]
    pub fn unknown_command(name: impl Into<String>) -> Self {
        Self::UnknownCommand { name: name.into() }
    }

    /// Create an I/O error for the given path.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if the error means the config file simply does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_key_message() {
        let err = KeymapError::invalid_key("ab");
        assert!(err.to_string().starts_with("Invalid key syntax: 'ab'"));
    }

    #[test]
    fn test_unknown_command_message() {
        let err = KeymapError::unknown_command("Teleport");
        assert_eq!(err.to_string(), "Unknown command: 'Teleport'");
    }

    #[test]
    fn test_is_not_found() {
        let missing = KeymapError::io(
            "/nope/keymap.json",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(missing.is_not_found());

        let denied = KeymapError::io(
            "/nope/keymap.json",
            std::io::Error::from(std::io::ErrorKind::PermissionDenied),
        );
        assert!(!denied.is_not_found());
        assert!(!KeymapError::ConfigDir.is_not_found());
    }
}
