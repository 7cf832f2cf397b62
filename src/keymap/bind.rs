use std::fmt;

use crate::commands::Command;
use crate::keymap::Key;

/// A rule: this [`Key`] triggers this [`Command`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bind {
    pub key: Key,
    pub command: Command,
    /// Shown in help listings, never used for resolution.
    pub description: String,
}

impl Bind {
    #[must_use]
    pub fn new(key: Key, command: Command, description: impl Into<String>) -> Self {
        Self {
            key,
            command,
            description: description.into(),
        }
    }

    /// Renders as `"<key> = <command>"`, e.g. `"j = MoveDown"`.
    #[must_use]
    pub fn render(&self) -> String {
        format!("{} = {}", self.key.render(), self.command)
    }
}

impl fmt::Display for Bind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
