//! Keymap layer of the lazydb terminal client.
//!
//! Maps raw terminal key events to abstract [`Command`](commands::Command)s
//! through ordered, first-match-wins keymaps.

pub mod commands;
pub mod config;
pub mod error;
pub mod keymap;
pub mod logging;

#[cfg(test)]
pub mod test_utils;

pub use commands::Command;
pub use error::KeymapError;
pub use keymap::{Bind, Group, Key, KeyCode, KeyInput, Keymaps, Map};
