//! Ordered keymaps and first-match resolution.
//!
//! A [`Map`] is a list of [`Bind`]s for one UI context. Resolving an event
//! scans the list from first to last and returns the command of the first
//! bind whose key matches. Earlier binds shadow later binds for the same key,
//! which is how user overrides take effect (see [`Map::with_priority`]).
//!
//! # Example
//!
//! ```
//! use lazydb::commands::Command;
//! use lazydb::keymap::{Bind, Key, KeyCode, KeyInput, Map};
//!
//! let map: Map = [
//!     Bind::new(Key::char('j'), Command::MoveDown, "Down"),
//!     Bind::new(Key::char('k'), Command::MoveUp, "Up"),
//!     Bind::new(Key::code(KeyCode::Esc), Command::Quit, "Quit"),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(map.resolve(KeyInput::Rune('j')), Command::MoveDown);
//! assert_eq!(map.resolve(KeyInput::Special(KeyCode::Esc)), Command::Quit);
//! assert_eq!(map.resolve(KeyInput::Rune('x')), Command::Noop);
//! ```

use crate::commands::Command;
use crate::keymap::{Bind, KeyInput};

/// An ordered list of binds. List order is precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Map {
    binds: Vec<Bind>,
}

impl Map {
    /// Creates a map that keeps `binds` in the given order.
    #[must_use]
    pub fn new(binds: Vec<Bind>) -> Self {
        Self { binds }
    }

    /// Resolves an input event to a command.
    ///
    /// Returns the command of the first bind matching `input`, or
    /// [`Command::Noop`] when nothing matches. Never fails and never mutates
    /// the map.
    #[must_use]
    pub fn resolve(&self, input: impl Into<KeyInput>) -> Command {
        self.find(input).map_or(Command::Noop, |bind| bind.command)
    }

    /// Returns the bind that [`resolve`](Self::resolve) would use.
    #[must_use]
    pub fn find(&self, input: impl Into<KeyInput>) -> Option<&Bind> {
        let input = input.into();
        self.binds.iter().find(|bind| bind.key.matches(input))
    }

    /// Returns a new map where `binds` come before every existing bind.
    ///
    /// The prepended binds win over existing binds for the same key.
    /// Binding a key to [`Command::Noop`] this way disables it.
    #[must_use]
    pub fn with_priority(self, binds: impl IntoIterator<Item = Bind>) -> Self {
        let mut merged: Vec<Bind> = binds.into_iter().collect();
        merged.extend(self.binds);
        Self { binds: merged }
    }

    /// Lists binds that can never be resolved because an earlier bind has
    /// an identical key, as `(winner, shadowed)` pairs in list order.
    ///
    /// Duplicates are legal; this is for diagnostics only.
    #[must_use]
    pub fn shadowed(&self) -> Vec<(&Bind, &Bind)> {
        self.binds
            .iter()
            .enumerate()
            .filter_map(|(index, bind)| {
                self.binds[..index]
                    .iter()
                    .find(|earlier| earlier.key == bind.key)
                    .map(|winner| (winner, bind))
            })
            .collect()
    }

    /// Returns `true` if `bind` sits at `index` and no earlier bind has
    /// the same key.
    pub(crate) fn is_reachable(&self, index: usize) -> bool {
        let Some(bind) = self.binds.get(index) else {
            return false;
        };
        !self.binds[..index].iter().any(|earlier| earlier.key == bind.key)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bind> {
        self.binds.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.binds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }
}

impl FromIterator<Bind> for Map {
    fn from_iter<I: IntoIterator<Item = Bind>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = &'a Bind;
    type IntoIter = std::slice::Iter<'a, Bind>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================
