//! Keymap groups: one [`Map`] per UI context.
//!
//! The caller decides which group is active (the focused screen or popup)
//! and resolves events against it. [`Keymaps::resolve_layered`] adds the
//! usual fallback to the [`Group::Global`] map.

use clap::ValueEnum;
use serde::Deserialize;
use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::commands::Command;
use crate::keymap::{Bind, KeyInput, Map, defaults};

// ============================================================================
// Group
// ============================================================================

/// A UI context with its own keymap.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    Deserialize,
    ValueEnum,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Group {
    /// Keys available everywhere unless a screen binds them first.
    Global,
    /// Connection list and connection form.
    Connection,
    /// Main layout once connected: tabs and focus switching.
    Home,
    /// Database and table tree.
    Tree,
    /// Query results table.
    Table,
    /// SQL editor.
    Editor,
    /// Record sidebar.
    Sidebar,
}

impl Group {
    /// All groups in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Global,
        Self::Connection,
        Self::Home,
        Self::Tree,
        Self::Table,
        Self::Editor,
        Self::Sidebar,
    ];

    /// Returns `true` if printable keys in this group are text, not commands.
    #[must_use]
    pub const fn accepts_text_input(&self) -> bool {
        matches!(self, Self::Editor)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

// ============================================================================
// Keymaps
// ============================================================================

/// The full set of keymaps, one [`Map`] per [`Group`].
///
/// Read-only once built, so it can be shared across threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymaps {
    maps: [Map; Group::COUNT],
}

impl Default for Keymaps {
    /// The built-in keymaps.
    fn default() -> Self {
        Self {
            maps: Group::ALL.map(|group| Map::new(defaults::binds(group))),
        }
    }
}

impl Keymaps {
    /// Keymaps with no binds at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            maps: Default::default(),
        }
    }

    /// Returns the map for `group`.
    #[must_use]
    pub fn group(&self, group: Group) -> &Map {
        &self.maps[group.index()]
    }

    /// Replaces the map for `group`.
    #[must_use]
    pub fn with_group(mut self, group: Group, map: Map) -> Self {
        self.maps[group.index()] = map;
        self
    }

    /// Prepends `binds` to the map for `group` so they take precedence.
    #[must_use]
    pub fn with_overrides(mut self, group: Group, binds: impl IntoIterator<Item = Bind>) -> Self {
        let map = std::mem::take(&mut self.maps[group.index()]);
        self.maps[group.index()] = map.with_priority(binds);
        self
    }

    /// Resolves `input` against the map for `group` only.
    #[must_use]
    pub fn resolve(&self, group: Group, input: impl Into<KeyInput>) -> Command {
        self.group(group).resolve(input)
    }

    /// Resolves against `group`, then against [`Group::Global`] if no bind
    /// in the group matches the event.
    ///
    /// A group bind to [`Command::Noop`] still counts as a match, so it
    /// disables the global bind for that key too. Printable keys in a group
    /// that [accepts text input](Group::accepts_text_input) never fall
    /// through, so typing `q` in the editor does not quit.
    #[must_use]
    pub fn resolve_layered(&self, group: Group, input: impl Into<KeyInput>) -> Command {
        let input = input.into();
        if let Some(bind) = self.group(group).find(input) {
            return bind.command;
        }
        if group == Group::Global || (group.accepts_text_input() && input.is_rune()) {
            return Command::Noop;
        }
        self.resolve(Group::Global, input)
    }

    /// Iterates over `(group, map)` pairs in group order.
    pub fn iter(&self) -> impl Iterator<Item = (Group, &Map)> {
        Group::ALL.into_iter().zip(self.maps.iter())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Key, KeyCode};
    use crate::test_utils::vim_map;
    use rstest::{fixture, rstest};
    use strum::IntoEnumIterator;

    #[fixture]
    fn keymaps() -> Keymaps {
        Keymaps::default()
    }

    mod group_tests {
        use super::*;

        #[test]
        fn test_all_matches_iteration_order() {
            let iterated: Vec<_> = Group::iter().collect();
            assert_eq!(iterated, Group::ALL.to_vec());
            for (index, group) in Group::ALL.iter().enumerate() {
                assert_eq!(group.index(), index);
            }
        }

        #[rstest]
        #[case::global(Group::Global, "global")]
        #[case::connection(Group::Connection, "connection")]
        #[case::sidebar(Group::Sidebar, "sidebar")]
        fn test_names_are_lowercase(#[case] group: Group, #[case] name: &str) {
            assert_eq!(group.to_string(), name);
            assert_eq!(name.parse::<Group>(), Ok(group));
        }

        #[test]
        fn test_only_editor_accepts_text() {
            for group in Group::ALL {
                assert_eq!(group.accepts_text_input(), group == Group::Editor);
            }
        }
    }

    mod keymaps_tests {
        use super::*;

        #[rstest]
        fn test_resolve_uses_only_the_group(keymaps: Keymaps) {
            assert_eq!(keymaps.resolve(Group::Table, KeyInput::Rune('j')), Command::MoveDown);
            assert_eq!(keymaps.resolve(Group::Table, KeyInput::Rune('q')), Command::Noop);
            assert_eq!(keymaps.resolve(Group::Global, KeyInput::Rune('q')), Command::Quit);
        }

        #[rstest]
        fn test_layered_falls_back_to_global(keymaps: Keymaps) {
            assert_eq!(
                keymaps.resolve_layered(Group::Table, KeyInput::Rune('q')),
                Command::Quit
            );
            assert_eq!(
                keymaps.resolve_layered(Group::Table, KeyInput::Rune('j')),
                Command::MoveDown
            );
            assert_eq!(
                keymaps.resolve_layered(Group::Table, KeyInput::Rune('~')),
                Command::Noop
            );
        }

        #[rstest]
        fn test_layered_keeps_editor_text(keymaps: Keymaps) {
            assert_eq!(
                keymaps.resolve_layered(Group::Editor, KeyInput::Rune('q')),
                Command::Noop
            );
            assert_eq!(
                keymaps.resolve_layered(Group::Editor, KeyInput::special(KeyCode::Ctrl('c'))),
                Command::Quit
            );
            assert_eq!(
                keymaps.resolve_layered(Group::Editor, KeyInput::special(KeyCode::Ctrl('r'))),
                Command::Execute
            );
        }

        #[test]
        fn test_group_binding_shadows_global() {
            let keymaps = Keymaps::empty()
                .with_group(Group::Global, vim_map())
                .with_group(
                    Group::Tree,
                    Map::new(vec![Bind::new(Key::char('j'), Command::GotoBottom, "Bottom")]),
                );
            assert_eq!(
                keymaps.resolve_layered(Group::Tree, KeyInput::Rune('j')),
                Command::GotoBottom
            );
            assert_eq!(
                keymaps.resolve_layered(Group::Tree, KeyInput::Rune('k')),
                Command::MoveUp
            );
        }

        #[rstest]
        fn test_layered_noop_override_blocks_global(keymaps: Keymaps) {
            let keymaps = keymaps.with_overrides(
                Group::Table,
                [Bind::new(Key::char('q'), Command::Noop, "Disabled")],
            );
            assert_eq!(
                keymaps.resolve_layered(Group::Table, KeyInput::Rune('q')),
                Command::Noop
            );
            assert_eq!(
                keymaps.resolve_layered(Group::Tree, KeyInput::Rune('q')),
                Command::Quit
            );
        }

        #[rstest]
        fn test_layered_global_noop_stays_noop(keymaps: Keymaps) {
            let keymaps = keymaps.with_overrides(
                Group::Global,
                [Bind::new(Key::char('q'), Command::Noop, "Disabled")],
            );
            assert_eq!(
                keymaps.resolve_layered(Group::Global, KeyInput::Rune('q')),
                Command::Noop
            );
            assert_eq!(
                keymaps.resolve_layered(Group::Table, KeyInput::Rune('q')),
                Command::Noop
            );
        }

        #[rstest]
        fn test_with_overrides_only_touches_one_group(keymaps: Keymaps) {
            let overridden = keymaps.clone().with_overrides(
                Group::Table,
                [Bind::new(Key::char('j'), Command::Noop, "Disabled")],
            );
            assert_eq!(overridden.resolve(Group::Table, KeyInput::Rune('j')), Command::Noop);
            assert_eq!(
                overridden.resolve(Group::Tree, KeyInput::Rune('j')),
                Command::MoveDown
            );
            assert_eq!(overridden.group(Group::Tree), keymaps.group(Group::Tree));
        }

        #[test]
        fn test_empty_resolves_noop_everywhere() {
            let keymaps = Keymaps::empty();
            for (group, map) in keymaps.iter() {
                assert!(map.is_empty());
                assert_eq!(keymaps.resolve_layered(group, KeyInput::Rune('q')), Command::Noop);
            }
        }

        #[test]
        fn test_keymaps_are_shareable_across_threads() {
            fn assert_send_sync<T: Send + Sync>() {}
            assert_send_sync::<Keymaps>();

            let keymaps = std::sync::Arc::new(Keymaps::default());
            let handles: Vec<_> = Group::ALL
                .into_iter()
                .map(|group| {
                    let keymaps = std::sync::Arc::clone(&keymaps);
                    std::thread::spawn(move || keymaps.resolve_layered(group, KeyInput::Rune('q')))
                })
                .collect();
            for handle in handles {
                let command = handle.join().unwrap();
                assert!(command == Command::Quit || command == Command::Noop);
            }
        }
    }
}
