//! Plain-text help listing for a keymap.

use crate::keymap::{Bind, Map};

/// Formats `map` as aligned `key  command  description` lines.
///
/// Binds are listed in precedence order. Binds shadowed by an earlier bind
/// for the same key and binds to [`Noop`](crate::commands::Command::Noop)
/// are left out, since pressing the key never runs them.
#[must_use]
pub fn render_table(map: &Map) -> String {
    let rows: Vec<(String, &Bind)> = map
        .iter()
        .enumerate()
        .filter(|(index, bind)| map.is_reachable(*index) && !bind.command.is_noop())
        .map(|(_, bind)| (bind.key.render(), bind))
        .collect();

    let key_width = rows
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);
    let command_width = rows
        .iter()
        .map(|(_, bind)| bind.command.name().len())
        .max()
        .unwrap_or(0);

    rows.iter()
        .map(|(key, bind)| {
            let line = format!(
                "{key:<key_width$}  {:<command_width$}  {}",
                bind.command.name(),
                bind.description
            );
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Command;
    use crate::keymap::{Key, KeyCode};
    use crate::test_utils::vim_map;

    #[test]
    fn test_render_vim_map() {
        insta::assert_snapshot!(render_table(&vim_map()), @r"
        j      MoveDown  Move down
        k      MoveUp    Move up
        <Esc>  Quit      Quit
        ");
    }

    #[test]
    fn test_render_skips_shadowed_and_disabled() {
        let map = vim_map().with_priority([
            Bind::new(Key::char('k'), Command::Noop, "Disabled"),
            Bind::new(Key::char('j'), Command::PageNext, "Page down"),
        ]);
        assert_eq!(
            render_table(&map),
            "j      PageNext  Page down\n<Esc>  Quit      Quit"
        );
    }

    #[test]
    fn test_render_empty_map() {
        assert_eq!(render_table(&Map::default()), "");
    }

    #[test]
    fn test_render_without_description() {
        let map = Map::new(vec![Bind::new(Key::code(KeyCode::F(2)), Command::Edit, "")]);
        assert_eq!(render_table(&map), "<F2>  Edit");
    }
}
