//! Built-in keybindings for every group.

use crate::commands::Command;
use crate::keymap::{Bind, Group, Key, KeyCode};

fn ch(c: char, command: Command, description: &str) -> Bind {
    Bind::new(Key::char(c), command, description)
}

fn code(code: KeyCode, command: Command, description: &str) -> Bind {
    Bind::new(Key::code(code), command, description)
}

/// Returns the default binds for `group`, in precedence order.
#[must_use]
pub fn binds(group: Group) -> Vec<Bind> {
    match group {
        Group::Global => global(),
        Group::Connection => connection(),
        Group::Home => home(),
        Group::Tree => tree(),
        Group::Table => table(),
        Group::Editor => editor(),
        Group::Sidebar => sidebar(),
    }
}

fn global() -> Vec<Bind> {
    vec![
        ch('q', Command::Quit, "Quit"),
        code(KeyCode::Ctrl('c'), Command::Quit, "Quit"),
        ch('?', Command::HelpPopup, "Toggle help"),
        code(KeyCode::Ctrl('e'), Command::ToggleEditor, "Toggle SQL editor"),
    ]
}

fn connection() -> Vec<Bind> {
    vec![
        ch('n', Command::NewConnection, "Create a new connection"),
        ch('e', Command::EditConnection, "Edit the selected connection"),
        ch('d', Command::DeleteConnection, "Delete the selected connection"),
        ch('t', Command::TestConnection, "Test the selected connection"),
        ch('c', Command::Connect, "Connect"),
        code(KeyCode::Enter, Command::Connect, "Connect"),
        ch('j', Command::MoveDown, "Move down"),
        ch('k', Command::MoveUp, "Move up"),
        code(KeyCode::Down, Command::MoveDown, "Move down"),
        code(KeyCode::Up, Command::MoveUp, "Move up"),
        code(KeyCode::Esc, Command::Dismiss, "Close the form"),
    ]
}

fn home() -> Vec<Bind> {
    vec![
        ch('H', Command::FocusTree, "Focus the database tree"),
        ch('L', Command::FocusTable, "Focus the results table"),
        ch(']', Command::NextTab, "Next tab"),
        ch('[', Command::PreviousTab, "Previous tab"),
        code(KeyCode::Tab, Command::NextTab, "Next tab"),
        code(KeyCode::Backtab, Command::PreviousTab, "Previous tab"),
        ch('X', Command::CloseTab, "Close tab"),
        ch('S', Command::ToggleSidebar, "Toggle record sidebar"),
        code(KeyCode::Backspace, Command::GotoConnections, "Back to connections"),
    ]
}

fn tree() -> Vec<Bind> {
    vec![
        ch('j', Command::MoveDown, "Move down"),
        ch('k', Command::MoveUp, "Move up"),
        code(KeyCode::Down, Command::MoveDown, "Move down"),
        code(KeyCode::Up, Command::MoveUp, "Move up"),
        ch('g', Command::GotoTop, "Go to top"),
        ch('G', Command::GotoBottom, "Go to bottom"),
        code(KeyCode::Enter, Command::Select, "Open table"),
        ch('/', Command::Search, "Search tables"),
        code(KeyCode::Ctrl('r'), Command::Refresh, "Reload schema"),
    ]
}

fn table() -> Vec<Bind> {
    vec![
        ch('j', Command::MoveDown, "Move down"),
        ch('k', Command::MoveUp, "Move up"),
        ch('h', Command::MoveLeft, "Move left"),
        ch('l', Command::MoveRight, "Move right"),
        code(KeyCode::Down, Command::MoveDown, "Move down"),
        code(KeyCode::Up, Command::MoveUp, "Move up"),
        code(KeyCode::Left, Command::MoveLeft, "Move left"),
        code(KeyCode::Right, Command::MoveRight, "Move right"),
        ch('g', Command::GotoTop, "Go to first row"),
        ch('G', Command::GotoBottom, "Go to last row"),
        ch('0', Command::GotoStart, "Go to first column"),
        ch('$', Command::GotoEnd, "Go to last column"),
        ch('>', Command::PageNext, "Next page"),
        ch('<', Command::PagePrev, "Previous page"),
        code(KeyCode::PageDown, Command::PageNext, "Next page"),
        code(KeyCode::PageUp, Command::PagePrev, "Previous page"),
        ch('J', Command::SortAsc, "Sort ascending"),
        ch('K', Command::SortDesc, "Sort descending"),
        ch('/', Command::Search, "Filter rows"),
        ch('c', Command::Edit, "Edit cell"),
        ch('d', Command::Delete, "Delete row"),
        ch('o', Command::AppendNewRow, "Append row"),
        ch('y', Command::Copy, "Copy cell value"),
        code(KeyCode::Ctrl('s'), Command::Save, "Commit changes"),
        code(KeyCode::Ctrl('r'), Command::Refresh, "Reload rows"),
    ]
}

fn editor() -> Vec<Bind> {
    vec![
        code(KeyCode::Ctrl('r'), Command::Execute, "Run query"),
        code(KeyCode::Esc, Command::UnfocusEditor, "Leave editor"),
    ]
}

fn sidebar() -> Vec<Bind> {
    vec![
        ch('j', Command::MoveDown, "Next field"),
        ch('k', Command::MoveUp, "Previous field"),
        code(KeyCode::Down, Command::MoveDown, "Next field"),
        code(KeyCode::Up, Command::MoveUp, "Previous field"),
        ch('c', Command::Edit, "Edit field"),
        code(KeyCode::Ctrl('s'), Command::Save, "Apply changes"),
        code(KeyCode::Esc, Command::Dismiss, "Close sidebar"),
    ]
}
