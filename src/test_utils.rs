//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting event and keymap setup across
//! module tests.

use crossterm::event::{KeyCode as TermKeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use crate::commands::Command;
use crate::keymap::{Bind, Key, KeyCode, KeyInput, Map};

// ============================================================================
// Key Events
// ============================================================================

/// Creates a key press event without modifiers.
#[must_use]
pub fn key_event(code: TermKeyCode) -> KeyEvent {
    key_event_with_modifiers(code, KeyModifiers::empty())
}

/// Creates a key press event with modifiers.
#[must_use]
pub fn key_event_with_modifiers(code: TermKeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

// ============================================================================
// Key Codes & Inputs
// ============================================================================

/// Every special key code that has a registered display name.
#[must_use]
pub fn named_key_codes() -> Vec<KeyCode> {
    let mut codes = vec![
        KeyCode::Enter,
        KeyCode::Esc,
        KeyCode::Tab,
        KeyCode::Backtab,
        KeyCode::Backspace,
        KeyCode::Delete,
        KeyCode::Insert,
        KeyCode::Home,
        KeyCode::End,
        KeyCode::PageUp,
        KeyCode::PageDown,
        KeyCode::Up,
        KeyCode::Down,
        KeyCode::Left,
        KeyCode::Right,
    ];
    codes.extend((1..=24).map(KeyCode::F));
    codes.extend(('a'..='z').map(KeyCode::Ctrl));
    codes
}

/// A broad sample of input events: every special code (named or not) and
/// runes spread across the whole Unicode range, including `'\0'`.
#[must_use]
pub fn all_inputs() -> Vec<KeyInput> {
    let mut inputs: Vec<KeyInput> = named_key_codes()
        .into_iter()
        .chain([
            KeyCode::None,
            KeyCode::F(0),
            KeyCode::F(25),
            KeyCode::F(u8::MAX),
            KeyCode::Ctrl('1'),
        ])
        .map(KeyInput::Special)
        .collect();
    inputs.extend(
        (0..=char::MAX as u32)
            .step_by(251)
            .chain(0..=0x7f)
            .filter_map(char::from_u32)
            .map(KeyInput::Rune),
    );
    inputs
}

// ============================================================================
// Mother Pattern Factories
// ============================================================================

/// The `j` / `k` / `<Esc>` keymap used throughout the resolution tests.
#[must_use]
pub fn vim_map() -> Map {
    Map::new(vec![
        Bind::new(Key::char('j'), Command::MoveDown, "Move down"),
        Bind::new(Key::char('k'), Command::MoveUp, "Move up"),
        Bind::new(Key::code(KeyCode::Esc), Command::Quit, "Quit"),
    ])
}
