//! Classification of raw terminal key events.

use crossterm::event::{KeyCode as TermKeyCode, KeyEvent, KeyModifiers};

use crate::keymap::{Key, KeyCode};

/// An input event as seen by keymap resolution.
///
/// Every event is either a printable rune or a special key; resolution
/// branches on this discriminant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyInput {
    /// A printable character.
    Rune(char),
    /// A non-printable key.
    Special(KeyCode),
}

impl KeyInput {
    /// A special-key event, with `Ctrl` letters normalized.
    #[must_use]
    pub const fn special(code: KeyCode) -> Self {
        Self::Special(code.normalized())
    }

    /// Returns `true` for printable rune events.
    #[must_use]
    pub const fn is_rune(&self) -> bool {
        matches!(self, Self::Rune(_))
    }

    /// The [`Key`] a bind would need to match this event.
    #[must_use]
    pub const fn key(&self) -> Key {
        match *self {
            Self::Rune(c) => Key::char(c),
            Self::Special(code) => Key::code(code),
        }
    }
}

impl From<KeyEvent> for KeyInput {
    /// Converts a crossterm event.
    ///
    /// Control plus an ASCII letter becomes a `Ctrl` chord; control plus
    /// anything else is unrecognized. Shift and Alt are ignored, so `Alt-x`
    /// resolves like `x`. Keys with no [`KeyCode`] counterpart map to
    /// [`KeyCode::None`] and never match a binding.
    fn from(event: KeyEvent) -> Self {
        let code = match event.code {
            TermKeyCode::Char(c) if event.modifiers.contains(KeyModifiers::CONTROL) => {
                if c.is_ascii_alphabetic() {
                    KeyCode::ctrl(c)
                } else {
                    KeyCode::None
                }
            }
            TermKeyCode::Char(c) => return Self::Rune(c),
            TermKeyCode::Enter => KeyCode::Enter,
            TermKeyCode::Esc => KeyCode::Esc,
            TermKeyCode::Tab => KeyCode::Tab,
            TermKeyCode::BackTab => KeyCode::Backtab,
            TermKeyCode::Backspace => KeyCode::Backspace,
            TermKeyCode::Delete => KeyCode::Delete,
            TermKeyCode::Insert => KeyCode::Insert,
            TermKeyCode::Home => KeyCode::Home,
            TermKeyCode::End => KeyCode::End,
            TermKeyCode::PageUp => KeyCode::PageUp,
            TermKeyCode::PageDown => KeyCode::PageDown,
            TermKeyCode::Up => KeyCode::Up,
            TermKeyCode::Down => KeyCode::Down,
            TermKeyCode::Left => KeyCode::Left,
            TermKeyCode::Right => KeyCode::Right,
            TermKeyCode::F(n) => KeyCode::F(n),
            _ => KeyCode::None,
        };
        Self::Special(code)
    }
}

impl From<&KeyEvent> for KeyInput {
    fn from(event: &KeyEvent) -> Self {
        Self::from(*event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{key_event, key_event_with_modifiers};
    use rstest::rstest;

    #[rstest]
    #[case::letter(TermKeyCode::Char('j'), KeyInput::Rune('j'))]
    #[case::space(TermKeyCode::Char(' '), KeyInput::Rune(' '))]
    #[case::enter(TermKeyCode::Enter, KeyInput::Special(KeyCode::Enter))]
    #[case::backtab(TermKeyCode::BackTab, KeyInput::Special(KeyCode::Backtab))]
    #[case::function(TermKeyCode::F(3), KeyInput::Special(KeyCode::F(3)))]
    #[case::caps_lock(TermKeyCode::CapsLock, KeyInput::Special(KeyCode::None))]
    #[case::null(TermKeyCode::Null, KeyInput::Special(KeyCode::None))]
    fn test_from_plain_event(#[case] code: TermKeyCode, #[case] expected: KeyInput) {
        assert_eq!(KeyInput::from(key_event(code)), expected);
    }

    #[rstest]
    #[case::ctrl_c(
        TermKeyCode::Char('c'),
        KeyModifiers::CONTROL,
        KeyInput::Special(KeyCode::Ctrl('c'))
    )]
    #[case::ctrl_shift_c(
        TermKeyCode::Char('C'),
        KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        KeyInput::Special(KeyCode::Ctrl('c'))
    )]
    #[case::ctrl_digit(
        TermKeyCode::Char('1'),
        KeyModifiers::CONTROL,
        KeyInput::Special(KeyCode::None)
    )]
    #[case::shift_letter(TermKeyCode::Char('G'), KeyModifiers::SHIFT, KeyInput::Rune('G'))]
    #[case::alt_letter(TermKeyCode::Char('x'), KeyModifiers::ALT, KeyInput::Rune('x'))]
    #[case::ctrl_enter(
        TermKeyCode::Enter,
        KeyModifiers::CONTROL,
        KeyInput::Special(KeyCode::Enter)
    )]
    fn test_from_modified_event(
        #[case] code: TermKeyCode,
        #[case] modifiers: KeyModifiers,
        #[case] expected: KeyInput,
    ) {
        assert_eq!(KeyInput::from(key_event_with_modifiers(code, modifiers)), expected);
    }

    #[test]
    fn test_special_normalizes_ctrl() {
        assert_eq!(
            KeyInput::special(KeyCode::Ctrl('R')),
            KeyInput::Special(KeyCode::Ctrl('r'))
        );
        assert!(!KeyInput::special(KeyCode::Enter).is_rune());
        assert!(KeyInput::Rune('x').is_rune());
    }

    #[test]
    fn test_key_matches_its_own_event() {
        for input in crate::test_utils::all_inputs() {
            let key = input.key();
            match input {
                KeyInput::Special(KeyCode::None) => assert!(!key.matches(input)),
                _ => assert!(key.matches(input), "{input:?}"),
            }
        }
        assert_eq!(KeyInput::Rune('j').key().render(), "j");
        assert_eq!(KeyInput::special(KeyCode::Ctrl('x')).key().render(), "<Ctrl-X>");
    }
}
