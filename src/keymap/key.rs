//! Physical keys and their canonical text form.
//!
//! A [`Key`] is either a printable character or a special [`KeyCode`].
//! Rendering is total: a key with nothing to show renders as `""`.
//! Parsing accepts exactly what rendering produces, plus a few aliases.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::KeymapError;
use crate::keymap::KeyInput;

// ============================================================================
// Key Codes
// ============================================================================

/// Identifier of a non-printable key.
///
/// `Ctrl` chords compare and hash by their lowercase letter, so
/// `Ctrl('R')` and `Ctrl('r')` are the same key. Constructors in this crate
/// store the lowercase form.
#[derive(Debug, Clone, Copy, Eq, Default)]
pub enum KeyCode {
    /// No special key. Never matches an incoming event.
    #[default]
    None,
    Enter,
    Esc,
    Tab,
    Backtab,
    Backspace,
    Delete,
    Insert,
    Home,
    End,
    PageUp,
    PageDown,
    Up,
    Down,
    Left,
    Right,
    /// Function key `F1`..`F24`.
    F(u8),
    /// Control chord over an ASCII letter.
    Ctrl(char),
}

/// Registered display names. The first entry for a code is its canonical
/// name; later entries are parse-only aliases.
const NAMED_KEYS: &[(&str, KeyCode)] = &[
    ("Enter", KeyCode::Enter),
    ("Esc", KeyCode::Esc),
    ("Tab", KeyCode::Tab),
    ("Backtab", KeyCode::Backtab),
    ("Backspace", KeyCode::Backspace),
    ("Delete", KeyCode::Delete),
    ("Insert", KeyCode::Insert),
    ("Home", KeyCode::Home),
    ("End", KeyCode::End),
    ("PgUp", KeyCode::PageUp),
    ("PgDn", KeyCode::PageDown),
    ("Up", KeyCode::Up),
    ("Down", KeyCode::Down),
    ("Left", KeyCode::Left),
    ("Right", KeyCode::Right),
    // aliases
    ("Return", KeyCode::Enter),
    ("Escape", KeyCode::Esc),
    ("Del", KeyCode::Delete),
    ("PageUp", KeyCode::PageUp),
    ("PageDown", KeyCode::PageDown),
];

const MAX_FUNCTION_KEY: u8 = 24;

impl PartialEq for KeyCode {
    fn eq(&self, other: &Self) -> bool {
        match (self.normalized(), other.normalized()) {
            (Self::F(a), Self::F(b)) => a == b,
            (Self::Ctrl(a), Self::Ctrl(b)) => a == b,
            (a, b) => std::mem::discriminant(&a) == std::mem::discriminant(&b),
        }
    }
}

impl Hash for KeyCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let code = self.normalized();
        std::mem::discriminant(&code).hash(state);
        match code {
            Self::F(n) => n.hash(state),
            Self::Ctrl(c) => c.hash(state),
            _ => {}
        }
    }
}

impl KeyCode {
    /// Builds a control chord, normalizing the letter to lowercase.
    #[must_use]
    pub const fn ctrl(c: char) -> Self {
        Self::Ctrl(c.to_ascii_lowercase())
    }

    /// Returns the code with any `Ctrl` letter lowercased.
    #[must_use]
    pub const fn normalized(self) -> Self {
        match self {
            Self::Ctrl(c) => Self::ctrl(c),
            other => other,
        }
    }

    /// Returns the registered display name, if the code has one.
    ///
    /// [`KeyCode::None`], function keys outside `F1`..`F24` and control
    /// chords over non-letters have no name.
    #[must_use]
    pub fn name(&self) -> Option<Cow<'static, str>> {
        match *self {
            Self::None => None,
            Self::F(n) if (1..=MAX_FUNCTION_KEY).contains(&n) => Some(Cow::Owned(format!("F{n}"))),
            Self::F(_) => None,
            Self::Ctrl(c) if c.is_ascii_alphabetic() => {
                Some(Cow::Owned(format!("Ctrl-{}", c.to_ascii_uppercase())))
            }
            Self::Ctrl(_) => None,
            code => NAMED_KEYS
                .iter()
                .find(|(_, named)| *named == code)
                .map(|(name, _)| Cow::Borrowed(*name)),
        }
    }

    /// Looks a code up by name, ignoring ASCII case.
    ///
    /// Accepts canonical names, aliases, `F<n>` and `Ctrl-<letter>`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some((_, code)) = NAMED_KEYS
            .iter()
            .find(|(named, _)| named.eq_ignore_ascii_case(name))
        {
            return Some(*code);
        }

        if let Some(prefix) = name.get(..5)
            && prefix.eq_ignore_ascii_case("ctrl-")
        {
            let mut rest = name[5..].chars();
            return match (rest.next(), rest.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => Some(Self::ctrl(c)),
                _ => None,
            };
        }

        let digits = name.strip_prefix(['F', 'f'])?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let n: u8 = digits.parse().ok()?;
        (1..=MAX_FUNCTION_KEY).contains(&n).then_some(Self::F(n))
    }
}

// ============================================================================
// Key
// ============================================================================

/// One physical input: a printable character or a special key.
///
/// When `ch` is set the key is a character key and `code` is
/// [`KeyCode::None`]; otherwise `code` identifies the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Key {
    /// Special key identifier, or [`KeyCode::None`] for character keys.
    pub code: KeyCode,
    /// Printable character, absent for special keys.
    pub ch: Option<char>,
}

impl Key {
    /// A printable character key.
    #[must_use]
    pub const fn char(ch: char) -> Self {
        Self {
            code: KeyCode::None,
            ch: Some(ch),
        }
    }

    /// A special key.
    #[must_use]
    pub const fn code(code: KeyCode) -> Self {
        Self {
            code: code.normalized(),
            ch: None,
        }
    }

    /// Canonical text form: the character itself, `<Name>` for a named
    /// special key, or `""` when neither applies.
    #[must_use]
    pub fn render(&self) -> String {
        if let Some(ch) = self.ch {
            return ch.to_string();
        }
        self.code
            .name()
            .map(|name| format!("<{name}>"))
            .unwrap_or_default()
    }

    /// Whether an incoming event triggers this key.
    ///
    /// Rune events compare only the character; special events compare only
    /// the code, and a [`KeyCode::None`] event matches nothing.
    #[must_use]
    pub fn matches(&self, input: KeyInput) -> bool {
        match input {
            KeyInput::Rune(rune) => self.ch == Some(rune),
            KeyInput::Special(KeyCode::None) => false,
            KeyInput::Special(code) => self.code == code,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for Key {
    type Err = KeymapError;

    /// Parses `"j"`, `"<Enter>"`, `"<Ctrl-C>"`, `"<F5>"` or `"<Space>"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => return Err(KeymapError::invalid_key(s)),
            (Some(ch), None) => return Ok(Self::char(ch)),
            _ => {}
        }

        let name = s
            .strip_prefix('<')
            .and_then(|rest| rest.strip_suffix('>'))
            .ok_or_else(|| KeymapError::invalid_key(s))?;

        if name.eq_ignore_ascii_case("space") {
            return Ok(Self::char(' '));
        }

        KeyCode::from_name(name)
            .map(Self::code)
            .ok_or_else(|| KeymapError::unknown_key_name(name))
    }
}

// ============================================================================
// Tests
// ============================================================================
