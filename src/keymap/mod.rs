//! Keybinding resolution.
//!
//! Raw key events are classified into a [`KeyInput`], resolved against the
//! [`Map`] of the active [`Group`], and come out as a
//! [`Command`](crate::commands::Command):
//!
//! ```text
//! KeyEvent -> KeyInput -> Map::resolve -> Command -> dispatcher
//! ```
//!
//! Unbound keys resolve to [`Command::Noop`](crate::commands::Command::Noop);
//! whether that deserves feedback is up to the caller.

mod bind;
pub mod defaults;
mod groups;
pub mod help;
mod input;
mod key;
mod map;

pub use bind::Bind;
pub use groups::{Group, Keymaps};
pub use input::KeyInput;
pub use key::{Key, KeyCode};
pub use map::Map;
