use std::io;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Puts the terminal in raw mode so every key press reaches the app.
pub fn init() -> io::Result<()> {
    enable_raw_mode()?;
    set_panic_hook();
    Ok(())
}

fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        hook(panic_info);
    }));
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()
}
