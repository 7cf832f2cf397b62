use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr};
use crossterm::event::{self, Event, KeyEventKind};

use lazydb::{
    config::KeymapConfig,
    keymap::{Group, KeyInput, Keymaps, help},
    logging,
};

mod tui;

/// lazydb - keymap tools for the lazydb terminal client
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Keymap config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the active keybindings
    Keys {
        /// Only print this group
        group: Option<Group>,
    },
    /// Validate the keymap config and report shadowed binds
    Check,
    /// Press keys and see which command they resolve to
    Watch {
        /// Group to resolve against before falling back to global
        #[arg(default_value = "home")]
        group: Group,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Keys { group } => {
            let keymaps = load_keymaps(cli.config.as_deref());
            print_keys(&keymaps, group);
            Ok(())
        }
        Commands::Check => check(cli.config.as_deref()),
        Commands::Watch { group } => {
            let keymaps = load_keymaps(cli.config.as_deref());
            watch(&keymaps, group)
        }
    }
}

/// Loads keymaps leniently: any config problem falls back to the defaults.
fn load_keymaps(path: Option<&Path>) -> Keymaps {
    let config = match path {
        Some(path) => KeymapConfig::load_from(path),
        None => KeymapConfig::load(),
    };
    config.build_keymaps().unwrap_or_else(|err| {
        tracing::warn!("Ignoring keymap overrides: {err}");
        Keymaps::default()
    })
}

fn print_keys(keymaps: &Keymaps, only: Option<Group>) {
    let mut first = true;
    for (group, map) in keymaps.iter() {
        if only.is_some_and(|only| only != group) {
            continue;
        }
        if !first {
            println!();
        }
        first = false;
        println!("[{group}]");
        println!("{}", help::render_table(map));
    }
}

fn check(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => KeymapConfig::config_path()?,
    };

    let config = match KeymapConfig::try_load_from(&path) {
        Ok(config) => config,
        Err(err) if err.is_not_found() => {
            println!("No keymap config at {}, using defaults", path.display());
            KeymapConfig::default()
        }
        Err(err) => return Err(err).wrap_err("Keymap config is invalid"),
    };
    let keymaps = config
        .build_keymaps()
        .wrap_err_with(|| format!("Keymap config {} is invalid", path.display()))?;

    let mut shadowed = 0;
    for (group, map) in keymaps.iter() {
        for (winner, lost) in map.shadowed() {
            println!("{group}: '{lost}' is shadowed by '{winner}'");
            shadowed += 1;
        }
    }
    println!("Keymap config OK ({shadowed} shadowed binds)");
    Ok(())
}

fn watch(keymaps: &Keymaps, group: Group) -> Result<()> {
    println!("Resolving keys in '{group}', then 'global'. Press a key bound to Quit to exit.");
    tui::init()?;
    let result = watch_loop(keymaps, group);
    let restored = tui::restore();
    finish_watch(result, restored)
}

/// Combines the loop outcome with terminal restoration; the loop error wins.
fn finish_watch(result: Result<()>, restored: io::Result<()>) -> Result<()> {
    result?;
    restored.wrap_err("Failed to restore the terminal")
}

fn watch_loop(keymaps: &Keymaps, group: Group) -> Result<()> {
    let mut stdout = io::stdout();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let input = KeyInput::from(key);
        let command = keymaps.resolve_layered(group, input);
        tracing::debug!(?input, %command, "Resolved key");

        let rendered = input.key().render();
        let label = if rendered.is_empty() { "<?>" } else { &rendered };
        write!(stdout, "{label:<12} {command}\r\n")?;
        stdout.flush()?;

        if command.is_exit() {
            return Ok(());
        }
    }
}
