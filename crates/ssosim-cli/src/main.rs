//! ssosim - simulated SSO login from the command line.
//!
//! Running without arguments performs the login: fake credentials are
//! written to the configured storage and the confirmation is printed.

mod terminal;

use std::ffi::OsString;
use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use ssosim_core::{Config, Credentials, KeyValueStorage, LoginSimulator, STORAGE_KEY};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use terminal::TerminalDocument;

const USAGE: &str = "Usage: ssosim [login | --show | --clear]";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Login,
    Show,
    Clear,
    Help,
}

impl Command {
    /// Parse the arguments after the program name
    fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args: Vec<OsString> = args.into_iter().collect();
        if args.len() > 1 {
            bail!("Too many arguments\n{}", USAGE);
        }
        match args.first() {
            None => Self::parse(None),
            Some(arg) => match arg.to_str() {
                Some(arg) => Self::parse(Some(arg)),
                None => bail!("Unknown argument '{}'\n{}", arg.to_string_lossy(), USAGE),
            },
        }
    }

    fn parse(arg: Option<&str>) -> Result<Self> {
        match arg {
            None | Some("login") | Some("--login") => Ok(Command::Login),
            Some("show") | Some("--show") => Ok(Command::Show),
            Some("clear") | Some("--clear") => Ok(Command::Clear),
            Some("-h") | Some("--help") => Ok(Command::Help),
            Some(other) => bail!("Unknown argument '{}'\n{}", other, USAGE),
        }
    }
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let command = Command::from_args(std::env::args_os().skip(1))?;
    if command == Command::Help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = Config::load().context("Failed to load config")?;
    let mut storage = config.open_storage().context("Failed to open storage")?;
    info!(backend = storage.name(), "Storage opened");

    let stdout = io::stdout();
    match command {
        Command::Login => login(&mut *storage, stdout.lock()),
        Command::Show => show(&mut *storage, stdout.lock()),
        Command::Clear => clear(&mut *storage, stdout.lock()),
        Command::Help => Ok(()),
    }
}

fn login<W: Write>(storage: &mut dyn KeyValueStorage, out: W) -> Result<()> {
    LoginSimulator::new(storage, TerminalDocument::new(out))
        .login()
        .context("Login failed")
}

fn show<W: Write>(storage: &mut dyn KeyValueStorage, mut out: W) -> Result<()> {
    let Some(json) = storage
        .get(STORAGE_KEY)
        .context("Failed to read stored credentials")?
    else {
        writeln!(out, "No credentials stored")?;
        return Ok(());
    };

    let credentials = Credentials::from_json(&json)
        .with_context(|| format!("Stored value under '{}' is not valid credentials", STORAGE_KEY))?;
    writeln!(out, "{}", serde_json::to_string_pretty(&credentials)?)?;
    Ok(())
}

fn clear<W: Write>(storage: &mut dyn KeyValueStorage, mut out: W) -> Result<()> {
    storage
        .remove(STORAGE_KEY)
        .context("Failed to remove stored credentials")?;
    info!(key = STORAGE_KEY, "Credentials cleared");
    writeln!(out, "Credentials cleared")?;
    Ok(())
}
