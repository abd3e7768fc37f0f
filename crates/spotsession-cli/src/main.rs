//! spotsession - save and reuse Spotify web player cookie sessions.
//!
//! First time (per account), copy `sp_dc` and `sp_key` from the browser's
//! cookies for https://open.spotify.com and run:
//!
//! ```text
//! spotsession setup --identifier me
//! ```
//!
//! Afterwards `spotsession load me` checks the session still builds a client.

mod commands;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spotsession_core::{resolve_session_path, CookieClientFactory, SessionStore};

#[derive(Parser, Debug)]
#[command(name = "spotsession", version, about = "Manage saved Spotify cookie sessions")]
struct Cli {
    /// Session file to use instead of ~/.config/spotapi/session.json (all platforms)
    #[arg(long, global = true, env = "SPOTSESSION_FILE", value_name = "PATH")]
    session_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Save an sp_dc / sp_key cookie pair; missing values are prompted for
    Setup {
        /// Label for this session, e.g. your email
        #[arg(short, long, default_value = spotsession_core::DEFAULT_IDENTIFIER)]
        identifier: String,
        sp_dc: Option<String>,
        sp_key: Option<String>,
    },
    /// Load a saved session and show it
    Load {
        #[arg(default_value = spotsession_core::DEFAULT_IDENTIFIER)]
        identifier: String,
    },
    /// List saved session identifiers
    List,
    /// Remove a saved session
    Remove { identifier: String },
}

/// Initialize the tracing subscriber for logging
fn init_tracing(verbose: u8) {
    // RUST_LOG wins over -v
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let store = SessionStore::at(resolve_session_path(cli.session_file)?, CookieClientFactory);
    let mut out = io::stdout().lock();

    match cli.command {
        Command::Setup {
            identifier,
            sp_dc,
            sp_key,
        } => {
            let sp_dc = commands::cookie_or_prompt(sp_dc, "sp_dc")?;
            let sp_key = commands::cookie_or_prompt(sp_key, "sp_key")?;
            commands::setup(&store, &identifier, &sp_dc, &sp_key, &mut out)
        }
        Command::Load { identifier } => commands::load(&store, &identifier, &mut out),
        Command::List => commands::list(&store, &mut out),
        Command::Remove { identifier } => commands::remove(&store, &identifier, &mut out),
    }
}
