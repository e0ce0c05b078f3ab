//! rWorkout library root.
//! Exposes the CLI parser, the high-level run() function, and the
//! store / stats core used by any front end.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use tracing_subscriber::{EnvFilter, fmt};
use utils::path::from_cwd;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(&cli.command, cfg),
        Commands::Stats => cli::commands::stats::handle(&cli.command, cfg),
        Commands::Kinds => cli::commands::kinds::handle(&cli.command, cfg),
        Commands::Reset { .. } => cli::commands::reset::handle(&cli.command, cfg),
    }
}

/// Diagnostics on stderr, filtered by RUST_LOG (default: warn).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    init_tracing();

    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the workout file
    if let Some(custom) = &cli.file {
        cfg.data_file = from_cwd(custom)?.to_string_lossy().into_owned();
    }

    tracing::debug!(data_file = %cfg.data_path().display(), "configuration loaded");

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
