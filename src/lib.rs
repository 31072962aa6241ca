//! fuellog library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod blob;
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
use utils::path::expand_tilde;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Fleet => cli::commands::fleet::handle(cfg),
        Commands::Fill { .. } => cli::commands::fill::handle(&cli.command, cfg),
        Commands::Deduct { .. } => cli::commands::deduct::handle(&cli.command, cfg),
        Commands::View { .. } => cli::commands::view::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config ONCE, then apply command-line overrides
    let path = cli
        .config
        .as_deref()
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    let cfg = Config::load(&path)?.with_overrides(
        cli.store_dir.as_deref(),
        cli.mirror_dir.as_deref(),
        cli.user.as_deref(),
    );

    // 3️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
