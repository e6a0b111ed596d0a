//! groombook library root.
//! Exposes the CLI parser, the high-level run() function, the pure
//! schedule core and its SQLite-backed collaborators.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cli.command.requires_admin() {
        cfg.require_admin(cli.as_user.as_deref())?;
    }

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Rule { .. } => cli::commands::rule::handle(&cli.command, cfg),
        Commands::Book { .. } => cli::commands::book::handle(&cli.command, cfg),
        Commands::Block { .. } => cli::commands::block::handle(&cli.command, cfg),
        Commands::Appointments { .. } => cli::commands::appointments::handle(&cli.command, cfg),
        Commands::Cancel { .. } => cli::commands::cancel::handle(&cli.command, cfg),
        Commands::Slots { .. } => cli::commands::slots::handle(&cli.command, cfg),
        Commands::Agenda { .. } => cli::commands::agenda::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once and handed to every command
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
