use crate::cli::commands::ask_confirmation;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::BookingLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cancel { id, yes } = cmd {
        if !*yes
            && !ask_confirmation(&format!(
                "Cancel appointment #{}? This action is irreversible.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::open(cfg)?;
        BookingLogic::cancel(&pool, *id)?;
        success(format!("Appointment #{} has been cancelled.", id));
    }

    Ok(())
}
