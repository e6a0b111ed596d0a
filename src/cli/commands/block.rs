use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::booking::BookingLogic;
use crate::core::projector::ProjectionOptions;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Block {
        date: date_str,
        times,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let opts = ProjectionOptions::from_config(cfg)?;
        let mut pool = DbPool::open(cfg)?;
        let ids = BookingLogic::block(&mut pool, cfg, &opts, d, times)?;

        success(format!("{} slot(s) blocked on {}.", ids.len(), d));
        if !ids.is_empty() {
            let joined: Vec<String> = ids.iter().map(|id| format!("#{}", id)).collect();
            info(format!("Block ids: {} (lift with `cancel <id>`)", joined.join(" ")));
        }
    }

    Ok(())
}
