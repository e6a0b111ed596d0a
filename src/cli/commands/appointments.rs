use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::agenda::AgendaLogic;
use crate::core::projector::ProjectionOptions;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Appointments { date, blocked } = cmd {
        let day = match date {
            Some(s) => Some(parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?),
            None => None,
        };

        let opts = ProjectionOptions::from_config(cfg)?;
        let pool = DbPool::open(cfg)?;
        let appointments = AgendaLogic::appointments(&pool, &opts, day, *blocked)?;
        AgendaLogic::print_appointments(&appointments, &opts);
    }

    Ok(())
}
