use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::agenda::AgendaLogic;
use crate::core::projector::ProjectionOptions;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_date, parse_month};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Agenda {
        date,
        month,
        json,
        group,
    } = cmd
    {
        let opts = ProjectionOptions::from_config(cfg)?;
        let pool = DbPool::open(cfg)?;

        if let Some(m) = month {
            let (year, mon) = parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?;
            let days = AgendaLogic::highlighted_days(&pool, &opts, year, mon)?;

            println!("Dias com agendamentos em {}:", m);
            for d in days {
                println!("  {}", d);
            }
            return Ok(());
        }

        let d = match date {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => opts.today,
        };

        let entries = AgendaLogic::day(&pool, &opts, d)?;
        if *json {
            AgendaLogic::print_json(&entries)?;
        } else {
            AgendaLogic::print(d, &entries, *group);
        }
    }

    Ok(())
}
