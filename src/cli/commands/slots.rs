use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::availability::available_slots;
use crate::core::projector::ProjectionOptions;
use crate::db::pool::DbPool;
use crate::db::queries::{list_appointments, list_recurrence_rules};
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_date, weekday_index, weekday_name_pt};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Slots { date } = cmd {
        let opts = ProjectionOptions::from_config(cfg)?;
        let d = match date {
            Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => opts.today,
        };

        let pool = DbPool::open(cfg)?;
        let rules = list_recurrence_rules(&pool)?;
        let appointments = list_appointments(&pool, opts.zone.days_range_utc(d, d))?;
        let free = available_slots(Some(d), &rules, &appointments, &opts);

        println!("Horários livres em {} ({}):", d, weekday_name_pt(weekday_index(d)));
        if free.is_empty() {
            println!("  nenhum horário disponível");
        } else {
            println!("  {}", free.join(" "));
        }
    }

    Ok(())
}
