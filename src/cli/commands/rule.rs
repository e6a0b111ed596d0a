use crate::cli::commands::ask_confirmation;
use crate::cli::parser::{Commands, RuleAction};
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::core::rules::RuleLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::frequency::Frequency;
use crate::models::recurrence_rule::RecurrenceRule;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{parse_date, weekday_from_label, weekday_name_pt};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Rule { action } = cmd else {
        return Ok(());
    };

    match action {
        RuleAction::Add {
            day,
            time,
            pet,
            frequency,
            label,
            start,
            bath,
        } => {
            let day_idx =
                weekday_from_label(day).ok_or_else(|| AppError::InvalidWeekday(day.clone()))?;
            let freq = Frequency::from_label(frequency)
                .ok_or_else(|| AppError::InvalidFrequency(frequency.clone()))?;

            let mut rule = RecurrenceRule::new(day_idx, time, pet, freq)
                .with_label(label.as_deref().unwrap_or(""))
                .with_start_bath_number(*bath);
            if let Some(s) = start {
                let d = parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?;
                rule = rule.starting(d);
            }

            let pool = DbPool::open(cfg)?;
            let id = RuleLogic::create(&pool, cfg, rule)?;
            success(format!(
                "Rule #{} created: {} every {} at {} ({})",
                id,
                pet.trim(),
                weekday_name_pt(day_idx),
                time,
                freq.to_db_str()
            ));
        }

        RuleAction::Del { ids } => {
            let mut pool = DbPool::open(cfg)?;
            let n = if ids.len() == 1 {
                RuleLogic::delete(&pool, ids[0])?;
                1
            } else {
                RuleLogic::bulk_delete(&mut pool, ids)?
            };
            success(format!("{} rule(s) deleted.", n));
        }

        RuleAction::Clear { yes } => {
            if !*yes && !ask_confirmation("Delete ALL recurrence rules? This action is irreversible.")
            {
                info("Operation cancelled.");
                return Ok(());
            }
            let pool = DbPool::open(cfg)?;
            let n = RuleLogic::clear(&pool)?;
            success(format!("{} rule(s) deleted.", n));
        }

        RuleAction::List => {
            let pool = DbPool::open(cfg)?;
            print_rules(&RuleLogic::list(&pool)?);
        }

        RuleAction::Import { file } => {
            let mut pool = DbPool::open(cfg)?;
            let report = ImportLogic::import_file(&mut pool, cfg, file)?;

            for (line, reason) in &report.skipped {
                warning(format!("line {} skipped: {}", line, reason));
            }
            success(format!(
                "Imported {} rule(s), skipped {}.",
                report.imported,
                report.skipped.len()
            ));
        }
    }

    Ok(())
}

fn print_rules(rules: &[RecurrenceRule]) {
    if rules.is_empty() {
        println!("No recurrence rules.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 5),
        Column::new("Dia", 14),
        Column::new("Hora", 6),
        Column::new("Pet", 20),
        Column::new("Etiqueta", 12),
        Column::new("Frequência", 10),
        Column::new("Início", 11),
        Column::new("Banho", 5),
    ]);

    for r in rules {
        table.add_row(vec![
            r.id.to_string(),
            weekday_name_pt(r.day_of_week).to_string(),
            r.time.clone(),
            r.subject_name.clone(),
            r.label.clone(),
            r.frequency.to_db_str().to_string(),
            r.cycle_start_str(),
            r.start_bath_number.to_string(),
        ]);
    }

    print!("{}", table.render());
}
