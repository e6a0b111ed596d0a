use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_all_rules, delete_rule, insert_rule, list_recurrence_rules};
use crate::errors::{AppError, AppResult};
use crate::models::recurrence_rule::RecurrenceRule;
use crate::utils::time::{format_hhmm, minutes_of_day, require_time};

/// Create / delete operations on recurrence rules. Rules are never edited
/// in place: replace them by deleting and creating again.
pub struct RuleLogic;

impl RuleLogic {
    /// Normalize and check a rule before it is stored.
    pub fn validate(cfg: &Config, rule: &mut RecurrenceRule) -> AppResult<()> {
        if rule.day_of_week < cfg.first_rule_day() || rule.day_of_week > 6 {
            return Err(AppError::InvalidWeekday(format!(
                "{} (allowed: {}..=6)",
                rule.day_of_week,
                cfg.first_rule_day()
            )));
        }

        // accept "9:00", store "09:00"
        let t = require_time(&rule.time)?;
        rule.time = format_hhmm(minutes_of_day(t));

        let grid = cfg.admin_grid()?;
        if !grid.contains(&rule.time) {
            return Err(AppError::InvalidTime(format!(
                "{} is not a slot of the {}–{} grid",
                rule.time, cfg.admin_grid_start, cfg.admin_grid_end
            )));
        }

        rule.subject_name = rule.subject_name.trim().to_string();
        if rule.subject_name.chars().count() < 2 {
            return Err(AppError::Validation(
                "pet name must have at least 2 characters".into(),
            ));
        }

        if !(1..=4).contains(&rule.start_bath_number) {
            return Err(AppError::InvalidVisitNumber(i64::from(
                rule.start_bath_number,
            )));
        }

        if rule.label.trim().is_empty() {
            rule.label = cfg.default_label.clone();
        }

        Ok(())
    }

    pub fn create(pool: &DbPool, cfg: &Config, mut rule: RecurrenceRule) -> AppResult<i64> {
        Self::validate(cfg, &mut rule)?;

        let id = insert_rule(&pool.conn, &rule)?;
        ttlog(
            &pool.conn,
            "rule_add",
            &id.to_string(),
            &format!(
                "{} day={} {} {}",
                rule.subject_name,
                rule.day_of_week,
                rule.time,
                rule.frequency.to_db_str()
            ),
        )?;

        Ok(id)
    }

    pub fn delete(pool: &DbPool, id: i64) -> AppResult<()> {
        if delete_rule(&pool.conn, id)? == 0 {
            return Err(AppError::RuleNotFound(id));
        }
        ttlog(&pool.conn, "rule_del", &id.to_string(), "Recurrence rule deleted")?;
        Ok(())
    }

    /// Delete several rules in one transaction; unknown ids abort the whole batch.
    pub fn bulk_delete(pool: &mut DbPool, ids: &[i64]) -> AppResult<usize> {
        let tx = pool.conn.transaction()?;

        for id in ids {
            if delete_rule(&tx, *id)? == 0 {
                return Err(AppError::RuleNotFound(*id));
            }
        }

        let joined = ids
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(",");
        ttlog(&tx, "rule_del", &joined, "Recurrence rules deleted in bulk")?;

        tx.commit()?;
        Ok(ids.len())
    }

    pub fn clear(pool: &DbPool) -> AppResult<usize> {
        let n = delete_all_rules(&pool.conn)?;
        ttlog(
            &pool.conn,
            "rule_clear",
            "",
            &format!("Deleted all {} recurrence rules", n),
        )?;
        Ok(n)
    }

    pub fn list(pool: &DbPool) -> AppResult<Vec<RecurrenceRule>> {
        list_recurrence_rules(pool)
    }
}
