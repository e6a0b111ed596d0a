//! Bulk import of recurrence rules from the shop's CSV spreadsheets.

use crate::config::Config;
use crate::core::rules::RuleLogic;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::insert_rule;
use crate::errors::{AppError, AppResult};
use crate::models::frequency::Frequency;
use crate::models::recurrence_rule::RecurrenceRule;
use crate::utils::date::{parse_date, weekday_from_label};
use serde::Deserialize;
use std::io::Read;

pub const REQUIRED_HEADERS: [&str; 4] = ["dayOfWeek", "time", "petName", "frequency"];

#[derive(Debug, Deserialize)]
struct RuleRow {
    #[serde(rename = "dayOfWeek")]
    day_of_week: String,
    time: String,
    #[serde(rename = "petName")]
    pet_name: String,
    frequency: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(rename = "startDate", default)]
    start_date: Option<String>,
    #[serde(rename = "startBathNumber", default)]
    start_bath_number: Option<String>,
}

#[derive(Debug, Default)]
pub struct ImportReport {
    pub imported: usize,
    /// (CSV line number, reason)
    pub skipped: Vec<(usize, String)>,
}

pub struct ImportLogic;

impl ImportLogic {
    pub fn import_file(pool: &mut DbPool, cfg: &Config, path: &str) -> AppResult<ImportReport> {
        let file = std::fs::File::open(path)?;
        Self::import_reader(pool, cfg, file, path)
    }

    /// Invalid rows are skipped and reported; valid rows and the audit
    /// line naming `source` are stored in a single transaction. Missing
    /// required headers reject the whole file.
    pub fn import_reader<R: Read>(
        pool: &mut DbPool,
        cfg: &Config,
        reader: R,
        source: &str,
    ) -> AppResult<ImportReport> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        let missing: Vec<&str> = REQUIRED_HEADERS
            .iter()
            .copied()
            .filter(|h| !headers.iter().any(|f| f == *h))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "CSV file must contain the headers: {} (missing: {})",
                REQUIRED_HEADERS.join(", "),
                missing.join(", ")
            )));
        }

        let mut report = ImportReport::default();
        let mut rules = Vec::new();

        for (idx, result) in rdr.deserialize::<RuleRow>().enumerate() {
            // header is line 1
            let line = idx + 2;
            let row = match result {
                Ok(r) => r,
                Err(e) => {
                    report.skipped.push((line, e.to_string()));
                    continue;
                }
            };

            match Self::row_to_rule(cfg, row) {
                Ok(rule) => rules.push(rule),
                Err(e) => report.skipped.push((line, e.to_string())),
            }
        }

        report.imported = rules.len();

        let tx = pool.conn.transaction()?;
        for rule in &rules {
            insert_rule(&tx, rule)?;
        }
        ttlog(
            &tx,
            "rule_import",
            source,
            &format!(
                "Imported {} rules, skipped {}",
                report.imported,
                report.skipped.len()
            ),
        )?;
        tx.commit()?;

        Ok(report)
    }

    fn row_to_rule(cfg: &Config, row: RuleRow) -> AppResult<RecurrenceRule> {
        let day = weekday_from_label(&row.day_of_week)
            .ok_or_else(|| AppError::InvalidWeekday(row.day_of_week.clone()))?;
        let frequency = Frequency::from_label(&row.frequency)
            .ok_or_else(|| AppError::InvalidFrequency(row.frequency.clone()))?;

        let mut rule = RecurrenceRule::new(day, &row.time, &row.pet_name, frequency)
            .with_label(row.label.as_deref().unwrap_or(""));

        if let Some(raw) = row.start_date.as_deref().filter(|s| !s.is_empty()) {
            let d = parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))?;
            rule = rule.starting(d);
        }

        if let Some(raw) = row.start_bath_number.as_deref().filter(|s| !s.is_empty()) {
            let n: u32 = raw
                .parse()
                .map_err(|_| AppError::Validation(format!("invalid startBathNumber '{}'", raw)))?;
            rule = rule.with_start_bath_number(n);
        }

        RuleLogic::validate(cfg, &mut rule)?;
        Ok(rule)
    }
}
