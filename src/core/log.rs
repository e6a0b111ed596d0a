use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI color for an audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "book" | "rule_add" => Colour::Green,
        "cancel" | "rule_del" | "rule_clear" => Colour::Red,
        "block" => Colour::Yellow,
        "rule_import" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let ansi = Regex::new(r"\x1B\[[0-9;]*[mK]")
            .map_err(|e| crate::errors::AppError::Other(e.to_string()))?;

        let entries: Vec<(i64, String, String, String, String)> = load_log(pool)?
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);
                (id, date, operation, target, message)
            })
            .collect();

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let id_w = entries
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|(_, d, ..)| d.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|(_, _, op, target, _)| op.len() + target.len() + 3)
            .max()
            .unwrap_or(10)
            .min(40);

        println!("📜 Internal log:\n");

        for (id, date, operation, target, message) in entries {
            let painted = color_for_operation(&operation).paint(operation.as_str()).to_string();
            let op_target = if target.is_empty() {
                painted
            } else {
                format!("{} ({})", painted, target)
            };

            // padding measured on the visible text only
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&ansi, &op_target).chars().count()));

            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
