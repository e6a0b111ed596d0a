use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;
use std::path::Path;

pub fn print_db_info(pool: &DbPool, db_path: &Path) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        db_path.display(),
        RESET
    );
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COUNTS
    //
    let rules: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM recurrence_rules", [], |row| row.get(0))?;
    let bookings: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM appointments WHERE blocked = 0",
        [],
        |row| row.get(0),
    )?;
    let blocks: i64 = pool.conn.query_row(
        "SELECT COUNT(*) FROM appointments WHERE blocked = 1",
        [],
        |row| row.get(0),
    )?;

    println!("{}• Recurrence rules:{} {}{}{}", CYAN, RESET, GREEN, rules, RESET);
    println!("{}• Bookings:{} {}{}{}", CYAN, RESET, GREEN, bookings, RESET);
    println!("{}• Blocked slots:{} {}{}{}", CYAN, RESET, GREEN, blocks, RESET);

    //
    // 3) APPOINTMENT RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT start_time FROM appointments ORDER BY start_time ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT start_time FROM appointments ORDER BY start_time DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt = |v: Option<String>| v.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Appointment range (UTC):{}", CYAN, RESET);
    println!("    from: {}", fmt(first));
    println!("    to:   {}", fmt(last));

    println!();
    Ok(())
}
