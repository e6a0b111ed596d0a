use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::appointment::Appointment;
use crate::models::frequency::Frequency;
use crate::models::recurrence_rule::RecurrenceRule;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use rusqlite::{Connection, Result, Row, params};

/// Fixed-width UTC form so that TEXT comparison is chronological.
pub fn ts_to_db(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

fn ts_from_db(idx: usize, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| conversion_error(idx, AppError::InvalidDate(raw.to_string())))
}

// ---------------------------------------------------------------------------
// Recurrence rules
// ---------------------------------------------------------------------------

pub fn map_rule_row(row: &Row) -> Result<RecurrenceRule> {
    let freq_str: String = row.get("frequency")?;
    let frequency = Frequency::from_db_str(&freq_str)
        .ok_or_else(|| conversion_error(0, AppError::InvalidFrequency(freq_str.clone())))?;

    let cycle_raw: Option<String> = row.get("cycle_start_date")?;
    let cycle_start_date = match cycle_raw.as_deref() {
        None | Some("") => None,
        Some(s) => Some(
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| conversion_error(0, AppError::InvalidDate(s.to_string())))?,
        ),
    };

    Ok(RecurrenceRule {
        id: row.get("id")?,
        day_of_week: row.get("day_of_week")?,
        time: row.get("time")?,
        subject_name: row.get("pet_name")?,
        label: row.get("label")?,
        frequency,
        cycle_start_date,
        start_bath_number: row.get("start_bath_number")?,
        created_at: row.get("created_at")?,
    })
}

/// Unfiltered read of every stored rule.
pub fn list_recurrence_rules(pool: &DbPool) -> AppResult<Vec<RecurrenceRule>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT * FROM recurrence_rules ORDER BY day_of_week ASC, time ASC, id ASC")?;

    let rows = stmt.query_map([], map_rule_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_rule(conn: &Connection, rule: &RecurrenceRule) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO recurrence_rules
            (day_of_week, time, pet_name, label, frequency, cycle_start_date, start_bath_number, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            rule.day_of_week,
            rule.time,
            rule.subject_name,
            rule.label,
            rule.frequency.to_db_str(),
            rule.cycle_start_date.map(|d| d.format("%Y-%m-%d").to_string()),
            rule.start_bath_number,
            rule.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Returns the number of deleted rows (0 or 1).
pub fn delete_rule(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM recurrence_rules WHERE id = ?1", [id])?)
}

pub fn delete_all_rules(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM recurrence_rules", [])?)
}

// ---------------------------------------------------------------------------
// Appointments
// ---------------------------------------------------------------------------

pub fn map_appointment_row(row: &Row) -> Result<Appointment> {
    let start_raw: String = row.get("start_time")?;
    let end_raw: String = row.get("end_time")?;

    Ok(Appointment {
        id: row.get("id")?,
        start_time: ts_from_db(0, &start_raw)?,
        end_time: ts_from_db(0, &end_raw)?,
        subject_name: row.get("pet_name")?,
        client_name: row.get("client_name")?,
        contact: row.get("contact")?,
        service_label: row.get("service")?,
        total_price_cents: row.get("total_price_cents")?,
        notes: row.get("notes")?,
        blocked: row.get::<_, i32>("blocked")? == 1,
        created_at: row.get("created_at")?,
    })
}

/// Appointments ordered by start, optionally limited to `[from, to]`.
pub fn list_appointments(
    pool: &DbPool,
    range: Option<(DateTime<Utc>, DateTime<Utc>)>,
) -> AppResult<Vec<Appointment>> {
    let mut out = Vec::new();

    match range {
        Some((from, to)) => {
            let mut stmt = pool.conn.prepare(
                "SELECT * FROM appointments
                 WHERE start_time >= ?1 AND start_time <= ?2
                 ORDER BY start_time ASC, id ASC",
            )?;
            let rows = stmt.query_map(params![ts_to_db(&from), ts_to_db(&to)], map_appointment_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = pool
                .conn
                .prepare("SELECT * FROM appointments ORDER BY start_time ASC, id ASC")?;
            let rows = stmt.query_map([], map_appointment_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }

    Ok(out)
}

pub fn insert_appointment(conn: &Connection, apt: &Appointment) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO appointments
            (start_time, end_time, pet_name, client_name, contact, service,
             total_price_cents, notes, blocked, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            ts_to_db(&apt.start_time),
            ts_to_db(&apt.end_time),
            apt.subject_name,
            apt.client_name,
            apt.contact,
            apt.service_label,
            apt.total_price_cents,
            apt.notes,
            if apt.blocked { 1 } else { 0 },
            apt.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Returns the number of deleted rows (0 or 1).
pub fn delete_appointment(conn: &Connection, id: i64) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM appointments WHERE id = ?1", [id])?)
}

// ---------------------------------------------------------------------------
// Internal log
// ---------------------------------------------------------------------------

/// (id, date, operation, target, message), oldest first.
pub fn load_log(pool: &DbPool) -> AppResult<Vec<(i64, String, String, String, String)>> {
    let mut stmt = pool.conn.prepare_cached(
        "SELECT id, date, operation, IFNULL(target, ''), message FROM log ORDER BY id ASC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get(0)?,
            row.get(1)?,
            row.get(2)?,
            row.get(3)?,
            row.get(4)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
