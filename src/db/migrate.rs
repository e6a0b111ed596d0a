use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

const RULES_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS recurrence_rules (
        id                INTEGER PRIMARY KEY AUTOINCREMENT,
        day_of_week       INTEGER NOT NULL CHECK(day_of_week BETWEEN 0 AND 6),
        time              TEXT NOT NULL,
        pet_name          TEXT NOT NULL,
        label             TEXT NOT NULL DEFAULT 'Clubinho',
        frequency         TEXT NOT NULL CHECK(frequency IN ('weekly','bi-weekly','monthly')),
        cycle_start_date  TEXT,
        start_bath_number INTEGER NOT NULL DEFAULT 1 CHECK(start_bath_number BETWEEN 1 AND 4),
        created_at        TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_rules_day_time ON recurrence_rules(day_of_week, time);
"#;

const APPOINTMENTS_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS appointments (
        id                INTEGER PRIMARY KEY AUTOINCREMENT,
        start_time        TEXT NOT NULL,
        end_time          TEXT NOT NULL,
        pet_name          TEXT NOT NULL,
        client_name       TEXT,
        contact           TEXT NOT NULL DEFAULT '',
        service           TEXT NOT NULL DEFAULT '',
        total_price_cents INTEGER NOT NULL DEFAULT 0,
        notes             TEXT NOT NULL DEFAULT '',
        blocked           INTEGER NOT NULL DEFAULT 0,
        created_at        TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_appointments_start ON appointments(start_time);
"#;

/// Ensure that the `log` table exists. It also records applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// The CREATE statement stored by SQLite for `table`.
fn table_sql(conn: &Connection, table: &str) -> Result<String> {
    let sql: Option<String> = conn
        .query_row(
            "SELECT sql FROM sqlite_master WHERE type='table' AND name=?1",
            [table],
            |row| row.get(0),
        )
        .optional()?;
    Ok(sql.unwrap_or_default())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Early rule tables only knew weekly / bi-weekly and had no cycle anchor.
/// Rebuild them with the monthly frequency, `cycle_start_date` and
/// `start_bath_number` (defaulting to visit 1).
fn migrate_rules_cycle_columns(conn: &Connection) -> Result<()> {
    let version = "20250310_0002_rules_cycle_and_monthly";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    let has_cycle_start = column_exists(conn, "recurrence_rules", "cycle_start_date")?;
    let has_bath_number = column_exists(conn, "recurrence_rules", "start_bath_number")?;
    let has_monthly = table_sql(conn, "recurrence_rules")?.contains("monthly");

    if has_cycle_start && has_bath_number && has_monthly {
        mark_applied(conn, version, "recurrence_rules already up to date")?;
        return Ok(());
    }

    warning("Upgrading recurrence_rules table (monthly frequency, cycle start)...");

    let cycle_expr = if has_cycle_start { "cycle_start_date" } else { "NULL" };
    let bath_expr = if has_bath_number {
        "start_bath_number"
    } else {
        "1"
    };

    conn.execute_batch(&format!(
        r#"
        BEGIN;

        ALTER TABLE recurrence_rules RENAME TO recurrence_rules_old;
        DROP INDEX IF EXISTS idx_rules_day_time;

        {RULES_TABLE_SQL}

        INSERT INTO recurrence_rules
            (id, day_of_week, time, pet_name, label, frequency,
             cycle_start_date, start_bath_number, created_at)
        SELECT id, day_of_week, time, pet_name, label, frequency,
               {cycle_expr}, {bath_expr}, created_at
        FROM recurrence_rules_old;

        DROP TABLE recurrence_rules_old;

        COMMIT;
        "#
    ))?;

    mark_applied(
        conn,
        version,
        "Rebuilt recurrence_rules with monthly frequency and cycle columns",
    )?;
    success(format!("Migration applied: {}", version));

    Ok(())
}

/// Appointment-level blocks arrived after the first appointments table.
fn migrate_appointments_blocked_flag(conn: &Connection) -> Result<()> {
    let version = "20250402_0003_appointments_blocked_flag";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !column_exists(conn, "appointments", "blocked")? {
        conn.execute(
            "ALTER TABLE appointments ADD COLUMN blocked INTEGER NOT NULL DEFAULT 0;",
            [],
        )?;
        success(format!(
            "Migration applied: {} → added 'blocked' to appointments table",
            version
        ));
    }

    mark_applied(conn, version, "Added blocked flag to appointments")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Create or upgrade the rules table
    if table_exists(conn, "recurrence_rules")? {
        migrate_rules_cycle_columns(conn)?;
    } else {
        conn.execute_batch(RULES_TABLE_SQL)?;
    }

    // 3) Create or upgrade the appointments table
    if table_exists(conn, "appointments")? {
        migrate_appointments_blocked_flag(conn)?;
    } else {
        conn.execute_batch(APPOINTMENTS_TABLE_SQL)?;
    }

    Ok(())
}

/// (version, date) of every recorded schema upgrade, oldest first.
pub fn applied_migrations(conn: &Connection) -> Result<Vec<(String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT target, date FROM log
         WHERE operation = 'migration_applied'
         ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    rows.collect()
}
