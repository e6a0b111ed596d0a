//! SQLite connection wrapper (lightweight for CLI usage).

use crate::config::Config;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        Ok(Self { conn })
    }

    /// Open the configured database, bringing its schema up to date.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        let pool = Self::new(cfg.database_path())?;
        crate::db::initialize::init_db(&pool.conn)?;
        Ok(pool)
    }

    /// In-memory database with the full schema, for library callers and tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        crate::db::initialize::init_db(&conn)?;
        Ok(Self { conn })
    }
}
