use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{applied_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Database maintenance. Opening the pool already upgrades the schema,
/// `--migrate` reruns the engine and reports what is recorded.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Db {
        migrate,
        check,
        vacuum,
        info: show_info,
    } = cmd
    else {
        return Ok(());
    };

    let pool = DbPool::open(cfg)?;

    if *migrate {
        run_pending_migrations(&pool.conn)?;
        for (version, date) in applied_migrations(&pool.conn)? {
            info(format!("{}  applied {}", version, date));
        }
        success("Schema is up to date.");
    }

    if *show_info {
        stats::print_db_info(&pool, &cfg.database_path())?;
    }

    if *check {
        let integrity: String = pool
            .conn
            .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;
        if integrity != "ok" {
            return Err(AppError::Migration(format!(
                "integrity check failed: {}",
                integrity
            )));
        }
        success("Integrity check passed.");
    }

    if *vacuum {
        pool.conn.execute_batch("VACUUM;")?;
        success("Vacuum completed.");
    }

    Ok(())
}
