//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage. The pure schedule core never
//! returns errors.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid day of week: {0}")]
    InvalidWeekday(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid visit number {0}: must be between 1 and 4")]
    InvalidVisitNumber(i64),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Slot {time} on {date} is not available")]
    SlotUnavailable { date: String, time: String },

    #[error("Blocking slots is disabled (legacy_blocked_appointments = false)")]
    BlockingUnsupported,

    #[error("No recurrence rule with id {0}")]
    RuleNotFound(i64),

    #[error("No appointment with id {0}")]
    AppointmentNotFound(i64),

    #[error("Access denied: '{0}' is not an administrator")]
    AccessDenied(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration: {0}")]
    ConfigLoad(String),

    #[error("Failed to save configuration: {0}")]
    ConfigSave(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
