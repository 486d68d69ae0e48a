//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
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
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid week: {0} (expected a number between 1 and 5)")]
    InvalidWeek(String),

    #[error("Invalid lunch break: {0}")]
    InvalidLunchBreak(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("An entry for {0} already exists. Please choose a different date.")]
    DuplicateDate(NaiveDate),

    #[error("No logbook entry with id {0}")]
    EntryNotFound(i64),

    #[error("Please complete your profile first")]
    MissingProfile,

    #[error("No open time-in record found")]
    NoOpenAttendance,

    #[error("Already clocked in since {0}")]
    AlreadyClockedIn(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// Stable failure code reported alongside the message.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Io(_) => "io",
            AppError::Db(_) => "db",
            AppError::Migration(_) => "migration",
            AppError::Json(_) => "serialization",
            AppError::InvalidDate(_) => "invalid_date",
            AppError::InvalidTime(_) => "invalid_time",
            AppError::InvalidWeek(_) => "invalid_week",
            AppError::InvalidLunchBreak(_) => "invalid_lunch_break",
            AppError::MissingField(_) => "missing_field",
            AppError::DuplicateDate(_) => "duplicate_date",
            AppError::EntryNotFound(_) => "entry_not_found",
            AppError::MissingProfile => "missing_profile",
            AppError::NoOpenAttendance => "no_open_attendance",
            AppError::AlreadyClockedIn(_) => "already_clocked_in",
            AppError::Config(_) | AppError::ConfigParse(_) => "config",
            AppError::Export(_) => "export",
        }
    }

    /// True for errors caused by user input rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidTime(_)
                | AppError::InvalidWeek(_)
                | AppError::InvalidLunchBreak(_)
                | AppError::MissingField(_)
                | AppError::DuplicateDate(_)
                | AppError::EntryNotFound(_)
                | AppError::MissingProfile
                | AppError::NoOpenAttendance
                | AppError::AlreadyClockedIn(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
