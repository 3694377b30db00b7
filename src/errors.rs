//! Unified application error type.
//! Journal, queries, config and CLI handlers all return AppError so that
//! `main` has a single place to report failures.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot create log directory {path}: {source}")]
    CacheDir { path: String, source: io::Error },

    // ---------------------------
    // Journal decoding
    // ---------------------------
    #[error("Bad entry at line {line}: {reason}")]
    BadEntry { line: usize, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid week (expected YYYY-Www): {0}")]
    InvalidWeek(String),

    #[error("Invalid activity name: {0:?}")]
    InvalidActivity(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No such activity: {0}")]
    ActivityNotFound(String),

    #[error("No activities yet, add one with `clockon add <NAME>`")]
    NoActivities,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Output
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
