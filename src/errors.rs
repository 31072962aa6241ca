//! Unified application error type.
//! All modules (blob, store, models, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Remote store
    // ---------------------------
    #[error("Store credentials not available: {0}")]
    Credentials(String),

    #[error("Error saving the information: {0}")]
    Persistence(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Vehicle {0} is not part of the fleet")]
    InvalidVehicle(u32),

    #[error("Invalid fill location: {0}")]
    InvalidFillLocation(String),

    #[error("Invalid number in column '{column}': {value}")]
    InvalidNumber { column: String, value: String },

    #[error("Missing user name: pass --user or set `operator` in the configuration")]
    MissingUser,

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
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    pub fn is_credentials(&self) -> bool {
        matches!(self, AppError::Credentials(_))
    }

    /// Collapse any failure into the two kinds a store operation may report:
    /// credentials stay as they are, everything else becomes `Persistence`.
    pub fn into_persistence(self) -> AppError {
        match self {
            AppError::Credentials(_) | AppError::Persistence(_) => self,
            other => AppError::Persistence(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Persistence(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
