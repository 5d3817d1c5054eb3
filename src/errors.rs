//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
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

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Business rules
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("Could not allocate a unique verification code after {0} attempts")]
    CodeExhausted(u32),

    #[error("No acting user: pass --user or set `user` in the configuration file")]
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
    /// Message safe to show to the end user.
    ///
    /// Business-rule failures are reported verbatim so the input can be
    /// corrected; infrastructure failures collapse to a generic text.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Db(_)
            | AppError::Io(_)
            | AppError::Json(_)
            | AppError::Csv(_)
            | AppError::Yaml(_)
            | AppError::Migration(_)
            | AppError::CodeExhausted(_)
            | AppError::Other(_) => {
                "internal error, see log for details (set RVOLUNTEER_LOG=debug)".to_string()
            }
            other => other.to_string(),
        }
    }

    /// True for errors caused by the caller's input or identity.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_)
                | AppError::InvalidDate(_)
                | AppError::NotFound(_)
                | AppError::Forbidden(_)
                | AppError::MissingUser
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
