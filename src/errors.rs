//! Unified application error type.
//! All modules (store, core, cli, config) return AppError to keep the error
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
    // Storage
    // ---------------------------
    /// The workout file could not be rewritten. The previous snapshot is
    /// still on disk.
    #[error("Failed to save workouts to {path}: {source}")]
    StorageWrite {
        path: String,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Choose a workout type")]
    MissingKind,

    #[error("Specify whether the workout happened (--done or --skipped)")]
    MissingStatus,

    #[error("Unknown workout type '{0}'. Run `rworkout kinds` to see the tracked types")]
    InvalidKind(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
