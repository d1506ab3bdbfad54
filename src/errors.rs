//! Unified application error type.
//! Every stage of the pipeline (config, ics, core, export) returns AppError,
//! and the first error stops the whole run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Cannot open calendar file '{}': {}", .path.display(), .source)]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot create output file '{}': {}", .path.display(), .source)]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid calendar: {0}")]
    CalendarParse(String),

    #[error("Event '{summary}' has no {property} property")]
    MissingTimestamp {
        property: &'static str,
        summary: String,
    },

    #[error("Invalid timestamp '{value}': {reason}")]
    InvalidTimestamp { value: String, reason: String },

    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("Write error: {0}")]
    Write(#[from] csv::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type AppResult<T> = Result<T, AppError>;
