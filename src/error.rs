// src/error.rs

//! Error types for the recipe catalog

use crate::catalog::FieldErrors;
use thiserror::Error;

/// Errors produced by the store and the catalog operations
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite failure
    #[error("Database error: {0}")]
    DatabaseError(#[from] rusqlite::Error),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Incoming record failed validation
    #[error("Validation failed: {0}")]
    ValidationError(FieldErrors),

    /// Filesystem failure
    #[error("IO error: {0}")]
    IoError(String),

    /// Database could not be prepared
    #[error("Initialization error: {0}")]
    InitError(String),

    /// A stored value broke an internal invariant
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Result type alias using the catalog error
pub type Result<T> = std::result::Result<T, Error>;
