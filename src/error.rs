//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, HalfrotError>`](HalfrotError).
//!
//! The character transform itself is total and never fails: letters rotate,
//! everything else passes through. Errors only arise in the collaborator
//! I/O layer (reading sources, writing destinations).

use thiserror::Error;

/// The error type for all halfrot operations.
#[derive(Error, Debug)]
pub enum HalfrotError {
    /// I/O error occurred during stream or file operations.
    ///
    /// This variant wraps [`std::io::Error`] and is automatically created
    /// when I/O operations fail (e.g., file not found, read/write errors).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
