//! # Error Types
//!
//! This module defines error types used throughout the advisory-receipt library.
//!
//! Rendering itself never fails: decoding problems collapse to defaults
//! inside [`crate::query`]. These errors only come from the outer surfaces
//! (the HTTP listener, the print command, file output).

use thiserror::Error;

/// Main error type for advisory-receipt operations
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Transport-level errors (bind, serve)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The print action could not be run or reported failure
    #[error("Print error: {0}")]
    Print(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
