//! Custom error types for fin
//!
//! This module defines the error hierarchy for the crate using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for fin operations
#[derive(Error, Debug)]
pub enum FinError {
    /// The ledger document failed to parse or validate
    #[error("Decode error: {0}")]
    Decode(String),

    /// A view selector that is not holdings, incomes or expenses
    #[error("Unknown view: {0:?} (expected holdings, incomes or expenses)")]
    UnknownView(String),

    /// An output encoding name that is not recognized
    #[error("Unknown format: {0:?} (expected plain, markdown or csv)")]
    UnknownFormat(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },
}

impl FinError {
    /// Create a "not found" error for a stored ledger
    pub fn ledger_not_found(currency: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Ledger",
            identifier: currency.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a decode error
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

impl From<std::io::Error> for FinError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for fin operations
pub type FinResult<T> = Result<T, FinError>;
