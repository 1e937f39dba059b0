//! Error handling for timeslab
//!
//! The slab operations themselves are total and never fail. This error type
//! covers the surfaces around them: strict resolution parsing, the codec,
//! configuration, and the bounded range guard.

use std::io;
use thiserror::Error;

/// Errors that can occur around slab computation
#[derive(Error, Debug)]
pub enum Error {
    /// A resolution string matched neither a short code nor an enumeration name
    #[error("Unknown resolution: {0}")]
    UnknownResolution(String),

    /// A slab range would produce more identifiers than allowed
    #[error("Slab range exceeds the limit of {limit} slabs")]
    RangeTooLarge {
        limit: usize,
    },

    /// Errors related to serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Errors related to I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Errors related to configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for timeslab operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new unknown resolution error
    pub fn unknown_resolution(value: impl Into<String>) -> Self {
        Self::UnknownResolution(value.into())
    }

    /// Create a new range too large error
    pub fn range_too_large(limit: usize) -> Self {
        Self::RangeTooLarge { limit }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization(message.into())
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an unknown resolution error
    pub fn is_unknown_resolution(&self) -> bool {
        matches!(self, Self::UnknownResolution(_))
    }

    /// Check if this is a range too large error
    pub fn is_range_too_large(&self) -> bool {
        matches!(self, Self::RangeTooLarge { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }

    /// Check if this is an I/O error
    pub fn is_io_error(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Get a user-friendly suggestion for resolving the error
    pub fn suggestion(&self) -> Option<String> {
        match self {
            Self::UnknownResolution(_) => Some(
                "Use a short code such as mi5, h, d, w, m3, y or a name such as HOUR2".to_string(),
            ),
            Self::RangeTooLarge { .. } => {
                Some("Narrow the interval or pick a coarser resolution".to_string())
            }
            Self::Io(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                Some("The input ended before a full resolution code was read".to_string())
            }
            _ => None,
        }
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Self::Serialization(format!("Bincode error: {}", err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(format!("JSON error: {}", err))
    }
}
