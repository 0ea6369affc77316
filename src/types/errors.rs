//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation. One
//! variant exists per violated precondition, and every variant carries the
//! caller-supplied argument label so an unhandled failure names the offending
//! parameter directly.

use std::path::PathBuf;

use thiserror::Error;

/// Guard result type.
pub type Result<T> = std::result::Result<T, Error>;

/// One variant per violated precondition.
///
/// Numeric payloads are formatted into strings at construction so a single
/// variant covers every numeric type a check accepts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A required value was absent.
    #[error("argument '{name}' must not be none")]
    NullValue { name: String },

    /// A string or collection contained nothing usable.
    #[error("argument '{name}' must not be empty")]
    EmptyValue { name: String },

    /// A numeric value was below zero.
    #[error("argument '{name}' must not be negative, got {value}")]
    NegativeValue { name: String, value: String },

    /// A numeric value was exactly zero.
    #[error("argument '{name}' must not be zero")]
    ZeroValue { name: String },

    /// A numeric value fell outside its inclusive bounds.
    #[error("argument '{name}' must be in range [{min}, {max}], got {value}")]
    OutOfRange {
        name: String,
        value: String,
        min: String,
        max: String,
    },

    /// A path did not point at an existing file.
    #[error("file not found: '{}'", path.display())]
    FileNotFound { path: PathBuf },

    /// A path did not point at an existing directory.
    #[error("directory not found: '{}'", path.display())]
    DirectoryNotFound { path: PathBuf },
}

// Convenience constructors
impl Error {
    pub fn null_value(name: impl Into<String>) -> Self {
        Self::NullValue { name: name.into() }
    }

    pub fn empty_value(name: impl Into<String>) -> Self {
        Self::EmptyValue { name: name.into() }
    }

    pub fn negative_value(name: impl Into<String>, value: impl ToString) -> Self {
        Self::NegativeValue {
            name: name.into(),
            value: value.to_string(),
        }
    }

    pub fn zero_value(name: impl Into<String>) -> Self {
        Self::ZeroValue { name: name.into() }
    }

    pub fn out_of_range(
        name: impl Into<String>,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            name: name.into(),
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    pub fn directory_not_found(path: impl Into<PathBuf>) -> Self {
        Self::DirectoryNotFound { path: path.into() }
    }
}
