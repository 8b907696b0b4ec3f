//! Unified error types for contactpack.
//!
//! This module provides a single [`ContactpackError`] enum that covers all error
//! cases in the library. This design follows the pattern used by popular crates
//! like `reqwest`, `serde_json`, and `csv`.
//!
//! # Error Kinds
//!
//! | Variant | When |
//! |---------|------|
//! | [`DataUnavailable`](ContactpackError::DataUnavailable) | The contact source reported a failure |
//! | [`NoMatchingContacts`](ContactpackError::NoMatchingContacts) | Filters left nothing to export |
//! | [`UnsupportedFormat`](ContactpackError::UnsupportedFormat) | Unknown `format` value |
//! | [`Io`](ContactpackError::Io) | Directory creation or file write failed |
//!
//! None of these are fatal: the exporter turns them into an
//! [`ExportReport`](crate::core::models::ExportReport) so a UI can show the
//! message and let the user retry.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Message used when the contact source fails without saying why.
pub const DEFAULT_FETCH_ERROR: &str = "failed to fetch contacts";

/// A specialized [`Result`] type for contactpack operations.
///
/// # Example
///
/// ```rust
/// use contactpack::error::Result;
/// use contactpack::Contact;
///
/// fn my_function() -> Result<Vec<Contact>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, ContactpackError>;

/// The error type for all contactpack operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ContactpackError {
    /// The upstream contact source reported a failure.
    #[error("Contacts unavailable: {message}")]
    DataUnavailable {
        /// Message reported by the source, or [`DEFAULT_FETCH_ERROR`]
        message: String,
    },

    /// Type filters and the username allow-list left no contacts.
    #[error("No contacts match the selected filters")]
    NoMatchingContacts,

    /// The requested export format is not one of json, csv, vcf.
    #[error("Unsupported export format '{format}'. Expected one of: json, csv, vcf")]
    UnsupportedFormat {
        /// The format value as supplied by the caller
        format: String,
    },

    /// An I/O error occurred.
    ///
    /// This typically happens when:
    /// - The output directory cannot be created
    /// - Permission denied
    /// - Disk is full (when writing output)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON parsing/serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// An export options file could not be read or parsed.
    #[error("Invalid options file {}: {source}", path.display())]
    InvalidConfig {
        /// Path of the options file
        path: PathBuf,
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}

impl From<std::string::FromUtf8Error> for ContactpackError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ContactpackError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl ContactpackError {
    /// Creates a data-unavailable error.
    ///
    /// An empty message falls back to [`DEFAULT_FETCH_ERROR`].
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        let message = message.into();
        ContactpackError::DataUnavailable {
            message: if message.trim().is_empty() {
                DEFAULT_FETCH_ERROR.to_string()
            } else {
                message
            },
        }
    }

    /// Creates an unsupported format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        ContactpackError::UnsupportedFormat {
            format: format.into(),
        }
    }

    /// Creates an invalid options file error.
    pub fn invalid_config(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        ContactpackError::InvalidConfig {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ContactpackError::Io(_))
    }

    /// Returns `true` if the contact source failed.
    pub fn is_data_unavailable(&self) -> bool {
        matches!(self, ContactpackError::DataUnavailable { .. })
    }

    /// Returns `true` if filtering produced an empty set.
    pub fn is_no_matching_contacts(&self) -> bool {
        matches!(self, ContactpackError::NoMatchingContacts)
    }

    /// Returns `true` if the export format was not recognized.
    pub fn is_unsupported_format(&self) -> bool {
        matches!(self, ContactpackError::UnsupportedFormat { .. })
    }
}
