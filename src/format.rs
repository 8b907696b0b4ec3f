//! Export format types for the contactpack library.
//!
//! This module provides library-first format types that don't depend on CLI
//! frameworks.
//!
//! # Example
//!
//! ```rust
//! use contactpack::format::ExportFormat;
//!
//! let format: ExportFormat = "vcf".parse()?;
//! assert_eq!(format, ExportFormat::Vcf);
//! assert_eq!(format.extension(), "vcf");
//! assert_eq!(format.file_name("2024-06-15T12-30-00"), "contacts_2024-06-15T12-30-00.vcf");
//! # Ok::<(), contactpack::ContactpackError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ContactpackError;

/// Output format for contact exports.
///
/// - [`Json`](ExportFormat::Json) - Pretty-printed object with metadata
/// - [`Csv`](ExportFormat::Csv) - Spreadsheet-friendly, UTF-8 BOM prefixed
/// - [`Vcf`](ExportFormat::Vcf) - vCard 3.0, personal contacts only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Vcf,
}

impl ExportFormat {
    /// Returns the file extension for this format (without dot).
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
            ExportFormat::Vcf => "vcf",
        }
    }

    /// Returns all supported format names.
    pub fn all_names() -> &'static [&'static str] {
        &["json", "csv", "vcf"]
    }

    /// Returns all available formats.
    pub fn all() -> &'static [ExportFormat] {
        &[ExportFormat::Json, ExportFormat::Csv, ExportFormat::Vcf]
    }

    /// Returns the MIME type for this format.
    ///
    /// ```rust
    /// use contactpack::format::ExportFormat;
    ///
    /// assert_eq!(ExportFormat::Vcf.mime_type(), "text/vcard");
    /// ```
    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Json => "application/json",
            ExportFormat::Csv => "text/csv",
            ExportFormat::Vcf => "text/vcard",
        }
    }

    /// Builds the export file name `contacts_<stamp>.<ext>`.
    pub fn file_name(&self, stamp: &str) -> String {
        format!("contacts_{}.{}", stamp, self.extension())
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Json => write!(f, "JSON"),
            ExportFormat::Csv => write!(f, "CSV"),
            ExportFormat::Vcf => write!(f, "vCard"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ContactpackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            "vcf" | "vcard" => Ok(ExportFormat::Vcf),
            _ => Err(ContactpackError::unsupported_format(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension() {
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Vcf.extension(), "vcf");
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!(" csv ".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("vCard".parse::<ExportFormat>().unwrap(), ExportFormat::Vcf);
    }

    #[test]
    fn test_from_str_unsupported() {
        let err = "xml".parse::<ExportFormat>().unwrap_err();
        assert!(err.is_unsupported_format());
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_format_serde() {
        let json = serde_json::to_string(&ExportFormat::Vcf).unwrap();
        assert_eq!(json, "\"vcf\"");
        for format in ExportFormat::all() {
            assert!(!format.to_string().is_empty());
        }
    }
}
