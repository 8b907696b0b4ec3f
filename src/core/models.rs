//! Result types returned by an export.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::format::ExportFormat;

/// Outcome of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Number of contacts that passed filtering.
    pub count: usize,
    /// File that was written.
    pub output_path: PathBuf,
    pub format: ExportFormat,
}

/// Uniform `{success, successCount?, error?}` result for UI callers.
///
/// Every failure kind collapses into `success: false` plus a display message,
/// so the caller only has to show the message and offer a retry.
///
/// ```
/// use contactpack::core::models::ExportReport;
/// use contactpack::ContactpackError;
///
/// let report = ExportReport::from_result(Err(ContactpackError::NoMatchingContacts));
/// assert!(!report.success);
/// assert!(report.error.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportReport {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_count: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExportReport {
    pub fn from_result(result: Result<ExportSummary>) -> Self {
        match result {
            Ok(summary) => Self {
                success: true,
                success_count: Some(summary.count),
                output_path: Some(summary.output_path),
                error: None,
            },
            Err(e) => Self {
                success: false,
                success_count: None,
                output_path: None,
                error: Some(e.to_string()),
            },
        }
    }
}

impl From<Result<ExportSummary>> for ExportReport {
    fn from(result: Result<ExportSummary>) -> Self {
        Self::from_result(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ContactpackError;

    #[test]
    fn test_report_success_serialization() {
        let report = ExportReport::from_result(Ok(ExportSummary {
            count: 3,
            output_path: PathBuf::from("out/contacts.json"),
            format: ExportFormat::Json,
        }));

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["successCount"], 3);
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_report_failure_message() {
        let report: ExportReport = Err(ContactpackError::unsupported_format("xml")).into();
        assert!(!report.success);
        assert!(report.success_count.is_none());
        assert!(report.error.unwrap().contains("xml"));
    }
}
