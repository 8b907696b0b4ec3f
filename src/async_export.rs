//! Async export support for contactpack.
//!
//! The export pipeline itself is synchronous. This module runs it on tokio's
//! blocking pool so a UI event loop never stalls on directory creation or
//! file writes.
//!
//! # Example
//!
//! ```rust,no_run
//! use contactpack::async_export::export_contacts_async;
//! use contactpack::config::ExportOptions;
//! use contactpack::Contact;
//!
//! # async fn example() {
//! let contacts = vec![Contact::friend("u1")];
//! let report = export_contacts_async(contacts, "exports", ExportOptions::new()).await;
//!
//! if !report.success {
//!     eprintln!("export failed: {}", report.error.unwrap_or_default());
//! }
//! # }
//! ```
//!
//! # Features
//!
//! This module requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! contactpack = { version = "0.1", features = ["async"] }
//! ```

use std::path::PathBuf;

use tokio::task;
use tracing::warn;

use crate::config::ExportOptions;
use crate::core::models::ExportReport;
use crate::exporter::ContactExporter;
use crate::source::ContactSource;

/// Runs [`export_contacts`](crate::exporter::export_contacts) on the blocking pool.
///
/// Like its synchronous counterpart this never fails; a panicked or cancelled
/// worker is reported as an unsuccessful [`ExportReport`].
pub async fn export_contacts_async<S>(
    source: S,
    output_dir: impl Into<PathBuf>,
    options: ExportOptions,
) -> ExportReport
where
    S: ContactSource + Send + 'static,
{
    let output_dir = output_dir.into();
    let handle = task::spawn_blocking(move || {
        ContactExporter::new(source).export_report(&output_dir, &options)
    });

    match handle.await {
        Ok(report) => report,
        Err(e) => {
            warn!(error = %e, "export task did not complete");
            ExportReport {
                success: false,
                error: Some(format!("export task failed: {}", e)),
                ..ExportReport::default()
            }
        }
    }
}
