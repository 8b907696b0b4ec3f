//! The contact export pipeline.
//!
//! [`ContactExporter`] fetches contacts from a [`ContactSource`], filters them
//! by kind and allow-list, and writes one file named
//! `contacts_<YYYY-MM-DDTHH-MM-SS>.<ext>` into the output directory.
//!
//! # Pipeline
//!
//! 1. Fetch contacts (`DataUnavailable` on failure)
//! 2. Keep kinds enabled in `contactTypes`
//! 3. Intersect with `selectedUsernames` when non-empty
//! 4. Stop with `NoMatchingContacts` if nothing is left (no file is created)
//! 5. Create the output directory and any missing parents
//! 6. Stamp the file name with the local time
//! 7. Resolve the format (`UnsupportedFormat`) and render the whole file in memory
//! 8. Write it in a single call
//!
//! # Example
//!
//! ```rust,no_run
//! use contactpack::config::{ContactTypes, ExportOptions};
//! use contactpack::exporter::ContactExporter;
//! use contactpack::format::ExportFormat;
//! use contactpack::Contact;
//!
//! let contacts = vec![
//!     Contact::friend("u1").with_display_name("Alice"),
//!     Contact::group("g1").with_display_name("Team"),
//! ];
//!
//! let options = ExportOptions::new()
//!     .with_format(ExportFormat::Vcf)
//!     .with_contact_types(ContactTypes::all().with_officials(false));
//!
//! let report = ContactExporter::new(contacts).export_report("exports", &options);
//! assert!(report.success);
//! assert_eq!(report.success_count, Some(2));
//! ```

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};
use tracing::{debug, info, warn};

use crate::config::ExportOptions;
use crate::contact::Contact;
use crate::core::filter::{FilterConfig, apply_filters};
use crate::core::models::{ExportReport, ExportSummary};
#[allow(unused_imports)]
use crate::core::output;
use crate::error::{ContactpackError, Result};
use crate::format::ExportFormat;
use crate::source::ContactSource;

/// Time format used in export file names. Colons are not allowed on Windows.
pub const FILE_STAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// Upper bound on `_N` suffixes tried when the stamped name is taken.
const MAX_NAME_ATTEMPTS: usize = 1000;

/// Formats a clock reading for use in an export file name.
///
/// ```
/// use chrono::{Local, TimeZone};
/// use contactpack::exporter::file_stamp;
///
/// let now = Local.with_ymd_and_hms(2024, 6, 15, 9, 5, 7).unwrap();
/// assert_eq!(file_stamp(&now), "2024-06-15T09-05-07");
/// ```
pub fn file_stamp(now: &DateTime<Local>) -> String {
    now.format(FILE_STAMP_FORMAT).to_string()
}

/// Exports contacts from a [`ContactSource`] to flat files.
#[derive(Debug, Clone)]
pub struct ContactExporter<S> {
    source: S,
}

impl<S: ContactSource> ContactExporter<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Runs the export using the current local time.
    pub fn export(
        &self,
        output_dir: impl AsRef<Path>,
        options: &ExportOptions,
    ) -> Result<ExportSummary> {
        self.export_at(output_dir, options, Local::now())
    }

    /// Runs the export with an explicit clock reading.
    ///
    /// `now` is used both for the file name and for the JSON `exportedAt` field.
    pub fn export_at(
        &self,
        output_dir: impl AsRef<Path>,
        options: &ExportOptions,
        now: DateTime<Local>,
    ) -> Result<ExportSummary> {
        let output_dir = output_dir.as_ref();
        info!(dir = %output_dir.display(), format = %options.format, "exporting contacts");

        let contacts = self.source.get_contacts().into_contacts()?;
        let fetched = contacts.len();

        let filter = FilterConfig::from_options(options);
        let contacts = apply_filters(contacts, &filter);
        debug!(
            fetched,
            kept = contacts.len(),
            allow_list = filter.usernames.len(),
            "filtered contacts"
        );

        if contacts.is_empty() {
            warn!(fetched, "no contacts matched the export filters");
            return Err(ContactpackError::NoMatchingContacts);
        }

        fs::create_dir_all(output_dir)?;

        let stamp = file_stamp(&now);
        let format = options.export_format()?;
        let content = render(format, &contacts, now.with_timezone(&Utc))?;
        let output_path = write_unique(output_dir, format, &stamp, content.as_bytes())?;

        info!(
            count = contacts.len(),
            path = %output_path.display(),
            "wrote {} export",
            format
        );

        Ok(ExportSummary {
            count: contacts.len(),
            output_path,
            format,
        })
    }

    /// Runs the export and folds any error into an [`ExportReport`].
    pub fn export_report(
        &self,
        output_dir: impl AsRef<Path>,
        options: &ExportOptions,
    ) -> ExportReport {
        let result = self.export(output_dir, options);
        if let Err(ref e) = result {
            warn!(error = %e, "contact export failed");
        }
        ExportReport::from_result(result)
    }
}

/// One-shot export that never fails: errors are reported in the returned value.
pub fn export_contacts<S: ContactSource>(
    source: S,
    output_dir: impl AsRef<Path>,
    options: &ExportOptions,
) -> ExportReport {
    ContactExporter::new(source).export_report(output_dir, options)
}

/// Renders the complete file content for `format`.
#[allow(unused_variables)]
fn render(format: ExportFormat, contacts: &[Contact], now: DateTime<Utc>) -> Result<String> {
    match format {
        #[cfg(feature = "json-output")]
        ExportFormat::Json => output::to_json_at(contacts, now),
        #[cfg(feature = "csv-output")]
        ExportFormat::Csv => output::to_csv(contacts),
        #[cfg(feature = "vcf-output")]
        ExportFormat::Vcf => Ok(output::to_vcf(contacts)),
        #[allow(unreachable_patterns)]
        other => Err(ContactpackError::unsupported_format(other.extension())),
    }
}

/// Creates a fresh file for the export and writes `content` into it.
///
/// If `contacts_<stamp>.<ext>` already exists, `_1`, `_2`, ... is appended to
/// the stamp until an unused name is found.
fn write_unique(
    dir: &Path,
    format: ExportFormat,
    stamp: &str,
    content: &[u8],
) -> Result<PathBuf> {
    for attempt in 0..MAX_NAME_ATTEMPTS {
        let name = if attempt == 0 {
            format.file_name(stamp)
        } else {
            format.file_name(&format!("{}_{}", stamp, attempt))
        };
        let path = dir.join(name);

        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(file) => {
                write_or_remove(file, &path, content)?;
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %path.display(), "export file exists, trying next name");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(io::Error::new(
        io::ErrorKind::AlreadyExists,
        format!("no free file name for contacts_{} in {}", stamp, dir.display()),
    )
    .into())
}

/// Writes `content` to the freshly created file at `path`, removing the file
/// if the write fails so no truncated export is left behind.
fn write_or_remove<W: Write>(mut file: W, path: &Path, content: &[u8]) -> Result<()> {
    let result = file.write_all(content).and_then(|()| file.flush());
    drop(file);

    if let Err(e) = result {
        if let Err(cleanup) = fs::remove_file(path) {
            debug!(path = %path.display(), error = %cleanup, "could not remove partial export");
        }
        return Err(e.into());
    }
    Ok(())
}
