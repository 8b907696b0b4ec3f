//! # Contactpack
//!
//! A Rust library for exporting contacts from a chat archive (friends, group
//! chats and official accounts) to flat files.
//!
//! ## Overview
//!
//! Contactpack takes the contact list reported by a chat data layer, filters
//! it, and writes one of three formats:
//! - **JSON** — `{exportedAt, count, contacts}` with five fields per contact
//! - **CSV** — UTF-8 BOM, Chinese column labels, one quoted row per contact
//! - **VCF** — vCard 3.0 cards for friends only
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use contactpack::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let source = JsonFileSource::new("contacts.json");
//!
//!     let options = ExportOptions::new()
//!         .with_format(ExportFormat::Csv)
//!         .with_contact_types(ContactTypes::all().with_officials(false));
//!
//!     let summary = ContactExporter::new(source).export("exports", &options)?;
//!     println!("wrote {} contacts to {}", summary.count, summary.output_path.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`contact`] — [`Contact`] and [`ContactKind`]
//! - [`source`] — [`ContactSource`](source::ContactSource) trait and implementations
//! - [`config`] — [`ExportOptions`](config::ExportOptions), [`ContactTypes`](config::ContactTypes)
//! - [`format`] — [`ExportFormat`](format::ExportFormat)
//! - [`core`] — Filtering, result types and format writers
//!   - [`core::filter`] — [`FilterConfig`](core::FilterConfig), [`apply_filters`](core::apply_filters)
//!   - [`core::models`] — [`ExportSummary`](core::ExportSummary), [`ExportReport`](core::ExportReport)
//!   - [`core::output`] — `to_json`, `to_csv`, `to_vcf` and their `write_*` counterparts
//! - [`exporter`] — The export pipeline ([`ContactExporter`](exporter::ContactExporter))
//! - `async_export` — Async wrapper (feature `async`)
//! - `cli` — CLI types (feature `cli`)
//! - [`error`] — Unified error types ([`ContactpackError`], [`Result`])
//! - [`prelude`] — Convenient re-exports

#[cfg(feature = "async")]
pub mod async_export;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod contact;
pub mod core;
pub mod error;
pub mod exporter;
pub mod format;
pub mod source;

// Re-export the main types at the crate root for convenience
pub use contact::{Contact, ContactKind};
pub use error::{ContactpackError, Result};

/// Convenient re-exports for common usage.
///
/// Import everything you need with a single line:
///
/// ```rust
/// use contactpack::prelude::*;
/// ```
pub mod prelude {
    // Core contact types
    pub use crate::{Contact, ContactKind};

    // Error types
    pub use crate::error::{ContactpackError, Result};

    // Options
    pub use crate::config::{ContactTypes, ExportOptions};
    pub use crate::format::ExportFormat;

    // Sources
    pub use crate::source::{ContactSource, ContactsResponse, JsonFileSource, StaticSource};

    // Filtering and results
    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::{ExportReport, ExportSummary};

    // Pipeline
    pub use crate::exporter::{ContactExporter, export_contacts};

    #[cfg(feature = "async")]
    pub use crate::async_export::export_contacts_async;
}
