//! Core processing logic for contactpack.
//!
//! This module contains:
//! - [`models`] - Export result types
//! - [`filter`] - Contact filtering by kind and username
//! - [`output`] - Format writers (JSON, CSV, VCF)
//!
//! # Quick Start
//!
//! ```rust
//! # #[cfg(all(feature = "csv-output", feature = "json-output", feature = "vcf-output"))]
//! # fn example() {
//! use contactpack::core::{
//!     Contact, FilterConfig, ExportReport,
//!     apply_filters, to_csv, to_json, to_vcf,
//! };
//! # }
//! ```

pub mod filter;
pub mod models;
pub mod output;

// Re-export main types for convenience
pub use filter::{FilterConfig, apply_filters};
pub use models::{ExportReport, ExportSummary};

// Re-export Contact from the crate root
pub use crate::Contact;

// Conditionally re-export output writers
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, write_json};
#[cfg(feature = "vcf-output")]
pub use output::{to_vcf, write_vcf};
