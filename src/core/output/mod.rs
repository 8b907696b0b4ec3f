//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_json`] / [`to_json`] - JSON object with `exportedAt`, `count`, `contacts` - requires `json-output` feature
//! - [`write_csv`] / [`to_csv`] - BOM-prefixed CSV with Chinese column labels - requires `csv-output` feature
//! - [`write_vcf`] / [`to_vcf`] - vCard 3.0, friends only - requires `vcf-output` feature
//!
//! # Choosing a Format
//!
//! | Format | Use Case | Includes |
//! |--------|----------|----------|
//! | JSON | Re-import, scripting | All kinds |
//! | CSV | Excel / Numbers | All kinds |
//! | VCF | Phone / mail address books | Friends only |
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output", feature = "vcf-output"))]
//! # fn main() -> contactpack::Result<()> {
//! use contactpack::core::output::{to_csv, write_json, write_vcf};
//! use contactpack::Contact;
//!
//! let contacts = vec![
//!     Contact::friend("wxid_alice").with_display_name("Alice"),
//!     Contact::group("123@chatroom").with_display_name("Team"),
//! ];
//!
//! write_json(&contacts, "contacts.json")?;
//! write_vcf(&contacts, "contacts.vcf")?;
//!
//! let csv_string = to_csv(&contacts)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output", feature = "vcf-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "vcf-output")]
mod vcf_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, UTF8_BOM, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, to_json_at, write_json};
#[cfg(feature = "vcf-output")]
pub use vcf_writer::{to_vcf, write_vcf};
