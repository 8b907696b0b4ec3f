//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! Flags given on the command line override values loaded with `--options`.

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ExportOptions;
use crate::error::Result;

/// Export chat-archive contacts to JSON, CSV or vCard files.
#[derive(Parser, Debug, Clone)]
#[command(name = "contactpack")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    contactpack contacts.json
    contactpack contacts.json -f csv -o ~/Desktop/exports
    contactpack contacts.json -f vcf --no-groups --no-officials
    contactpack contacts.json --select wxid_alice --select wxid_bob
    contactpack contacts.json --options export.json --report")]
pub struct Args {
    /// Contacts file: a JSON array of contacts or a {success, contacts, error} response
    pub input: PathBuf,

    /// Directory to write the export into (created if missing)
    #[arg(short, long, default_value = "exports")]
    pub output: PathBuf,

    /// Output format (overrides --options)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Load export options from a JSON file
    #[arg(long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Exclude friends
    #[arg(long)]
    pub no_friends: bool,

    /// Exclude group chats
    #[arg(long)]
    pub no_groups: bool,

    /// Exclude official accounts
    #[arg(long)]
    pub no_officials: bool,

    /// Only export these usernames (repeatable or comma-separated)
    #[arg(long = "select", value_name = "USERNAME", value_delimiter = ',')]
    pub select: Vec<String>,

    /// Print the export report as JSON to stdout
    #[arg(long)]
    pub report: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Builds export options from `--options` plus command-line overrides.
    pub fn export_options(&self) -> Result<ExportOptions> {
        let mut options = match &self.options {
            Some(path) => ExportOptions::load(path)?,
            None => ExportOptions::new(),
        };

        if let Some(format) = self.format {
            options = options.with_format(format.into());
        }

        if self.no_friends {
            options.contact_types.friends = false;
        }
        if self.no_groups {
            options.contact_types.groups = false;
        }
        if self.no_officials {
            options.contact_types.officials = false;
        }

        if !self.select.is_empty() {
            options = options.with_selected_usernames(self.select.iter().cloned());
        }

        Ok(options)
    }
}

/// Output format options.
///
/// # Example
///
/// ```rust
/// use contactpack::cli::OutputFormat;
///
/// let format = OutputFormat::Vcf;
/// assert_eq!(format.to_string(), "VCF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON document with export metadata (default)
    #[default]
    Json,

    /// CSV with UTF-8 BOM, opens cleanly in Excel
    Csv,

    /// vCard 3.0, friends only
    #[value(alias = "vcard")]
    Vcf,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "JSON"),
            OutputFormat::Csv => write!(f, "CSV"),
            OutputFormat::Vcf => write!(f, "VCF"),
        }
    }
}

// Conversion to library format type
impl From<OutputFormat> for crate::format::ExportFormat {
    fn from(format: OutputFormat) -> crate::format::ExportFormat {
        match format {
            OutputFormat::Json => crate::format::ExportFormat::Json,
            OutputFormat::Csv => crate::format::ExportFormat::Csv,
            OutputFormat::Vcf => crate::format::ExportFormat::Vcf,
        }
    }
}
