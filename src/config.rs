//! Configuration types for contact exports.
//!
//! This module provides clean configuration structs for library usage,
//! without any CLI framework dependencies. The serde shape matches the
//! options payload a desktop front end sends (camelCase keys).
//!
//! # Example
//!
//! ```rust
//! use contactpack::config::{ContactTypes, ExportOptions};
//! use contactpack::format::ExportFormat;
//!
//! let options = ExportOptions::new()
//!     .with_format(ExportFormat::Csv)
//!     .with_contact_types(ContactTypes::friends_only())
//!     .with_selected_usernames(["wxid_alice", "wxid_bob"]);
//!
//! assert_eq!(options.format, "csv");
//! assert!(options.has_selection());
//! ```
//!
//! # Loading From JSON
//!
//! ```rust
//! use contactpack::config::ExportOptions;
//!
//! let options = ExportOptions::from_json_str(r#"{
//!     "format": "vcf",
//!     "exportAvatars": false,
//!     "contactTypes": {"friends": true, "groups": false, "officials": false}
//! }"#)?;
//!
//! assert_eq!(options.format, "vcf");
//! assert!(options.selected_usernames.is_none());
//! # Ok::<(), contactpack::ContactpackError>(())
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::contact::ContactKind;
use crate::error::{ContactpackError, Result};
use crate::format::ExportFormat;

/// Which contact kinds are included in an export.
///
/// Each flag gates one [`ContactKind`]. [`ContactKind::Other`] has no flag
/// and is never exported.
///
/// When `contactTypes` is omitted from the options every kind is enabled.
/// When it is given, a missing flag counts as `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactTypes {
    /// Include personal contacts
    #[serde(default)]
    pub friends: bool,

    /// Include group chats
    #[serde(default)]
    pub groups: bool,

    /// Include official accounts
    #[serde(default)]
    pub officials: bool,
}

impl Default for ContactTypes {
    fn default() -> Self {
        Self::all()
    }
}

impl ContactTypes {
    /// All three kinds enabled.
    pub fn all() -> Self {
        Self {
            friends: true,
            groups: true,
            officials: true,
        }
    }

    /// No kinds enabled.
    pub fn none() -> Self {
        Self {
            friends: false,
            groups: false,
            officials: false,
        }
    }

    /// Only personal contacts, the usual choice for vCard exports.
    pub fn friends_only() -> Self {
        Self {
            friends: true,
            ..Self::none()
        }
    }

    #[must_use]
    pub fn with_friends(mut self, enabled: bool) -> Self {
        self.friends = enabled;
        self
    }

    #[must_use]
    pub fn with_groups(mut self, enabled: bool) -> Self {
        self.groups = enabled;
        self
    }

    #[must_use]
    pub fn with_officials(mut self, enabled: bool) -> Self {
        self.officials = enabled;
        self
    }

    /// Returns `true` if contacts of this kind should be exported.
    pub fn allows(&self, kind: ContactKind) -> bool {
        match kind {
            ContactKind::Friend => self.friends,
            ContactKind::Group => self.groups,
            ContactKind::Official => self.officials,
            ContactKind::Other => false,
        }
    }

    /// Returns `true` if at least one kind is enabled.
    pub fn any(&self) -> bool {
        self.friends || self.groups || self.officials
    }
}

/// Options for a single export call.
///
/// `format` is kept as the caller-supplied string; it is resolved to an
/// [`ExportFormat`] only when the exporter dispatches to a serializer, so an
/// unknown value is reported as
/// [`UnsupportedFormat`](ContactpackError::UnsupportedFormat).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    /// Output format name: `json`, `csv` or `vcf` (default: json)
    #[serde(default = "default_format")]
    pub format: String,

    /// Accepted for compatibility with the front end; avatars are not exported.
    #[serde(default)]
    pub export_avatars: bool,

    /// Kind filter (default: all kinds)
    #[serde(default)]
    pub contact_types: ContactTypes,

    /// Optional username allow-list. `None` or an empty list selects everyone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_usernames: Option<Vec<String>>,
}

fn default_format() -> String {
    ExportFormat::default().extension().to_string()
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: default_format(),
            export_avatars: false,
            contact_types: ContactTypes::default(),
            selected_usernames: None,
        }
    }
}

impl ExportOptions {
    /// Creates options with default values (JSON, all kinds, no allow-list).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: ExportFormat) -> Self {
        self.format = format.extension().to_string();
        self
    }

    /// Sets the output format from a raw name without validating it.
    #[must_use]
    pub fn with_format_name(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn with_contact_types(mut self, contact_types: ContactTypes) -> Self {
        self.contact_types = contact_types;
        self
    }

    /// Restricts the export to these usernames (exact match).
    #[must_use]
    pub fn with_selected_usernames<I, S>(mut self, usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_usernames = Some(usernames.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_export_avatars(mut self, enabled: bool) -> Self {
        self.export_avatars = enabled;
        self
    }

    /// Returns `true` if a non-empty allow-list is set.
    pub fn has_selection(&self) -> bool {
        self.selected_usernames
            .as_ref()
            .is_some_and(|names| !names.is_empty())
    }

    /// Resolves the format name.
    pub fn export_format(&self) -> Result<ExportFormat> {
        self.format.parse()
    }

    /// Parses options from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| ContactpackError::invalid_config(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_types_allows() {
        let types = ContactTypes::friends_only();
        assert!(types.allows(ContactKind::Friend));
        assert!(!types.allows(ContactKind::Group));
        assert!(!types.allows(ContactKind::Official));
        assert!(!ContactTypes::all().allows(ContactKind::Other));
    }

    #[test]
    fn test_contact_types_builders() {
        let types = ContactTypes::none().with_groups(true).with_officials(true);
        assert!(!types.friends);
        assert!(types.groups);
        assert!(types.officials);
        assert!(types.any());
        assert!(!ContactTypes::none().any());
    }

    #[test]
    fn test_options_defaults() {
        let options = ExportOptions::new();
        assert_eq!(options.format, "json");
        assert_eq!(options.contact_types, ContactTypes::all());
        assert!(!options.has_selection());
    }

    #[test]
    fn test_empty_selection_is_no_selection() {
        let options = ExportOptions::new().with_selected_usernames(Vec::<String>::new());
        assert!(!options.has_selection());
    }

    #[test]
    fn test_options_from_json_partial() {
        let options =
            ExportOptions::from_json_str(r#"{"format": "csv", "selectedUsernames": ["u1"]}"#)
                .unwrap();
        assert_eq!(options.export_format().unwrap(), ExportFormat::Csv);
        assert_eq!(options.selected_usernames, Some(vec!["u1".to_string()]));
        assert_eq!(options.contact_types, ContactTypes::all());
    }

    #[test]
    fn test_missing_type_flag_is_false() {
        let options =
            ExportOptions::from_json_str(r#"{"contactTypes": {"friends": true}}"#).unwrap();
        assert_eq!(options.contact_types, ContactTypes::friends_only());
    }

    #[test]
    fn test_unknown_format_survives_parsing() {
        let options = ExportOptions::from_json_str(r#"{"format": "xml"}"#).unwrap();
        assert_eq!(options.format, "xml");
        assert!(options.export_format().unwrap_err().is_unsupported_format());
    }

    #[test]
    fn test_options_serialize_camel_case() {
        let options = ExportOptions::new().with_export_avatars(true);
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains("\"exportAvatars\":true"));
        assert!(json.contains("\"contactTypes\""));
        assert!(!json.contains("selectedUsernames"));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("options.json");
        fs::write(&path, "{ not json").unwrap();

        let err = ExportOptions::load(&path).unwrap_err();
        assert!(matches!(err, ContactpackError::InvalidConfig { .. }));
    }
}
