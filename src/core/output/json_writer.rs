//! JSON output writer.

use std::fs;
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::contact::{Contact, ContactKind};
use crate::error::Result;

/// The five fields every exported contact is projected to.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonContact<'a> {
    username: &'a str,
    display_name: &'a str,
    remark: &'a str,
    nickname: &'a str,
    #[serde(rename = "type")]
    kind: ContactKind,
}

impl<'a> From<&'a Contact> for JsonContact<'a> {
    fn from(contact: &'a Contact) -> Self {
        Self {
            username: &contact.username,
            display_name: &contact.display_name,
            remark: &contact.remark,
            nickname: &contact.nickname,
            kind: contact.kind,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonExport<'a> {
    exported_at: String,
    count: usize,
    contacts: Vec<JsonContact<'a>>,
}

/// Writes contacts to a JSON file.
///
/// # Format
/// ```json
/// {
///   "exportedAt": "2024-06-15T12:30:00.000Z",
///   "count": 1,
///   "contacts": [
///     {"username": "u1", "displayName": "Alice", "remark": "", "nickname": "", "type": "friend"}
///   ]
/// }
/// ```
pub fn write_json(contacts: &[Contact], output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(contacts)?;
    fs::write(output_path, json)?;
    Ok(())
}

/// Converts contacts to a pretty-printed JSON document stamped with the current time.
pub fn to_json(contacts: &[Contact]) -> Result<String> {
    to_json_at(contacts, Utc::now())
}

/// Same as [`to_json`] with an explicit `exportedAt` time.
pub fn to_json_at(contacts: &[Contact], exported_at: DateTime<Utc>) -> Result<String> {
    let document = JsonExport {
        exported_at: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        count: contacts.len(),
        contacts: contacts.iter().map(JsonContact::from).collect(),
    };

    Ok(serde_json::to_string_pretty(&document)?)
}
