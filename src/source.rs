//! Contact sources: where the exporter gets its contacts from.
//!
//! The chat data layer is an external collaborator. It is modelled as the
//! [`ContactSource`] trait returning a [`ContactsResponse`], the same
//! `{success, contacts?, error?}` envelope the data layer reports.
//!
//! # Example
//!
//! ```rust
//! use contactpack::source::{ContactSource, ContactsResponse};
//! use contactpack::Contact;
//!
//! let contacts = vec![Contact::friend("u1"), Contact::group("g1")];
//! let response = contacts.get_contacts();
//! assert!(response.success);
//!
//! let failed = ContactsResponse::failure("database locked");
//! assert!(failed.into_contacts().is_err());
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contact::Contact;
use crate::error::{ContactpackError, DEFAULT_FETCH_ERROR, Result};

/// Result envelope of a contact fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactsResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contacts: Option<Vec<Contact>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ContactsResponse {
    /// A successful fetch.
    pub fn ok(contacts: Vec<Contact>) -> Self {
        Self {
            success: true,
            contacts: Some(contacts),
            error: None,
        }
    }

    /// A failed fetch with a message.
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            contacts: None,
            error: Some(error.into()),
        }
    }

    /// Converts the envelope into the contact list.
    ///
    /// A response that is not successful, or that is successful but carries
    /// no list, becomes [`ContactpackError::DataUnavailable`].
    pub fn into_contacts(self) -> Result<Vec<Contact>> {
        match (self.success, self.contacts) {
            (true, Some(contacts)) => Ok(contacts),
            _ => Err(ContactpackError::data_unavailable(
                self.error.unwrap_or_else(|| DEFAULT_FETCH_ERROR.to_string()),
            )),
        }
    }
}

/// Anything that can hand the exporter a full contact list.
///
/// Failures are reported inside the [`ContactsResponse`], not as a Rust
/// error, mirroring the data layer's contract.
pub trait ContactSource {
    fn get_contacts(&self) -> ContactsResponse;
}

impl ContactSource for Vec<Contact> {
    fn get_contacts(&self) -> ContactsResponse {
        ContactsResponse::ok(self.clone())
    }
}

impl ContactSource for [Contact] {
    fn get_contacts(&self) -> ContactsResponse {
        ContactsResponse::ok(self.to_vec())
    }
}

impl<T: ContactSource + ?Sized> ContactSource for &T {
    fn get_contacts(&self) -> ContactsResponse {
        (**self).get_contacts()
    }
}

/// A source that always returns the same response.
///
/// Useful for replaying a captured data-layer response, including failures.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub ContactsResponse);

impl ContactSource for StaticSource {
    fn get_contacts(&self) -> ContactsResponse {
        self.0.clone()
    }
}

/// Reads contacts from a JSON file.
///
/// The file may hold either a bare array of contacts or a full
/// [`ContactsResponse`] envelope. Read and parse failures are reported as an
/// unsuccessful response.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<ContactsResponse> {
        let content = fs::read_to_string(&self.path)?;
        parse_contacts_json(&content)
    }
}

impl ContactSource for JsonFileSource {
    fn get_contacts(&self) -> ContactsResponse {
        debug!(path = %self.path.display(), "reading contacts file");
        match self.read() {
            Ok(response) => response,
            Err(e) => ContactsResponse::failure(format!("{}: {}", self.path.display(), e)),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ContactsDocument {
    List(Vec<Contact>),
    Envelope(ContactsResponse),
}

/// Parses either a bare contact array or a [`ContactsResponse`] envelope.
pub fn parse_contacts_json(content: &str) -> Result<ContactsResponse> {
    let document: ContactsDocument = serde_json::from_str(content)?;
    Ok(match document {
        ContactsDocument::List(contacts) => ContactsResponse::ok(contacts),
        ContactsDocument::Envelope(response) => response,
    })
}
