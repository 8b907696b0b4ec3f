//! Contact record shared by every export format.
//!
//! A [`Contact`] is an immutable snapshot handed over by the chat data layer.
//! The exporter filters and projects contacts but never mutates them.
//!
//! # Examples
//!
//! ```
//! use contactpack::{Contact, ContactKind};
//!
//! let alice = Contact::new("wxid_alice", ContactKind::Friend)
//!     .with_display_name("Alice")
//!     .with_nickname("Ali");
//!
//! assert_eq!(alice.full_name(), "Alice");
//! assert!(alice.is_friend());
//! ```
//!
//! ## Deserializing upstream records
//!
//! Records use camelCase keys and a `type` tag. Missing or `null` text fields
//! become empty strings, and unknown extra keys are ignored.
//!
//! ```
//! use contactpack::{Contact, ContactKind};
//!
//! let json = r#"{"username": "g1@chatroom", "displayName": "Team", "remark": null, "type": "group", "avatarUrl": "x"}"#;
//! let contact: Contact = serde_json::from_str(json)?;
//!
//! assert_eq!(contact.kind, ContactKind::Group);
//! assert_eq!(contact.remark, "");
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Deserializer, Serialize};

/// Kind of a contact record.
///
/// Upstream type strings that are not recognized deserialize to
/// [`Other`](ContactKind::Other) instead of failing the whole batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// A personal contact
    Friend,
    /// A group chat
    Group,
    /// An official / subscription account
    Official,
    /// Anything else the source reports
    #[default]
    #[serde(other)]
    Other,
}

impl ContactKind {
    /// Returns the lowercase wire name (`friend`, `group`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactKind::Friend => "friend",
            ContactKind::Group => "group",
            ContactKind::Official => "official",
            ContactKind::Other => "other",
        }
    }

    /// Returns the human-readable label used in CSV exports.
    ///
    /// ```
    /// use contactpack::ContactKind;
    ///
    /// assert_eq!(ContactKind::Friend.label(), "好友");
    /// assert_eq!(ContactKind::Other.label(), "其他");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            ContactKind::Friend => "好友",
            ContactKind::Group => "群聊",
            ContactKind::Official => "公众号",
            ContactKind::Other => "其他",
        }
    }

    /// Returns the three kinds that can be selected for export.
    pub fn selectable() -> &'static [ContactKind] {
        &[ContactKind::Friend, ContactKind::Group, ContactKind::Official]
    }
}

impl std::fmt::Display for ContactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact as reported by the chat data layer.
///
/// | Field | JSON key | Description |
/// |-------|----------|-------------|
/// | `username` | `username` | Unique identity of the contact |
/// | `display_name` | `displayName` | Name shown in the chat list |
/// | `remark` | `remark` | User-assigned alias |
/// | `nickname` | `nickname` | Self-chosen profile name |
/// | `kind` | `type` | [`ContactKind`] |
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Unique identity, never empty in well-formed data.
    #[serde(default, deserialize_with = "string_or_null")]
    pub username: String,

    #[serde(default, deserialize_with = "string_or_null")]
    pub display_name: String,

    #[serde(default, deserialize_with = "string_or_null")]
    pub remark: String,

    #[serde(default, deserialize_with = "string_or_null")]
    pub nickname: String,

    #[serde(rename = "type", default)]
    pub kind: ContactKind,
}

impl Contact {
    /// Creates a contact with only a username and kind.
    pub fn new(username: impl Into<String>, kind: ContactKind) -> Self {
        Self {
            username: username.into(),
            kind,
            ..Self::default()
        }
    }

    /// Shorthand for a [`ContactKind::Friend`] contact.
    pub fn friend(username: impl Into<String>) -> Self {
        Self::new(username, ContactKind::Friend)
    }

    /// Shorthand for a [`ContactKind::Group`] contact.
    pub fn group(username: impl Into<String>) -> Self {
        Self::new(username, ContactKind::Group)
    }

    /// Shorthand for a [`ContactKind::Official`] contact.
    pub fn official(username: impl Into<String>) -> Self {
        Self::new(username, ContactKind::Official)
    }

    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    #[must_use]
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }

    #[must_use]
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Display name, falling back to the username when it is empty.
    pub fn full_name(&self) -> &str {
        if self.display_name.is_empty() {
            &self.username
        } else {
            &self.display_name
        }
    }

    pub fn is_friend(&self) -> bool {
        self.kind == ContactKind::Friend
    }
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
