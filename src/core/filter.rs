//! Filter contacts by kind and by username allow-list.
//!
//! This module provides [`FilterConfig`] for defining filter criteria and
//! [`apply_filters`] for filtering contact collections.
//!
//! # Filter Types
//!
//! | Filter | Method | Description |
//! |--------|--------|-------------|
//! | Kind | [`with_contact_types`](FilterConfig::with_contact_types) | Keep kinds whose flag is set |
//! | Allow-list | [`with_usernames`](FilterConfig::with_usernames) | Keep exact username matches |
//!
//! # Examples
//!
//! ```
//! use contactpack::config::ContactTypes;
//! use contactpack::core::filter::{FilterConfig, apply_filters};
//! use contactpack::Contact;
//!
//! let contacts = vec![
//!     Contact::friend("u1"),
//!     Contact::group("g1"),
//!     Contact::friend("u2"),
//! ];
//!
//! let config = FilterConfig::new()
//!     .with_contact_types(ContactTypes::friends_only())
//!     .with_usernames(["u2"]);
//! let filtered = apply_filters(contacts, &config);
//!
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered[0].username, "u2");
//! ```
//!
//! # Behavior Notes
//!
//! - Username matching is exact and case-sensitive (set membership, no substrings)
//! - An empty allow-list selects everyone
//! - Both filters are combined with AND logic
//! - Input order is preserved

use std::collections::HashSet;

use crate::config::{ContactTypes, ExportOptions};
use crate::contact::Contact;

/// Configuration for filtering contacts.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Kinds to keep.
    pub contact_types: ContactTypes,

    /// Usernames to keep. Empty means no allow-list.
    pub usernames: HashSet<String>,
}

impl FilterConfig {
    /// Creates a filter that keeps every selectable kind.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the filter described by export options.
    pub fn from_options(options: &ExportOptions) -> Self {
        let config = Self::new().with_contact_types(options.contact_types);
        match &options.selected_usernames {
            Some(names) => config.with_usernames(names.iter().cloned()),
            None => config,
        }
    }

    #[must_use]
    pub fn with_contact_types(mut self, contact_types: ContactTypes) -> Self {
        self.contact_types = contact_types;
        self
    }

    /// Adds usernames to the allow-list.
    #[must_use]
    pub fn with_usernames<I, S>(mut self, usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.usernames.extend(usernames.into_iter().map(Into::into));
        self
    }

    /// Returns `true` if an allow-list is active.
    pub fn has_username_filter(&self) -> bool {
        !self.usernames.is_empty()
    }

    /// Returns `true` if the contact passes every active filter.
    pub fn matches(&self, contact: &Contact) -> bool {
        if !self.contact_types.allows(contact.kind) {
            return false;
        }
        if self.has_username_filter() && !self.usernames.contains(&contact.username) {
            return false;
        }
        true
    }
}

/// Filters a collection of contacts based on the provided configuration.
///
/// Returns a new vector containing only contacts that match all active
/// filters, in their original order.
pub fn apply_filters(contacts: Vec<Contact>, config: &FilterConfig) -> Vec<Contact> {
    contacts
        .into_iter()
        .filter(|contact| config.matches(contact))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::ContactKind;

    fn sample() -> Vec<Contact> {
        vec![
            Contact::friend("alice"),
            Contact::group("team@chatroom"),
            Contact::official("gh_news"),
            Contact::new("ghost", ContactKind::Other),
            Contact::friend("bob"),
        ]
    }

    #[test]
    fn test_default_keeps_selectable_kinds() {
        let filtered = apply_filters(sample(), &FilterConfig::new());
        assert_eq!(filtered.len(), 4);
        assert!(filtered.iter().all(|c| c.kind != ContactKind::Other));
    }

    #[test]
    fn test_filter_by_kind() {
        let config =
            FilterConfig::new().with_contact_types(ContactTypes::none().with_groups(true));
        let filtered = apply_filters(sample(), &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].username, "team@chatroom");
    }

    #[test]
    fn test_allow_list_is_exact_match() {
        let config = FilterConfig::new().with_usernames(["ali", "BOB", "bob"]);
        let filtered = apply_filters(sample(), &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].username, "bob");
    }

    #[test]
    fn test_allow_list_and_kind_combined() {
        let config = FilterConfig::new()
            .with_contact_types(ContactTypes::friends_only())
            .with_usernames(["alice", "gh_news"]);
        let filtered = apply_filters(sample(), &config);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].username, "alice");
    }

    #[test]
    fn test_from_options_empty_selection() {
        let options = ExportOptions::new().with_selected_usernames(Vec::<String>::new());
        let config = FilterConfig::from_options(&options);
        assert!(!config.has_username_filter());
        assert_eq!(apply_filters(sample(), &config).len(), 4);
    }

    #[test]
    fn test_order_preserved() {
        let filtered = apply_filters(
            sample(),
            &FilterConfig::new().with_contact_types(ContactTypes::friends_only()),
        );
        let names: Vec<_> = filtered.iter().map(|c| c.username.as_str()).collect();
        assert_eq!(names, ["alice", "bob"]);
    }
}
