//! Property-based tests for contactpack.
//!
//! These tests generate random inputs to find edge cases.

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use contactpack::config::{ContactTypes, ExportOptions};
use contactpack::core::output::{CSV_HEADER, UTF8_BOM, to_csv, to_json_at, to_vcf};
use contactpack::core::{FilterConfig, apply_filters};
use contactpack::{Contact, ContactKind};

fn arb_kind() -> impl Strategy<Value = ContactKind> {
    prop::sample::select(vec![
        ContactKind::Friend,
        ContactKind::Group,
        ContactKind::Official,
        ContactKind::Other,
    ])
}

/// Generate a random Contact using fast strategies (no regex!)
fn arb_contact() -> impl Strategy<Value = Contact> {
    (
        prop::sample::select(vec![
            "wxid_alice".to_string(),
            "wxid_bob".to_string(),
            "123@chatroom".to_string(),
            "gh_news".to_string(),
            "张三".to_string(),
            "u1".to_string(),
        ]),
        prop::sample::select(vec![
            String::new(),
            "Alice".to_string(),
            "Team, \"A\"".to_string(),
            "名字".to_string(),
            "line\nbreak".to_string(),
            "semi;colon".to_string(),
        ]),
        prop::sample::select(vec![String::new(), "note".to_string(), "🎉".to_string()]),
        arb_kind(),
    )
        .prop_map(|(username, display_name, remark, kind)| {
            Contact::new(username, kind)
                .with_display_name(display_name)
                .with_remark(remark)
        })
}

fn arb_contacts(max_len: usize) -> impl Strategy<Value = Vec<Contact>> {
    prop::collection::vec(arb_contact(), 0..max_len)
}

fn arb_types() -> impl Strategy<Value = ContactTypes> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(f, g, o)| ContactTypes {
        friends: f,
        groups: g,
        officials: o,
    })
}

fn arb_selection() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec![
            "wxid_alice".to_string(),
            "gh_news".to_string(),
            "u1".to_string(),
            "nobody".to_string(),
        ]),
        0..3,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // FILTER PROPERTIES
    // ============================================

    /// Output is exactly {kind flag set} ∩ (selection empty ? all : selection)
    #[test]
    fn filter_matches_set_definition(
        contacts in arb_contacts(20),
        types in arb_types(),
        selection in arb_selection(),
    ) {
        let options = ExportOptions::new()
            .with_contact_types(types)
            .with_selected_usernames(selection.clone());
        let filtered = apply_filters(contacts.clone(), &FilterConfig::from_options(&options));

        let allowed: HashSet<_> = selection.iter().collect();
        let expected: Vec<_> = contacts
            .into_iter()
            .filter(|c| types.allows(c.kind))
            .filter(|c| allowed.is_empty() || allowed.contains(&c.username))
            .collect();

        prop_assert_eq!(filtered, expected);
    }

    /// Filtering never adds contacts
    #[test]
    fn filter_never_increases_count(contacts in arb_contacts(20), types in arb_types()) {
        let len = contacts.len();
        let filtered = apply_filters(contacts, &FilterConfig::new().with_contact_types(types));
        prop_assert!(filtered.len() <= len);
    }

    // ============================================
    // OUTPUT PROPERTIES
    // ============================================

    /// JSON count equals the number of contacts, each with five fields
    #[test]
    fn json_count_matches(contacts in arb_contacts(20)) {
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let json = to_json_at(&contacts, ts).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let list = value["contacts"].as_array().unwrap();

        prop_assert_eq!(value["count"].as_u64().unwrap() as usize, contacts.len());
        prop_assert_eq!(list.len(), contacts.len());
        for item in list {
            prop_assert_eq!(item.as_object().unwrap().len(), 5);
        }
    }

    /// VCF never contains a card for a non-friend
    #[test]
    fn vcf_only_friends(contacts in arb_contacts(20)) {
        let vcf = to_vcf(&contacts);
        let friends = contacts.iter().filter(|c| c.kind == ContactKind::Friend).count();
        prop_assert_eq!(vcf.matches("BEGIN:VCARD").count(), friends);
    }

    /// CSV always starts with BOM + header and has one record per contact
    #[test]
    fn csv_bom_and_record_count(contacts in arb_contacts(20)) {
        let csv = to_csv(&contacts).unwrap();
        let expected_start = format!("{}{}", UTF8_BOM, CSV_HEADER.join(","));
        prop_assert!(
            csv.starts_with(&expected_start),
            "csv should open with the BOM and header row"
        );
        prop_assert!(csv.as_bytes().starts_with(&[0xEF, 0xBB, 0xBF]));

        let body = csv.strip_prefix(UTF8_BOM).unwrap();
        let mut reader = csv::ReaderBuilder::new().from_reader(body.as_bytes());
        let records = reader.records().filter_map(Result::ok).count();
        prop_assert_eq!(records, contacts.len());
    }
}
