//! vCard 3.0 output writer.

use std::fs;
use std::path::Path;

use crate::contact::Contact;
use crate::error::Result;

const CRLF: &str = "\r\n";

/// Writes friends to a `.vcf` file.
///
/// Groups, official accounts and other kinds are skipped: a vCard describes
/// a person.
///
/// # Format
/// ```text
/// BEGIN:VCARD
/// VERSION:3.0
/// FN:Alice
/// NICKNAME:Ali
/// NOTE:college roommate
/// X-WECHAT-ID:wxid_alice
/// END:VCARD
/// ```
/// Lines end with CRLF and cards are separated by an empty line.
pub fn write_vcf(contacts: &[Contact], output_path: impl AsRef<Path>) -> Result<()> {
    fs::write(output_path, to_vcf(contacts))?;
    Ok(())
}

/// Converts the friends among `contacts` to vCard text.
pub fn to_vcf(contacts: &[Contact]) -> String {
    contacts
        .iter()
        .filter(|c| c.is_friend())
        .map(build_card)
        .collect::<Vec<_>>()
        .join("\r\n\r\n")
}

fn build_card(contact: &Contact) -> String {
    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("FN:{}", escape_text(contact.full_name())),
    ];

    if !contact.nickname.is_empty() {
        lines.push(format!("NICKNAME:{}", escape_text(&contact.nickname)));
    }
    if !contact.remark.is_empty() {
        lines.push(format!("NOTE:{}", escape_text(&contact.remark)));
    }

    lines.push(format!("X-WECHAT-ID:{}", escape_text(&contact.username)));
    lines.push("END:VCARD".to_string());

    lines.join(CRLF)
}

/// Escapes a vCard 3.0 text value (RFC 2426 section 4).
fn escape_text(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    let mut chars = value.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                escaped.push_str("\\n");
            }
            '\n' => escaped.push_str("\\n"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_card() {
        let contact = Contact::friend("wxid_alice")
            .with_display_name("Alice")
            .with_nickname("Ali")
            .with_remark("roommate");

        assert_eq!(
            to_vcf(&[contact]),
            "BEGIN:VCARD\r\nVERSION:3.0\r\nFN:Alice\r\nNICKNAME:Ali\r\nNOTE:roommate\r\n\
             X-WECHAT-ID:wxid_alice\r\nEND:VCARD"
        );
    }

    #[test]
    fn test_optional_lines_omitted() {
        let vcf = to_vcf(&[Contact::friend("wxid_bob")]);
        assert!(vcf.contains("FN:wxid_bob\r\n"));
        assert!(!vcf.contains("NICKNAME:"));
        assert!(!vcf.contains("NOTE:"));
    }

    #[test]
    fn test_non_friends_dropped() {
        let contacts = vec![
            Contact::friend("u1").with_display_name("Alice"),
            Contact::group("g1").with_display_name("Team"),
            Contact::official("gh_1"),
        ];

        let vcf = to_vcf(&contacts);
        assert_eq!(vcf.matches("BEGIN:VCARD").count(), 1);
        assert!(!vcf.contains("Team"));
    }

    #[test]
    fn test_cards_separated_by_blank_line() {
        let vcf = to_vcf(&[Contact::friend("u1"), Contact::friend("u2")]);
        assert!(vcf.contains("END:VCARD\r\n\r\nBEGIN:VCARD"));
        assert!(!vcf.ends_with(CRLF));
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("plain"), "plain");
        assert_eq!(escape_text("a,b;c"), "a\\,b\\;c");
        assert_eq!(escape_text("line1\r\nline2\nline3"), "line1\\nline2\\nline3");
        assert_eq!(escape_text("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_no_friends_is_empty() {
        assert!(to_vcf(&[Contact::group("g1")]).is_empty());
    }
}
