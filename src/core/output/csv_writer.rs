//! CSV output writer.

use std::fs;
use std::path::Path;

use csv::{QuoteStyle, Terminator};

use crate::contact::Contact;
use crate::error::Result;

/// UTF-8 byte-order mark, so spreadsheet tools detect the encoding.
pub const UTF8_BOM: &str = "\u{FEFF}";

/// Fixed column labels: username, display name, remark, nickname, type.
pub const CSV_HEADER: [&str; 5] = ["用户名", "显示名称", "备注", "昵称", "类型"];

/// Writes contacts to CSV.
///
/// # Format
/// - Starts with a UTF-8 BOM, then the unquoted header row
/// - Delimiter: `,`, rows separated by `\n`, no trailing newline
/// - Every data field is double-quoted; embedded quotes are doubled
/// - The type column holds the label from [`ContactKind::label`](crate::ContactKind::label)
pub fn write_csv(contacts: &[Contact], output_path: impl AsRef<Path>) -> Result<()> {
    let csv = to_csv(contacts)?;
    fs::write(output_path, csv)?;
    Ok(())
}

/// Converts contacts to a CSV string (BOM included).
pub fn to_csv(contacts: &[Contact]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for contact in contacts {
        writer.write_record(build_record(contact))?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    let rows = String::from_utf8(bytes)?;

    let mut output = String::with_capacity(rows.len() + 64);
    output.push_str(UTF8_BOM);
    output.push_str(&CSV_HEADER.join(","));
    if let Some(rows) = rows.strip_suffix('\n') {
        output.push('\n');
        output.push_str(rows);
    }

    Ok(output)
}

fn build_record(contact: &Contact) -> [&str; 5] {
    [
        contact.username.as_str(),
        contact.display_name.as_str(),
        contact.remark.as_str(),
        contact.nickname.as_str(),
        contact.kind.label(),
    ]
}
