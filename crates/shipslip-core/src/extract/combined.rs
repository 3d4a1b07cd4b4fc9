use tracing::trace;

use crate::extract::lines::tokens;
use crate::keywords::{find_loose_phone, KeywordSet};
use crate::record::ContactRecord;

/// Finds the first line carrying a phone-shaped number and splits it into
/// name, phone and address around the digits.
pub fn detect_combined(lines: &[&str], keywords: &KeywordSet) -> Option<ContactRecord> {
    lines
        .iter()
        .enumerate()
        .find_map(|(index, line)| {
            let record = split_combined(line, keywords)?;
            trace!(line = index, "combined line matched");
            Some(record)
        })
}

fn split_combined(line: &str, keywords: &KeywordSet) -> Option<ContactRecord> {
    let digits = find_loose_phone(line)?;
    let before = keywords.strip_trailing_phone_label(&line[..digits.start()]);
    let after = trim_separators(&line[digits.end()..]);

    // A label means the name follows it; otherwise the name sits right
    // before the digits.
    let name = match keywords.strip_leading_name_label(before) {
        Some(rest) => tokens(rest).next(),
        None => tokens(before).last(),
    };
    let address = keywords
        .strip_leading_address_label(after)
        .unwrap_or(after);

    Some(ContactRecord {
        name: name.unwrap_or_default().to_string(),
        phone: digits.as_str().to_string(),
        address: trim_separators(address).to_string(),
    })
}

fn trim_separators(text: &str) -> &str {
    text.trim_matches(|ch: char| ch.is_whitespace() || ch == ',' || ch == '，')
}
