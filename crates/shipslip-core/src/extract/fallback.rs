use tracing::debug;

use crate::keywords::{find_loose_phone, KeywordSet};

const MIN_ADDRESS_CHARS: usize = 8;

/// Picks an address line when no labelled address exists. Order matters:
///
/// 1. scanning from the last line up, the first line longer than eight
///    characters with no name or phone label and no phone number;
/// 2. else, scanning from the last line up, the first line without a phone
///    number;
/// 3. else, the last line.
pub fn select_last_resort(lines: &[&str], phone: &str, keywords: &KeywordSet) -> String {
    let has_phone =
        |line: &str| (!phone.is_empty() && line.contains(phone)) || find_loose_phone(line).is_some();

    let long_plain = lines.iter().rev().copied().find(|line| {
        line.chars().count() > MIN_ADDRESS_CHARS
            && !keywords.has_name_label(line)
            && !keywords.has_phone_label(line)
            && !has_phone(*line)
    });
    if let Some(line) = long_plain {
        debug!("address from long unlabelled line");
        return line.to_string();
    }

    if let Some(line) = lines.iter().rev().copied().find(|line| !has_phone(*line)) {
        debug!("address from last line without phone");
        return line.to_string();
    }

    debug!("address from last line");
    lines.last().map(|line| line.to_string()).unwrap_or_default()
}
