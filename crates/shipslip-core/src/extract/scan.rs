use tracing::debug;

use crate::extract::lines::tokens;
use crate::keywords::{find_loose_phone, KeywordSet};
use crate::record::ContactRecord;

/// A candidate extractor for one field, tried across all lines.
type Strategy = fn(&[&str], &KeywordSet) -> Option<String>;

const PHONE_STRATEGIES: &[(&str, Strategy)] =
    &[("labelled", labelled_phone), ("loose", loose_phone)];
const NAME_STRATEGIES: &[(&str, Strategy)] = &[
    ("labelled", labelled_name),
    ("first_token", first_token_name),
];
const ADDRESS_STRATEGIES: &[(&str, Strategy)] = &[("labelled", labelled_address)];

/// Sweeps all lines for every field still empty in `seed`. The returned
/// record only holds newly found values.
pub fn scan_fields(lines: &[&str], keywords: &KeywordSet, seed: &ContactRecord) -> ContactRecord {
    ContactRecord {
        name: scan("name", &seed.name, NAME_STRATEGIES, lines, keywords),
        phone: scan("phone", &seed.phone, PHONE_STRATEGIES, lines, keywords),
        address: scan("address", &seed.address, ADDRESS_STRATEGIES, lines, keywords),
    }
}

fn scan(
    field: &str,
    current: &str,
    strategies: &[(&str, Strategy)],
    lines: &[&str],
    keywords: &KeywordSet,
) -> String {
    if !current.is_empty() {
        return String::new();
    }
    strategies
        .iter()
        .find_map(|(label, strategy)| {
            let value = strategy(lines, keywords)?;
            debug!(field, strategy = *label, "field found by scanner");
            Some(value)
        })
        .unwrap_or_default()
}

fn labelled_phone(lines: &[&str], keywords: &KeywordSet) -> Option<String> {
    lines
        .iter()
        .find_map(|line| keywords.labelled_phone(line))
        .map(str::to_string)
}

fn loose_phone(lines: &[&str], _keywords: &KeywordSet) -> Option<String> {
    lines
        .iter()
        .find_map(|line| find_loose_phone(line))
        .map(|m| m.as_str().to_string())
}

fn labelled_name(lines: &[&str], keywords: &KeywordSet) -> Option<String> {
    lines
        .iter()
        .find_map(|line| keywords.labelled_name(line))
        .map(str::to_string)
}

fn first_token_name(lines: &[&str], _keywords: &KeywordSet) -> Option<String> {
    let first = lines.first()?;
    tokens(first).next().map(str::to_string)
}

fn labelled_address(lines: &[&str], keywords: &KeywordSet) -> Option<String> {
    lines
        .iter()
        .filter(|line| keywords.has_address_label(line))
        .map(|line| address_value(line, keywords))
        .find(|value| !value.is_empty())
}

/// Value of an address-labelled line: the text after the first colon, or the
/// line minus its label and colons when nothing follows a colon.
pub(crate) fn address_value(line: &str, keywords: &KeywordSet) -> String {
    let after_colon = line
        .split_once([':', '：'])
        .map(|(_, rest)| rest.trim())
        .unwrap_or_default();
    if !after_colon.is_empty() {
        return after_colon.to_string();
    }
    keywords
        .remove_address_label(line)
        .replace([':', '：'], "")
        .trim()
        .to_string()
}
