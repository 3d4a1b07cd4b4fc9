//! The extraction pipeline.
//!
//! Stages run in a fixed order and each only fills fields that are still
//! empty: combined line, field scanners, address block, last-resort address.

mod block;
mod combined;
mod fallback;
mod lines;
mod scan;

use std::sync::LazyLock;

use tracing::{debug, trace};

use crate::keywords::KeywordSet;
use crate::record::ContactRecord;

pub use block::collect_address_block;
pub use combined::detect_combined;
pub use fallback::select_last_resort;
pub use lines::normalize_lines;
pub use scan::scan_fields;

static BUILTIN: LazyLock<Extractor> = LazyLock::new(Extractor::default);

/// Extracts a contact with the builtin keyword set.
pub fn extract_contact(raw: &str) -> ContactRecord {
    BUILTIN.extract(raw)
}

#[derive(Debug, Clone, Default)]
pub struct Extractor {
    keywords: KeywordSet,
}

impl Extractor {
    pub fn new(keywords: KeywordSet) -> Self {
        Self { keywords }
    }

    pub fn keywords(&self) -> &KeywordSet {
        &self.keywords
    }

    pub fn extract(&self, raw: &str) -> ContactRecord {
        let lines = normalize_lines(raw);
        if lines.is_empty() {
            trace!("no lines to extract from");
            return ContactRecord::default();
        }
        debug!(lines = lines.len(), "extracting contact");

        let mut record = detect_combined(&lines, &self.keywords).unwrap_or_default();
        let scanned = scan_fields(&lines, &self.keywords, &record);
        record.fill_from(scanned);

        if record.address.is_empty() {
            if let Some(address) = collect_address_block(&lines, &self.keywords) {
                record.fill_from(ContactRecord {
                    address,
                    ..ContactRecord::default()
                });
            }
        }

        if record.address.is_empty() {
            let address = select_last_resort(&lines, &record.phone, &self.keywords);
            record.fill_from(ContactRecord {
                address,
                ..ContactRecord::default()
            });
        }

        record
    }

    /// Absent input extracts to an empty record.
    pub fn extract_opt(&self, raw: Option<&str>) -> ContactRecord {
        raw.map(|raw| self.extract(raw)).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::{extract_contact, Extractor};
    use crate::keywords::{KeywordLists, KeywordSet};
    use crate::record::ContactRecord;

    #[test]
    fn combined_seed_wins_over_later_labels() {
        let record = extract_contact("张三 13900001234 深圳市南山区\n收件人：李四\n地址：北京");
        assert_eq!(record.name, "张三");
        assert_eq!(record.address, "深圳市南山区");
    }

    #[test]
    fn scanners_fill_fields_the_combined_line_left_empty() {
        let record = extract_contact("13900001234\n收件人：李四\n地址：北京市海淀区");
        assert_eq!(record.name, "李四");
        assert_eq!(record.phone, "13900001234");
        assert_eq!(record.address, "北京市海淀区");
    }

    #[test]
    fn extract_opt_handles_none() {
        let extractor = Extractor::default();
        assert_eq!(extractor.extract_opt(None), ContactRecord::default());
        assert_eq!(
            extractor.extract_opt(Some("13900001234")).phone,
            "13900001234"
        );
    }

    #[test]
    fn custom_labels_are_used() {
        let mut lists = KeywordLists::builtin();
        lists.extend(KeywordLists {
            name: vec!["Name".to_string()],
            phone: vec!["Mobile".to_string()],
            address: vec!["Address".to_string()],
            stop_words: vec!["PS".to_string()],
        });
        let extractor = Extractor::new(KeywordSet::compile(&lists).unwrap());
        assert_eq!(extractor.keywords().lists(), &lists);
        let record = extractor.extract(
            "Name: Amy\nMobile: 13500001111\nAddress:\n88 Nanjing Road\nShanghai\nPS leave at door",
        );
        assert_eq!(record.name, "Amy");
        assert_eq!(record.phone, "13500001111");
        assert_eq!(record.address, "88 Nanjing Road Shanghai");
    }
}
