use serde::{Deserialize, Serialize};

/// Result of one extraction. Absent fields are empty strings, never missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: String,
    pub phone: String,
    pub address: String,
}

impl ContactRecord {
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.phone.is_empty() && self.address.is_empty()
    }

    /// Copies fields from `other` into fields that are still empty. Fields
    /// already set are kept.
    pub fn fill_from(&mut self, other: ContactRecord) {
        fill_slot(&mut self.name, other.name);
        fill_slot(&mut self.phone, other.phone);
        fill_slot(&mut self.address, other.address);
    }

    /// Name and phone joined by a space, as shown in a single contact field.
    pub fn contact_line(&self) -> Option<String> {
        let parts: Vec<&str> = [self.name.as_str(), self.phone.as_str()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        let joined = parts.join(" ");
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(trimmed.to_string())
    }
}

fn fill_slot(slot: &mut String, value: String) {
    if slot.is_empty() && !value.is_empty() {
        *slot = value;
    }
}

/// Which contact/address pair a paste is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FillTarget {
    Pickup,
    Receiver,
}

impl FillTarget {
    pub fn as_str(self) -> &'static str {
        match self {
            FillTarget::Pickup => "pickup",
            FillTarget::Receiver => "receiver",
        }
    }
}

/// A pair of display fields fed from extracted records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayFields {
    pub contact: String,
    pub address: String,
}

impl DisplayFields {
    pub fn new(contact: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            contact: contact.into(),
            address: address.into(),
        }
    }

    /// Overwrites each field only when the record has something for it.
    /// Returns whether either field changed.
    pub fn apply(&mut self, record: &ContactRecord) -> bool {
        let mut changed = false;
        if let Some(contact) = record.contact_line() {
            changed |= contact != self.contact;
            self.contact = contact;
        }
        if !record.address.is_empty() {
            changed |= record.address != self.address;
            self.address = record.address.clone();
        }
        changed
    }
}

/// The pickup and receiver pairs side by side. A paste only ever touches
/// the pair its target names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayBoard {
    pub pickup: DisplayFields,
    pub receiver: DisplayFields,
}

impl DisplayBoard {
    pub fn fields(&self, target: FillTarget) -> &DisplayFields {
        match target {
            FillTarget::Pickup => &self.pickup,
            FillTarget::Receiver => &self.receiver,
        }
    }

    pub fn fields_mut(&mut self, target: FillTarget) -> &mut DisplayFields {
        match target {
            FillTarget::Pickup => &mut self.pickup,
            FillTarget::Receiver => &mut self.receiver,
        }
    }

    pub fn apply(&mut self, target: FillTarget, record: &ContactRecord) -> bool {
        self.fields_mut(target).apply(record)
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactRecord, DisplayBoard, DisplayFields, FillTarget};

    fn record(name: &str, phone: &str, address: &str) -> ContactRecord {
        ContactRecord {
            name: name.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
        }
    }

    #[test]
    fn fill_from_keeps_first_writer() {
        let mut base = record("张三", "", "");
        base.fill_from(record("李四", "13800001111", ""));
        assert_eq!(base, record("张三", "13800001111", ""));

        base.fill_from(record("", "13900002222", "北京"));
        assert_eq!(base, record("张三", "13800001111", "北京"));
    }

    #[test]
    fn contact_line_skips_empty_parts() {
        assert_eq!(
            record("张三", "13800001111", "").contact_line().as_deref(),
            Some("张三 13800001111")
        );
        assert_eq!(
            record("", "13800001111", "").contact_line().as_deref(),
            Some("13800001111")
        );
        assert_eq!(record("", "", "北京").contact_line(), None);
    }

    #[test]
    fn display_fields_only_take_non_empty_values() {
        let mut fields = DisplayFields::new("李白 18112349876", "深圳");
        let changed = fields.apply(&record("", "", "南京市 北方路"));
        assert!(changed);
        assert_eq!(fields.contact, "李白 18112349876");
        assert_eq!(fields.address, "南京市 北方路");

        let changed = fields.apply(&ContactRecord::default());
        assert!(!changed);
        assert_eq!(fields, DisplayFields::new("李白 18112349876", "南京市 北方路"));
    }

    #[test]
    fn board_updates_only_the_targeted_pair() {
        let mut board = DisplayBoard {
            pickup: DisplayFields::new("李白 18112349876", "广东省深圳市"),
            receiver: DisplayFields::new("王大钊 18012349876", "南京市 北方路"),
        };
        let changed = board.apply(
            FillTarget::Receiver,
            &record("张三", "13900001234", "北京市海淀区"),
        );
        assert!(changed);
        assert_eq!(
            board.pickup,
            DisplayFields::new("李白 18112349876", "广东省深圳市")
        );
        assert_eq!(
            board.fields(FillTarget::Receiver),
            &DisplayFields::new("张三 13900001234", "北京市海淀区")
        );
    }

    #[test]
    fn fill_target_serializes_lowercase() {
        let json = serde_json::to_string(&FillTarget::Receiver).unwrap();
        assert_eq!(json, "\"receiver\"");
        assert_eq!(FillTarget::Pickup.as_str(), "pickup");
    }
}
