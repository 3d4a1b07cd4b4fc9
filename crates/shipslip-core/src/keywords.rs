//! Label vocabularies recognised by the extractor.
//!
//! A [`KeywordLists`] is the plain, serializable form (what a config file
//! carries); a [`KeywordSet`] is the compiled form the extractor matches with.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex::{Match, Regex};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const BUILTIN_NAME_LABELS: [&str; 5] = ["收件人", "收貨人", "联系人", "聯絡人", "姓名"];
pub const BUILTIN_PHONE_LABELS: [&str; 6] = ["电话", "手機", "手机", "联系方式", "聯絡電話", "Tel"];
pub const BUILTIN_ADDRESS_LABELS: [&str; 6] = [
    "返厂地址",
    "退货地址",
    "收货地址",
    "寄件地址",
    "详细地址",
    "地址",
];
pub const BUILTIN_STOP_WORDS: [&str; 13] = [
    "备注", "請", "请", "如有", "若有", "您", "麻烦", "寄出", "记得", "快递", "留言", "单号", "谢谢",
];

// ASCII digits only; `\d` would also accept fullwidth and other Nd digits.
static LOOSE_PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9])(1[0-9]{10})(?:[^0-9]|$)").expect("valid loose phone regex")
});

/// Finds the first 11-digit numeral starting with `1` that is not part of a
/// longer digit run.
pub fn find_loose_phone(line: &str) -> Option<Match<'_>> {
    LOOSE_PHONE.captures(line).and_then(|caps| caps.get(1))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordKind {
    Name,
    Phone,
    Address,
    StopWords,
}

impl KeywordKind {
    pub fn as_str(self) -> &'static str {
        match self {
            KeywordKind::Name => "name",
            KeywordKind::Phone => "phone",
            KeywordKind::Address => "address",
            KeywordKind::StopWords => "stop_words",
        }
    }
}

impl fmt::Display for KeywordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uncompiled label lists. `Default` is empty; use [`KeywordLists::builtin`]
/// for the shipped vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordLists {
    pub name: Vec<String>,
    pub phone: Vec<String>,
    pub address: Vec<String>,
    pub stop_words: Vec<String>,
}

impl KeywordLists {
    pub fn builtin() -> Self {
        Self {
            name: owned(&BUILTIN_NAME_LABELS),
            phone: owned(&BUILTIN_PHONE_LABELS),
            address: owned(&BUILTIN_ADDRESS_LABELS),
            stop_words: owned(&BUILTIN_STOP_WORDS),
        }
    }

    /// Appends the labels of `other`, skipping ones already present.
    pub fn extend(&mut self, other: KeywordLists) {
        append_unique(&mut self.name, other.name);
        append_unique(&mut self.phone, other.phone);
        append_unique(&mut self.address, other.address);
        append_unique(&mut self.stop_words, other.stop_words);
    }

    pub fn get(&self, kind: KeywordKind) -> &[String] {
        match kind {
            KeywordKind::Name => &self.name,
            KeywordKind::Phone => &self.phone,
            KeywordKind::Address => &self.address,
            KeywordKind::StopWords => &self.stop_words,
        }
    }
}

fn owned(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|label| label.to_string()).collect()
}

fn append_unique(target: &mut Vec<String>, extra: Vec<String>) {
    for label in extra {
        if !target.contains(&label) {
            target.push(label);
        }
    }
}

/// Compiled label patterns. Label matching is case-insensitive; stop words
/// only match at the start of a line.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    lists: KeywordLists,
    name: Regex,
    phone: Regex,
    address: Regex,
    stop_words: Regex,
    labelled_phone: Regex,
    labelled_name: Regex,
    leading_name: Regex,
    trailing_phone: Regex,
    leading_address: Regex,
}

impl KeywordSet {
    pub fn compile(lists: &KeywordLists) -> Result<Self, CoreError> {
        let name = alternation(lists, KeywordKind::Name)?;
        let phone = alternation(lists, KeywordKind::Phone)?;
        let address = alternation(lists, KeywordKind::Address)?;
        let stop_words = alternation(lists, KeywordKind::StopWords)?;

        Ok(Self {
            lists: lists.clone(),
            name: Regex::new(&format!("(?i){name}"))?,
            phone: Regex::new(&format!("(?i){phone}"))?,
            address: Regex::new(&format!("(?i){address}"))?,
            stop_words: Regex::new(&format!("(?i)^{stop_words}"))?,
            labelled_phone: Regex::new(&format!(
                r"(?i){phone}[:：]*\s*(1[0-9]{{10}})(?:[^0-9]|$)"
            ))?,
            labelled_name: Regex::new(&format!(r"(?i){name}[:：]*\s*([^\s,，]+)"))?,
            leading_name: Regex::new(&format!(r"(?i)^\s*{name}[:：]*\s*"))?,
            trailing_phone: Regex::new(&format!(r"(?i){phone}[:：]*\s*$"))?,
            leading_address: Regex::new(&format!(r"(?i)^\s*{address}[:：]*\s*"))?,
        })
    }

    pub fn lists(&self) -> &KeywordLists {
        &self.lists
    }

    pub fn has_name_label(&self, line: &str) -> bool {
        self.name.is_match(line)
    }

    pub fn has_phone_label(&self, line: &str) -> bool {
        self.phone.is_match(line)
    }

    pub fn has_address_label(&self, line: &str) -> bool {
        self.address.is_match(line)
    }

    pub fn starts_with_stop_word(&self, line: &str) -> bool {
        self.stop_words.is_match(line)
    }

    /// True for lines that end an address continuation.
    pub fn is_block_boundary(&self, line: &str) -> bool {
        self.has_address_label(line)
            || self.has_name_label(line)
            || self.has_phone_label(line)
            || self.starts_with_stop_word(line)
    }

    /// The 11-digit number following a phone label, e.g. `电话：13800001111`.
    pub fn labelled_phone<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.labelled_phone
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// The token following a name label, e.g. `收件人：李雷`.
    pub fn labelled_name<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.labelled_name
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|value| !value.is_empty())
    }

    /// Returns the remainder when `text` starts with a name label.
    pub fn strip_leading_name_label<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.leading_name.find(text).map(|m| &text[m.end()..])
    }

    /// Returns the remainder when `text` starts with an address label.
    pub fn strip_leading_address_label<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.leading_address.find(text).map(|m| &text[m.end()..])
    }

    /// Drops a phone label sitting right before where the digits started.
    pub fn strip_trailing_phone_label<'a>(&self, text: &'a str) -> &'a str {
        match self.trailing_phone.find(text) {
            Some(m) => &text[..m.start()],
            None => text,
        }
    }

    /// Removes the first address label occurrence anywhere in `line`.
    pub fn remove_address_label<'a>(&self, line: &'a str) -> Cow<'a, str> {
        self.address.replace(line, "")
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::compile(&KeywordLists::builtin()).expect("builtin keywords compile")
    }
}

/// Escapes and joins labels into a non-capturing group, longest first so a
/// label that prefixes another never shadows it at the same position.
fn alternation(lists: &KeywordLists, kind: KeywordKind) -> Result<String, CoreError> {
    let labels = lists.get(kind);
    if labels.is_empty() {
        return Err(CoreError::EmptyKeywordList(kind));
    }

    let mut trimmed = Vec::with_capacity(labels.len());
    for label in labels {
        let label = label.trim();
        if label.is_empty() {
            return Err(CoreError::BlankKeyword(kind));
        }
        trimmed.push(label);
    }
    trimmed.sort_by_key(|label| std::cmp::Reverse(label.chars().count()));

    let escaped: Vec<String> = trimmed.iter().map(|label| bounded(label)).collect();
    Ok(format!("(?:{})", escaped.join("|")))
}

/// Escapes a label and adds a word boundary on each side that ends in an
/// ASCII letter or digit, so `Tel` does not match inside `Hotel`.
fn bounded(label: &str) -> String {
    let escaped = regex::escape(label);
    let ascii_edge = |ch: Option<char>| ch.is_some_and(|ch| ch.is_ascii_alphanumeric());
    let start = if ascii_edge(label.chars().next()) { r"\b" } else { "" };
    let end = if ascii_edge(label.chars().last()) { r"\b" } else { "" };
    format!("{start}{escaped}{end}")
}
