use tracing::debug;

use crate::extract::scan::address_value;
use crate::keywords::KeywordSet;

/// Collects an address spread over several lines, starting at the first
/// address-labelled line and stopping before the next labelled or stop-word
/// line.
pub fn collect_address_block(lines: &[&str], keywords: &KeywordSet) -> Option<String> {
    let start = lines
        .iter()
        .position(|line| keywords.has_address_label(line))?;

    let mut collected = address_value(lines[start], keywords);
    let continuation = lines[start + 1..]
        .iter()
        .take_while(|line| !keywords.is_block_boundary(line));
    let mut appended = 0usize;
    for line in continuation {
        collected.push(' ');
        collected.push_str(line);
        appended += 1;
    }
    debug!(start, appended, "address block collected");

    let collected = collected.trim();
    if collected.is_empty() {
        return None;
    }
    Some(collected.to_string())
}
