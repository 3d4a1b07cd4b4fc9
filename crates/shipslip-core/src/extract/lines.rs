/// Splits pasted text into trimmed, non-empty lines. A lone `\r` counts as a
/// line break.
pub fn normalize_lines(raw: &str) -> Vec<&str> {
    raw.split(['\r', '\n'])
        .map(|line| line.trim_matches(|ch: char| ch.is_whitespace() || ch == '\u{feff}'))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Whitespace- and comma-separated tokens, including fullwidth commas.
pub(crate) fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|ch: char| ch.is_whitespace() || ch == ',' || ch == '，')
        .filter(|token| !token.is_empty())
}
