use std::sync::LazyLock;

use regex::Regex;

static HEADING_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^\s*#\s*(.+)$").unwrap());

const MAX_TITLE_CHARS: usize = 200;

/// Pick a short representative title from raw, pre-normalization text: the
/// first Markdown heading if any, otherwise the first line longer than 10
/// characters with fewer than 20 whitespace-separated tokens. Returns `None`
/// when nothing qualifies. Never fails.
pub fn extract_title(text: &str) -> Option<String> {
    if let Some(caps) = HEADING_LINE.captures(text) {
        return Some(truncate_chars(caps[1].trim(), MAX_TITLE_CHARS));
    }

    for line in text.lines() {
        let candidate = line.trim();
        if candidate.chars().count() > 10 && candidate.split_whitespace().count() < 20 {
            return Some(truncate_chars(candidate, MAX_TITLE_CHARS));
        }
    }

    None
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
