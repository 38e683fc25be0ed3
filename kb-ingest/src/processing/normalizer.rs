use std::sync::LazyLock;

use regex::Regex;

static FENCED_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static INLINE_CODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`[^`]*`").unwrap());
static IMAGE_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"!\[[^\]]*\]\([^)]*\)").unwrap());
static LINK_REF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static HEADING_MARKS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#+\s*").unwrap());
static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*([^*]+)\*\*").unwrap());
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static LIST_PUNCT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[_~>-]+").unwrap());

/// Strip markup and non-target characters from raw text and collapse
/// whitespace. The steps run in a fixed order; later patterns assume earlier
/// removals. Applying the function twice yields the same result as once.
pub fn normalize(text: &str) -> String {
    let text = FENCED_CODE.replace_all(text, " ");
    let text = INLINE_CODE.replace_all(&text, " ");
    let text = IMAGE_REF.replace_all(&text, " ");
    let text = LINK_REF.replace_all(&text, "$1");
    let text = HEADING_MARKS.replace_all(&text, " ");
    let text = BOLD.replace_all(&text, "$1");
    let text = ITALIC.replace_all(&text, "$1");
    let text = LIST_PUNCT.replace_all(&text, " ");

    // Allow-list filter: ASCII plus the Thai block. Everything else (emoji,
    // symbols, other scripts) becomes a space and is swallowed by the final
    // whitespace collapse.
    let filtered: String = text
        .chars()
        .map(|c| if is_allowed(c) { c } else { ' ' })
        .collect();

    filtered.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_allowed(c: char) -> bool {
    c.is_ascii() || ('\u{0E00}'..='\u{0E7F}').contains(&c)
}
