use unicode_segmentation::UnicodeSegmentation;

/// Units shorter than this (after trimming) carry too little meaning to stand
/// alone and are dropped rather than merged.
const MIN_UNIT_CHARS: usize = 20;

/// Split normalized text into sentence-like units. A unit ends where terminal
/// punctuation (`.`, `!`, `?`, `。`) or a literal newline is followed by
/// whitespace. Stateless and restartable.
pub fn split_sentences(text: &str) -> Vec<String> {
    let mut units = Vec::new();
    let mut current = String::new();

    for grapheme in text.graphemes(true) {
        let is_whitespace = grapheme.chars().all(char::is_whitespace);
        if is_whitespace && ends_at_boundary(&current) {
            push_unit(&mut current, &mut units);
        } else {
            current.push_str(grapheme);
        }
    }
    push_unit(&mut current, &mut units);

    units
}

fn ends_at_boundary(current: &str) -> bool {
    matches!(
        current.chars().last(),
        Some('.') | Some('!') | Some('?') | Some('。') | Some('\n')
    )
}

fn push_unit(current: &mut String, units: &mut Vec<String>) {
    let trimmed = current.trim();
    if trimmed.chars().count() > MIN_UNIT_CHARS {
        units.push(trimmed.to_string());
    }
    current.clear();
}
