use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::TaggingConfig;

static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Zก-๙]{3,}").unwrap());

/// High-frequency filler words in both target languages, never useful as tags.
const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "from", "การ", "และ", "ของ", "ที่", "ใน", "เป็น", "คือ", "จะ", "ได้",
];

/// Tags must stay within this length band after all other filtering.
const TAG_LEN_RANGE: std::ops::RangeInclusive<usize> = 2..=40;

/// Frequency-based keyword extraction over Latin and Thai tokens. Purely
/// lexical: no semantic classification, no external state.
pub struct KeywordTagger {
    max_tags: usize,
    min_token_len: usize,
}

impl KeywordTagger {
    pub fn new(config: &TaggingConfig) -> Self {
        Self {
            max_tags: config.max_tags,
            min_token_len: config.min_token_len,
        }
    }

    /// Top `max_tags` tokens by descending frequency. Ties keep
    /// first-occurrence order (the sort is stable over an occurrence-ordered
    /// list), so identical input always yields identical tag order.
    pub fn tags(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();

        let mut order: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for token in TOKEN.find_iter(&lowered) {
            let token = token.as_str();
            if token.chars().count() < self.min_token_len {
                continue;
            }
            if STOP_WORDS.contains(&token) {
                continue;
            }
            match positions.get(token) {
                Some(&at) => order[at].1 += 1,
                None => {
                    positions.insert(token.to_string(), order.len());
                    order.push((token.to_string(), 1));
                }
            }
        }

        order.sort_by(|a, b| b.1.cmp(&a.1));
        order
            .into_iter()
            .take(self.max_tags)
            .map(|(token, _)| token)
            .filter(|token| TAG_LEN_RANGE.contains(&token.chars().count()))
            .collect()
    }
}
