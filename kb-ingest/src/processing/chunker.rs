use crate::config::ChunkingConfig;

use super::segmenter::split_sentences;

/// Chunks below this word count are noise left over from aggressive
/// normalization and are discarded.
const MIN_CHUNK_WORDS: usize = 10;

/// A chunk candidate before the pipeline assigns indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    pub text: String,
    /// Word offsets for word windows, character offsets for character
    /// windows. `None` when overlap seeding re-joins text across a cut.
    pub span: Option<(usize, usize)>,
}

/// Sentence-window chunking: greedily packs sentence units into chunks of at
/// most `max_words` words, seeding each new chunk with the tail words of the
/// previous one. Falls back to plain word windows when segmentation finds no
/// usable sentences.
pub struct SentenceWindowChunker {
    max_words: usize,
    overlap_words: usize,
}

impl SentenceWindowChunker {
    pub fn new(config: &ChunkingConfig) -> Self {
        Self {
            max_words: config.max_words,
            overlap_words: config.overlap_words,
        }
    }

    pub fn chunk(&self, text: &str) -> Vec<TextSpan> {
        let sentences = split_sentences(text);

        // No boundaries worth packing: either every unit was dropped, or the
        // whole text came back as one boundary-less blob bigger than the
        // budget. Fixed word windows handle both.
        let unsegmentable = match sentences.as_slice() {
            [] => true,
            [only] => count_words(only) > self.max_words,
            _ => false,
        };
        if unsegmentable {
            return self.word_windows(text);
        }

        let mut chunks: Vec<String> = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut current_words = 0usize;

        for sentence in sentences {
            let words = count_words(&sentence);

            // A chunk with no sentences yet always accepts the next one, even
            // past the budget: a single oversized sentence must not stall the
            // walk.
            if current_words + words <= self.max_words || current.is_empty() {
                current.push(sentence);
                current_words += words;
                continue;
            }

            let closed = current.join(" ");
            match self.tail_words(&closed) {
                Some(carry) => {
                    current_words = count_words(&carry) + words;
                    current = vec![carry, sentence];
                }
                None => {
                    current_words = words;
                    current = vec![sentence];
                }
            }
            chunks.push(closed);
        }

        if !current.is_empty() {
            chunks.push(current.join(" "));
        }

        chunks.retain(|c| count_words(c) > MIN_CHUNK_WORDS);
        chunks
            .into_iter()
            .map(|text| TextSpan { text, span: None })
            .collect()
    }

    /// The last `overlap_words` words of a closed chunk, or `None` when
    /// carry-over is disabled.
    fn tail_words(&self, closed: &str) -> Option<String> {
        if self.overlap_words == 0 {
            return None;
        }
        let words: Vec<&str> = closed.split_whitespace().collect();
        let start = words.len().saturating_sub(self.overlap_words);
        Some(words[start..].join(" "))
    }

    fn word_windows(&self, text: &str) -> Vec<TextSpan> {
        let words: Vec<&str> = text.split_whitespace().collect();
        let stride = self.max_words.saturating_sub(self.overlap_words).max(1);

        let mut windows = Vec::new();
        let mut start = 0usize;
        while start < words.len() {
            let end = (start + self.max_words).min(words.len());
            windows.push(TextSpan {
                text: words[start..end].join(" "),
                span: Some((start, end)),
            });
            start += stride;
        }
        windows
    }
}

/// Character-window chunking: fixed windows over the character sequence, with
/// window edges snapped back to the nearest preceding newline so lines are not
/// split mid-way. Used directly when sentence segmentation is a poor fit
/// (code, tables, scripts without terminal punctuation).
pub struct CharWindowChunker {
    max_chars: usize,
    overlap_chars: usize,
}

impl CharWindowChunker {
    pub fn new(config: &ChunkingConfig) -> Self {
        Self {
            max_chars: config.max_chars.max(1),
            overlap_chars: config.overlap_chars,
        }
    }

    pub fn chunk(&self, text: &str) -> Vec<TextSpan> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }

        let mut windows = Vec::new();
        let mut start = 0usize;

        loop {
            let mut end = (start + self.max_chars).min(chars.len());

            // Snap a non-final edge back to just past the last newline in the
            // window; windows that contain no newline stay unsnapped.
            if end < chars.len() {
                if let Some(pos) = chars[start..end].iter().rposition(|&c| c == '\n') {
                    end = start + pos + 1;
                }
            }

            let segment: String = chars[start..end].iter().collect();
            let trimmed = segment.trim();
            if !trimmed.is_empty() {
                windows.push(TextSpan {
                    text: trimmed.to_string(),
                    span: Some((start, end)),
                });
            }

            if end >= chars.len() {
                break;
            }

            let next = end.saturating_sub(self.overlap_chars);
            // The walk must always advance, even when overlap >= window size.
            start = if next > start { next } else { end };
        }

        windows
    }
}

fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}
