use serde::Deserialize;
use std::env;
use std::str::FromStr;

fn parse_env_or<T: FromStr>(var: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match env::var(var) {
        Ok(val) => match val.parse() {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Invalid value '{}' for {}: {}. Using default.", val, var, e);
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub chunking: ChunkingConfig,
    pub tagging: TaggingConfig,
    pub ocr: OcrConfig,
}

/// Which chunking strategy the pipeline runs on normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkStrategy {
    Sentence,
    Character,
}

impl FromStr for ChunkStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sentence" => Ok(ChunkStrategy::Sentence),
            "character" => Ok(ChunkStrategy::Character),
            other => Err(format!(
                "unknown chunk strategy '{other}' (expected 'sentence' or 'character')"
            )),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChunkingConfig {
    pub strategy: ChunkStrategy,
    pub max_words: usize,
    pub overlap_words: usize,
    pub max_chars: usize,
    pub overlap_chars: usize,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            strategy: parse_env_or("CHUNK_STRATEGY", ChunkStrategy::Sentence),
            max_words: parse_env_or("CHUNK_MAX_WORDS", 300),
            overlap_words: parse_env_or("CHUNK_OVERLAP_WORDS", 50),
            max_chars: parse_env_or("CHUNK_MAX_CHARS", 1000),
            overlap_chars: parse_env_or("CHUNK_OVERLAP_CHARS", 200),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TaggingConfig {
    pub max_tags: usize,
    pub min_token_len: usize,
}

impl Default for TaggingConfig {
    fn default() -> Self {
        Self {
            max_tags: parse_env_or("MAX_TAGS", 5),
            min_token_len: parse_env_or("TAG_MIN_TOKEN_LEN", 4),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub languages: String,
    pub max_image_dimension: u32,
    pub min_image_dimension: u32,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            languages: env::var("OCR_LANGUAGES").unwrap_or_else(|_| "tha+eng".to_string()),
            max_image_dimension: parse_env_or("OCR_MAX_DIMENSION", 4096),
            min_image_dimension: parse_env_or("OCR_MIN_DIMENSION", 50),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chunking: ChunkingConfig::default(),
            tagging: TaggingConfig::default(),
            ocr: OcrConfig::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::default()
    }
}
