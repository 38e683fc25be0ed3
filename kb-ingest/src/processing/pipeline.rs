use crate::config::{ChunkStrategy, Config};
use crate::error::{IngestError, Result};
use crate::models::{Chunk, ProcessedDocument};
use crate::ocr::OcrProvider;

use super::chunker::{CharWindowChunker, SentenceWindowChunker};
use super::{extract_title, normalize, ContentExtractor, KeywordTagger};

/// The document ingestion pipeline: extraction, normalization, chunking, and
/// metadata derivation behind one call. Stateless per invocation; safe to
/// share across threads.
pub struct IngestPipeline {
    extractor: ContentExtractor,
    config: Config,
}

impl IngestPipeline {
    pub fn new(ocr: OcrProvider, config: Config) -> Self {
        Self {
            extractor: ContentExtractor::new(ocr, config.ocr.clone()),
            config,
        }
    }

    /// Turn raw bytes plus a declared file name into a title, a tag set, and
    /// an ordered chunk sequence.
    pub fn process(&self, bytes: &[u8], file_name: &str) -> Result<ProcessedDocument> {
        let extracted = self.extractor.extract(bytes, file_name)?;

        if extracted.text.trim().is_empty() {
            return Err(IngestError::EmptyContent);
        }

        // Structure-aware extractors may already know the title; otherwise
        // fall back to the line heuristics over the raw text.
        let title = extracted
            .title
            .clone()
            .or_else(|| extract_title(&extracted.text));

        let tags = KeywordTagger::new(&self.config.tagging).tags(&extracted.text);

        let cleaned = normalize(&extracted.text);
        let pieces = match self.config.chunking.strategy {
            ChunkStrategy::Sentence => {
                SentenceWindowChunker::new(&self.config.chunking).chunk(&cleaned)
            }
            ChunkStrategy::Character => {
                CharWindowChunker::new(&self.config.chunking).chunk(&cleaned)
            }
        };

        if pieces.is_empty() {
            return Err(IngestError::NoChunksProduced);
        }

        let chunks: Vec<Chunk> = pieces
            .into_iter()
            .enumerate()
            .map(|(index, piece)| Chunk {
                index,
                text: piece.text,
                span: piece.span,
            })
            .collect();

        tracing::info!(
            file = %file_name,
            words = extracted.word_count,
            chunks = chunks.len(),
            tags = tags.len(),
            "document processed"
        );

        Ok(ProcessedDocument {
            title,
            tags,
            chunks,
        })
    }
}
