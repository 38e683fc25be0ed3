use crate::config::OcrConfig;
use crate::error::{IngestError, Result};
use crate::models::DocumentKind;
use crate::ocr::OcrProvider;

use super::extractors::{DocxExtractor, ExtractedContent, ImageExtractor, PptxExtractor};

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_MAGIC: &[u8] = &[0x50, 0x4B, 0x03, 0x04];

/// Extraction dispatcher: routes raw bytes to a decoding strategy based on the
/// declared file name, producing raw text or a typed failure.
pub struct ContentExtractor {
    ocr: OcrProvider,
    ocr_config: OcrConfig,
}

impl ContentExtractor {
    pub fn new(ocr: OcrProvider, ocr_config: OcrConfig) -> Self {
        Self { ocr, ocr_config }
    }

    pub fn extract(&self, bytes: &[u8], file_name: &str) -> Result<ExtractedContent> {
        let kind = DocumentKind::from_name(file_name);
        tracing::debug!(file = %file_name, ?kind, size = bytes.len(), "extracting document");

        match kind {
            DocumentKind::Pdf => Self::extract_pdf(bytes),
            DocumentKind::Docx => {
                Self::ensure_zip(bytes, "DOCX")?;
                DocxExtractor::extract(bytes)
            }
            DocumentKind::Pptx => {
                Self::ensure_zip(bytes, "PPTX")?;
                PptxExtractor::extract(bytes)
            }
            DocumentKind::Image => ImageExtractor::extract(bytes, &self.ocr, &self.ocr_config),
            kind => Self::extract_plain(bytes, kind),
        }
    }

    /// Decode text-like bytes: UTF-8 first, then a permissive single-byte
    /// (Latin-1) fallback. Bytes that look binary (embedded NUL) fail with
    /// `DecodeError`, or `UnsupportedFormat` when nothing about the name told
    /// us it was text in the first place.
    fn extract_plain(bytes: &[u8], kind: DocumentKind) -> Result<ExtractedContent> {
        let text = match std::str::from_utf8(bytes) {
            Ok(text) => text.to_string(),
            Err(_) if bytes.contains(&0) => {
                return Err(match kind {
                    DocumentKind::Unknown => IngestError::UnsupportedFormat(
                        "unrecognized extension and content is not text".to_string(),
                    ),
                    _ => IngestError::DecodeError(
                        "not valid UTF-8 and contains binary data".to_string(),
                    ),
                });
            }
            Err(_) => bytes.iter().map(|&b| b as char).collect(),
        };

        Ok(Self::content(text, None, kind))
    }

    fn extract_pdf(bytes: &[u8]) -> Result<ExtractedContent> {
        if !bytes.starts_with(PDF_MAGIC) {
            return Err(IngestError::CorruptFile(
                "missing PDF header".to_string(),
            ));
        }

        let text = pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| IngestError::CorruptFile(format!("PDF extraction failed: {e}")))?;

        Ok(Self::content(text, None, DocumentKind::Pdf))
    }

    fn ensure_zip(bytes: &[u8], label: &str) -> Result<()> {
        if bytes.starts_with(ZIP_MAGIC) {
            Ok(())
        } else {
            Err(IngestError::CorruptFile(format!(
                "{label} is not a ZIP container"
            )))
        }
    }

    pub(crate) fn content(
        text: String,
        title: Option<String>,
        kind: DocumentKind,
    ) -> ExtractedContent {
        let word_count = text.split_whitespace().count();
        ExtractedContent {
            text,
            title,
            kind,
            word_count,
        }
    }
}
