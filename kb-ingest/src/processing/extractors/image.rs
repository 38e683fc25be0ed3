use crate::config::OcrConfig;
use crate::error::{IngestError, Result};
use crate::models::DocumentKind;
use crate::ocr::{prepare_for_ocr, OcrProvider};
use crate::processing::ContentExtractor;

use super::ExtractedContent;

pub struct ImageExtractor;

impl ImageExtractor {
    /// Recognize text in an image. The availability check comes first: a
    /// missing OCR engine must fail loudly, because empty text is
    /// indistinguishable from "nothing to extract" downstream.
    pub fn extract(
        bytes: &[u8],
        ocr: &OcrProvider,
        config: &OcrConfig,
    ) -> Result<ExtractedContent> {
        if !ocr.is_available() {
            return Err(IngestError::OcrUnavailable(
                "OCR engine not available, cannot process image".to_string(),
            ));
        }

        let prepared = prepare_for_ocr(bytes, config)?;
        let text = ocr.recognize(&prepared)?;

        Ok(ContentExtractor::content(text, None, DocumentKind::Image))
    }
}
