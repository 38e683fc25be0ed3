use std::sync::Mutex;

use leptess::LepTess;
use tracing::{info, warn};

use crate::config::OcrConfig;
use crate::error::{IngestError, Result};

enum OcrBackend {
    Local { tesseract: Mutex<LepTess> },
    Unavailable { reason: String },
}

pub struct OcrProvider {
    backend: OcrBackend,
}

impl OcrProvider {
    pub fn new(config: &OcrConfig) -> Self {
        let backend = match LepTess::new(None, &config.languages) {
            Ok(lt) => {
                info!(languages = %config.languages, "Tesseract OCR initialized");
                OcrBackend::Local {
                    tesseract: Mutex::new(lt),
                }
            }
            Err(e) => {
                let reason = format!("Tesseract not available: {e}");
                warn!("{}", reason);
                OcrBackend::Unavailable { reason }
            }
        };

        Self { backend }
    }

    pub fn unavailable(reason: &str) -> Self {
        Self {
            backend: OcrBackend::Unavailable {
                reason: reason.to_string(),
            },
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self.backend, OcrBackend::Unavailable { .. })
    }

    /// Run recognition over preprocessed image bytes.
    pub fn recognize(&self, image_bytes: &[u8]) -> Result<String> {
        match &self.backend {
            OcrBackend::Local { tesseract } => {
                let mut lt = tesseract
                    .lock()
                    .map_err(|_| IngestError::Ocr("Tesseract handle poisoned".to_string()))?;
                lt.set_image_from_mem(image_bytes)
                    .map_err(|e| IngestError::Ocr(format!("Failed to set image: {e}")))?;
                let text = lt
                    .get_utf8_text()
                    .map_err(|e| IngestError::Ocr(format!("Failed to extract text: {e}")))?;
                Ok(text.trim().to_string())
            }
            OcrBackend::Unavailable { reason } => {
                Err(IngestError::OcrUnavailable(reason.clone()))
            }
        }
    }
}
