//! Image-to-text extraction via a local Tesseract engine.
//!
//! The engine is constructed once and injected into the pipeline; construction
//! never fails. When Tesseract (or the requested language data) is missing the
//! provider enters an explicit unavailable state, and using it yields a typed
//! `OcrUnavailable` error instead of silently returning empty text.

mod preprocessing;
mod provider;

pub use preprocessing::prepare_for_ocr;
pub use provider::OcrProvider;
