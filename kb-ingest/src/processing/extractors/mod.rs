use crate::models::DocumentKind;

/// Raw text pulled out of a document by the extraction dispatcher, before any
/// normalization. `title` is only set by extractors that can read document
/// structure (DOCX styles, PPTX slides).
#[derive(Debug)]
pub struct ExtractedContent {
    pub text: String,
    pub title: Option<String>,
    pub kind: DocumentKind,
    pub word_count: usize,
}

pub mod docx;
pub mod image;
pub mod pptx;

pub use docx::DocxExtractor;
pub use image::ImageExtractor;
pub use pptx::PptxExtractor;
