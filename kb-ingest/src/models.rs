use serde::{Deserialize, Serialize};

/// File kind declared by the caller via the document's name/extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Text,
    Markdown,
    Json,
    Code,
    Pdf,
    Docx,
    Pptx,
    Image,
    Unknown,
}

const CODE_EXTENSIONS: &[&str] = &[
    "rs", "py", "js", "jsx", "ts", "tsx", "go", "java", "c", "h", "cpp", "hpp", "sh", "toml",
    "yaml", "yml",
];

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp", "tif", "tiff", "gif"];

impl DocumentKind {
    /// Map a file name to its kind via the extension, case-insensitively.
    /// Names without a recognized extension are `Unknown` and fall back to
    /// best-effort plain-text decoding downstream.
    pub fn from_name(file_name: &str) -> Self {
        let lower = file_name.to_lowercase();
        let Some(extension) = lower.rsplit('.').next().filter(|e| *e != lower) else {
            return DocumentKind::Unknown;
        };

        match extension {
            "txt" => DocumentKind::Text,
            "md" | "markdown" => DocumentKind::Markdown,
            "json" => DocumentKind::Json,
            "pdf" => DocumentKind::Pdf,
            "docx" => DocumentKind::Docx,
            "pptx" => DocumentKind::Pptx,
            ext if CODE_EXTENSIONS.contains(&ext) => DocumentKind::Code,
            ext if IMAGE_EXTENSIONS.contains(&ext) => DocumentKind::Image,
            _ => DocumentKind::Unknown,
        }
    }

    /// Kinds whose bytes are decoded directly as text.
    pub fn is_text_like(&self) -> bool {
        matches!(
            self,
            DocumentKind::Text
                | DocumentKind::Markdown
                | DocumentKind::Json
                | DocumentKind::Code
                | DocumentKind::Unknown
        )
    }
}

/// One bounded span of document text, sized for downstream embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    pub index: usize,
    pub text: String,
    /// Word indices (word-window fallback) or character indices (character
    /// windows) into the normalized text. Absent for sentence windows, where
    /// overlap seeding re-joins text across the cut.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<(usize, usize)>,
}

/// Everything the pipeline derives from one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedDocument {
    pub title: Option<String>,
    pub tags: Vec<String>,
    pub chunks: Vec<Chunk>,
}
