use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Corrupt file: {0}")]
    CorruptFile(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Document contains no extractable text")]
    EmptyContent,

    #[error("Chunking produced no usable chunks")]
    NoChunksProduced,

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
