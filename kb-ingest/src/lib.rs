pub mod config;
pub mod error;
pub mod models;
pub mod ocr;
pub mod processing;

pub use config::Config;
pub use error::{IngestError, Result};
pub use models::{Chunk, DocumentKind, ProcessedDocument};
pub use processing::IngestPipeline;
