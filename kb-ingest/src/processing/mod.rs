mod chunker;
mod extractor;
mod normalizer;
mod pipeline;
mod segmenter;
mod tagger;
mod title;

pub mod extractors;

pub use chunker::{CharWindowChunker, SentenceWindowChunker, TextSpan};
pub use extractor::ContentExtractor;
pub use normalizer::normalize;
pub use pipeline::IngestPipeline;
pub use segmenter::split_sentences;
pub use tagger::KeywordTagger;
pub use title::extract_title;
