use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kb_ingest::config::{ChunkStrategy, Config};
use kb_ingest::ocr::OcrProvider;
use kb_ingest::processing::IngestPipeline;

#[derive(Parser)]
#[command(name = "kb-ingest")]
#[command(about = "Normalize, chunk, and tag a document for knowledge-base indexing")]
struct Args {
    /// Document to process; the extension selects the extraction strategy
    file: PathBuf,

    /// Chunking strategy: sentence | character
    #[arg(long)]
    strategy: Option<ChunkStrategy>,

    /// Word budget per chunk (sentence strategy)
    #[arg(long)]
    max_words: Option<usize>,

    /// Words carried over between consecutive chunks (sentence strategy)
    #[arg(long)]
    overlap_words: Option<usize>,

    /// Window size in characters (character strategy)
    #[arg(long)]
    max_chars: Option<usize>,

    /// Window overlap in characters (character strategy)
    #[arg(long)]
    overlap_chars: Option<usize>,

    /// Maximum number of derived tags
    #[arg(long)]
    max_tags: Option<usize>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(strategy) = self.strategy {
            config.chunking.strategy = strategy;
        }
        if let Some(max_words) = self.max_words {
            config.chunking.max_words = max_words;
        }
        if let Some(overlap_words) = self.overlap_words {
            config.chunking.overlap_words = overlap_words;
        }
        if let Some(max_chars) = self.max_chars {
            config.chunking.max_chars = max_chars;
        }
        if let Some(overlap_chars) = self.overlap_chars {
            config.chunking.overlap_chars = overlap_chars;
        }
        if let Some(max_tags) = self.max_tags {
            config.tagging.max_tags = max_tags;
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "kb_ingest=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = Config::from_env();
    args.apply(&mut config);

    let file_name = args
        .file
        .file_name()
        .and_then(|n| n.to_str())
        .map(String::from)
        .unwrap_or_default();
    let bytes = std::fs::read(&args.file)?;

    let ocr = OcrProvider::new(&config.ocr);
    let pipeline = IngestPipeline::new(ocr, config);
    let document = pipeline.process(&bytes, &file_name)?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    println!("{output}");

    Ok(())
}
