//! Persona-driven ranking of PDF text spans.
//!
//! Given a persona, a task and a set of PDFs, this crate pulls every text span
//! out of the documents, scores each one by TF-IDF cosine similarity to the
//! persona/task query, and writes the best spans as JSON.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  extract.rs  │────▶│   build/     │────▶│  scoring/    │────▶│  output.rs   │
//! │ (SpanSource, │     │(collect_spans│     │ (TF-IDF,     │     │(RankedResult,│
//! │ PdfSpanSource│     │ run_ranking) │     │  rank_spans) │     │ write_result)│
//! └──────────────┘     └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Everything runs once, in order, on one thread. Any failure (bad config,
//! unreadable PDF, empty vocabulary, write error) ends the run with no output.
//!
//! # Usage
//!
//! ```ignore
//! use spanrank::{run_ranking, PdfSpanSource, RunOptions};
//!
//! let options = RunOptions::new("input/config.json", "input", "output/result.json");
//! let summary = run_ranking(&options, &PdfSpanSource::new())?;
//! ```

pub mod build;
pub mod error;
pub mod extract;
pub mod output;
pub mod scoring;
pub mod testing;
mod types;
mod utils;

pub use build::{
    collect_spans, rank_config, run_ranking, DocumentRef, InputConfig, RunOptions, RunSummary,
};
pub use error::{Error, Result};
pub use extract::{PdfSpanSource, SpanSource};
pub use output::{
    processing_timestamp, write_result, ExtractedSection, Metadata, RankedResult,
    SubsectionAnalysis, DEFAULT_LIMIT, SECTION_TITLE_CHARS,
};
pub use scoring::{cosine_similarity, rank_spans, SparseVector, TfidfVectorizer};
pub use types::{Query, RawSpan, ScoredSpan, Span, SpanFlags};
pub use utils::{tokenize, truncate_chars};
