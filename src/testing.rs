//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::extract::SpanSource;
use crate::types::{RawSpan, Span, SpanFlags};

/// Create a span with default size and flags.
pub fn make_span(document: &str, page: u32, text: &str) -> Span {
    Span {
        document: document.to_string(),
        text: text.to_string(),
        page,
        size: 11.0,
        flags: SpanFlags::empty(),
    }
}

/// In-memory span source keyed by file name.
///
/// Paths are resolved to their final component, so `input/guide.pdf` and
/// `guide.pdf` hit the same entry. Unknown files fail like a missing PDF would.
#[derive(Debug, Default, Clone)]
pub struct MemorySpanSource {
    documents: HashMap<String, Vec<RawSpan>>,
}

impl MemorySpanSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document whose spans are all on one page.
    pub fn with_page(mut self, filename: &str, page: u32, texts: &[&str]) -> Self {
        let spans = self.documents.entry(filename.to_string()).or_default();
        spans.extend(
            texts
                .iter()
                .filter_map(|text| RawSpan::new(text, page, 11.0, SpanFlags::empty())),
        );
        self
    }
}

impl SpanSource for MemorySpanSource {
    fn parse(&self, path: &Path) -> Result<Vec<RawSpan>> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.documents
            .get(&name)
            .cloned()
            .ok_or_else(|| Error::Document {
                path: PathBuf::from(path),
                reason: "No such file or directory".to_string(),
            })
    }
}
