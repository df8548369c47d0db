// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Document parsing: PDF file in, ordered spans out.
//!
//! Parsing is a black box behind [`SpanSource`]. The production source,
//! [`PdfSpanSource`], hands the file to `pdf_oxide` and keeps only what the
//! ranker and the diagnostics need: trimmed text, page number, font size and
//! a style bitmask. Any error from the library is fatal for the document and,
//! through the collector, for the whole run.

use std::path::{Path, PathBuf};

use log::debug;
use pdf_oxide::layout::TextSpan;
use pdf_oxide::PdfDocument;

use crate::error::{Error, Result};
use crate::types::{RawSpan, SpanFlags};

/// Anything that can turn a document path into an ordered list of spans.
///
/// Implementations must return spans in page order, then layout order within
/// a page, and must drop spans whose trimmed text is empty.
pub trait SpanSource {
    fn parse(&self, path: &Path) -> Result<Vec<RawSpan>>;
}

/// [`SpanSource`] backed by `pdf_oxide`.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfSpanSource;

impl PdfSpanSource {
    pub fn new() -> Self {
        PdfSpanSource
    }
}

impl SpanSource for PdfSpanSource {
    fn parse(&self, path: &Path) -> Result<Vec<RawSpan>> {
        let fail = |reason: String| Error::Document {
            path: PathBuf::from(path),
            reason,
        };

        let mut doc = PdfDocument::open(path).map_err(|e| fail(e.to_string()))?;
        let page_count = doc.page_count().map_err(|e| fail(e.to_string()))?;

        let mut spans = Vec::new();
        for page_index in 0..page_count {
            let page_spans = doc
                .extract_spans(page_index)
                .map_err(|e| fail(format!("page {}: {}", page_index + 1, e)))?;
            let page = page_index as u32 + 1;
            spans.extend(
                page_spans
                    .iter()
                    .filter_map(|span| RawSpan::new(&span.text, page, span.font_size, span_flags(span))),
            );
        }

        debug!(
            "{}: {} spans across {} pages",
            path.display(),
            spans.len(),
            page_count
        );
        Ok(spans)
    }
}

/// Style bitmask for a `pdf_oxide` span.
///
/// Bold and italic come straight from the span. Serif and monospace are
/// guessed from the font name, since PDFs rarely carry those as attributes.
fn span_flags(span: &TextSpan) -> SpanFlags {
    let mut flags = font_name_flags(&span.font_name);
    if span.is_italic {
        flags |= SpanFlags::ITALIC;
    }
    if span.font_weight.is_bold() {
        flags |= SpanFlags::BOLD;
    }
    flags
}

fn font_name_flags(font_name: &str) -> SpanFlags {
    let name = font_name.to_lowercase();
    let mut flags = SpanFlags::empty();
    if ["mono", "courier", "consol"].iter().any(|m| name.contains(m)) {
        flags |= SpanFlags::MONOSPACE;
    }
    if (name.contains("serif") && !name.contains("sans")) || name.contains("times") {
        flags |= SpanFlags::SERIF;
    }
    flags
}
