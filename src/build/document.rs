use std::path::Path;

use indicatif::ProgressBar;
use log::debug;

use crate::error::Result;
use crate::extract::SpanSource;
use crate::types::Span;

use super::DocumentRef;

/// Parse every document in configured order and tag its spans with the
/// document's filename.
///
/// The result is one flat list: all spans of the first document, then all of
/// the second, and so on, each in parser order. The first document that fails
/// to parse aborts the collection.
pub fn collect_spans(
    input_dir: &Path,
    documents: &[DocumentRef],
    source: &dyn SpanSource,
) -> Result<Vec<Span>> {
    collect_spans_with_progress(input_dir, documents, source, &ProgressBar::hidden())
}

/// [`collect_spans`] with progress reporting.
pub fn collect_spans_with_progress(
    input_dir: &Path,
    documents: &[DocumentRef],
    source: &dyn SpanSource,
    progress: &ProgressBar,
) -> Result<Vec<Span>> {
    let mut spans = Vec::new();

    for doc in documents {
        progress.set_message(doc.filename.clone());
        let path = input_dir.join(&doc.filename);
        let raw = source.parse(&path)?;
        debug!("{}: {} spans", doc.filename, raw.len());

        spans.extend(raw.into_iter().map(|r| Span::from_raw(r, &doc.filename)));
        progress.inc(1);
    }

    Ok(spans)
}
