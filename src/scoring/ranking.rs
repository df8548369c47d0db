// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Span ranking: how spans get sorted.
//!
//! Spans are ordered by descending cosine score. Ties keep the order the
//! collector produced (document order, then position within the document),
//! so the same inputs always produce the same ranking.

use std::cmp::Ordering;

use log::debug;

use super::core::{cosine_similarity, TfidfVectorizer};
use crate::error::Result;
use crate::types::{Query, ScoredSpan, Span};

/// Compare two scored spans for ranking: higher score first.
///
/// Returns `Equal` on ties; callers rely on a stable sort to keep
/// collection order for those.
pub fn compare_scored(a: &ScoredSpan, b: &ScoredSpan) -> Ordering {
    b.score.total_cmp(&a.score)
}

/// Score every span against `query` and return them sorted by relevance.
///
/// The vocabulary is fitted to the query plus all span texts and dropped when
/// this call returns.
pub fn rank_spans(spans: Vec<Span>, query: &Query) -> Result<Vec<ScoredSpan>> {
    let corpus: Vec<&str> = std::iter::once(query.as_str())
        .chain(spans.iter().map(|span| span.text.as_str()))
        .collect();

    let (vectorizer, vectors) = TfidfVectorizer::fit_transform(&corpus)?;
    debug!(
        "Fitted vocabulary of {} terms over {} texts",
        vectorizer.vocabulary_len(),
        corpus.len()
    );

    let query_vector = &vectors[0];
    let mut scored: Vec<ScoredSpan> = spans
        .into_iter()
        .zip(&vectors[1..])
        .map(|(span, vector)| ScoredSpan {
            score: cosine_similarity(query_vector, vector),
            span,
        })
        .collect();

    // Vec::sort_by is stable
    scored.sort_by(compare_scored);
    Ok(scored)
}
