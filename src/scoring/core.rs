// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind span relevance.
//!
//! Each span and the query become TF-IDF vectors over a vocabulary built from
//! exactly this corpus: the query plus every span. Relevance is the cosine
//! of the angle between a span's vector and the query's vector.
//!
//! # Weighting
//!
//! ```text
//! idf(t)    = ln((1 + n) / (1 + df(t))) + 1
//! w(t, d)   = count(t, d) * idf(t)
//! v(d)      = w(·, d) / ||w(·, d)||₂
//! cos(q, d) = v(q) · v(d)
//! ```
//!
//! `n` is the corpus size including the query and `df(t)` the number of corpus
//! entries containing `t`. The `+ 1` terms smooth the IDF so that a term found
//! everywhere still carries weight 1 and never divides by zero.
//!
//! All weights are non-negative, so cosine scores land in `[0, 1]`. A text
//! with no vocabulary terms gets the zero vector and scores exactly 0.
//!
//! The vocabulary lives only as long as one [`TfidfVectorizer::fit_transform`]
//! call. It depends on the corpus, so nothing is cached between runs.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use super::stop_words::is_stop_word;
use crate::error::{Error, Result};
use crate::utils::tokenize;

/// A sparse, L2-normalized term vector.
///
/// Entries are `(term_index, weight)` sorted by term index, which keeps dot
/// products deterministic: the same pair of vectors always sums in the same
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Euclidean norm. 1.0 for non-zero vectors (up to rounding), 0.0 otherwise.
    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Dot product, merging the two sorted entry lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (ti, wi) = self.entries[i];
            let (tj, wj) = other.entries[j];
            if ti == tj {
                sum += wi * wj;
                i += 1;
                j += 1;
            } else if ti < tj {
                i += 1;
            } else {
                j += 1;
            }
        }
        sum
    }
}

/// Cosine similarity between two normalized vectors, clamped into `[0, 1]`.
///
/// Zero vectors score exactly 0 against anything.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return 0.0;
    }
    let na = a.norm();
    let nb = b.norm();
    (a.dot(b) / (na * nb)).clamp(0.0, 1.0)
}

/// Terms of `text` that survive stop-word removal.
fn content_terms(text: &str) -> Vec<String> {
    tokenize(text)
        .into_iter()
        .filter(|term| !is_stop_word(term))
        .collect()
}

/// A vocabulary fitted to one corpus.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fit the vocabulary and IDF weights to `corpus` and return one vector
    /// per corpus entry, in input order.
    ///
    /// Fails with [`Error::EmptyVocabulary`] when no entry has a single
    /// non-stop-word term.
    pub fn fit_transform(corpus: &[&str]) -> Result<(Self, Vec<SparseVector>)> {
        let tokenized: Vec<Vec<String>> = corpus.iter().map(|text| content_terms(text)).collect();

        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|doc| doc.iter().map(String::as_str))
            .collect();
        if terms.is_empty() {
            return Err(Error::EmptyVocabulary);
        }

        // Sorted term order gives stable indices for identical corpora
        let vocabulary: BTreeMap<String, usize> = terms
            .into_iter()
            .enumerate()
            .map(|(index, term)| (term.to_string(), index))
            .collect();

        let mut df = vec![0usize; vocabulary.len()];
        for doc in &tokenized {
            let unique: BTreeSet<usize> = doc.iter().map(|term| vocabulary[term]).collect();
            for index in unique {
                df[index] += 1;
            }
        }

        let n = corpus.len() as f64;
        let idf = df
            .iter()
            .map(|&count| ((1.0 + n) / (1.0 + count as f64)).ln() + 1.0)
            .collect();

        let vectorizer = TfidfVectorizer { vocabulary, idf };
        let vectors = tokenized
            .iter()
            .map(|doc| vectorizer.weigh(doc))
            .collect();

        Ok((vectorizer, vectors))
    }

    /// Number of distinct terms in the fitted vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Index of `term` in the vocabulary, if present.
    #[cfg(test)]
    pub(crate) fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of `term`, if present.
    #[cfg(test)]
    pub(crate) fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|index| self.idf[index])
    }

    /// Vectorize arbitrary text against the fitted vocabulary.
    ///
    /// Terms outside the vocabulary are ignored.
    #[cfg(test)]
    pub(crate) fn transform(&self, text: &str) -> SparseVector {
        self.weigh(&content_terms(text))
    }

    fn weigh(&self, terms: &[String]) -> SparseVector {
        let mut counts: HashMap<usize, usize> = HashMap::new();
        for term in terms {
            if let Some(&index) = self.vocabulary.get(term) {
                *counts.entry(index).or_insert(0) += 1;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, count)| (index, count as f64 * self.idf[index]))
            .collect();
        entries.sort_unstable_by_key(|(index, _)| *index);

        let norm = entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut entries {
                *w /= norm;
            }
        }
        SparseVector { entries }
    }
}
