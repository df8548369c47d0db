//! Ranking property tests.
//!
//! - Scores are deterministic and bounded in [0, 1]
//! - Ranked output is sorted by descending score, ties in collection order
//! - Spans sharing no terms with the query score exactly 0
//! - A span equal to the query gets the top score

use std::collections::HashSet;

use proptest::prelude::*;
use spanrank::{rank_spans, tokenize, Query, Span};

use spanrank::testing::make_span;
use crate::strategies::{corpus_strategy, query_strategy, STOP_WORDS};

fn spans_from(corpus: &[String]) -> Vec<Span> {
    corpus
        .iter()
        .enumerate()
        .map(|(i, text)| make_span("doc.pdf", (i / 5) as u32 + 1, text))
        .collect()
}

fn content_terms(text: &str) -> HashSet<String> {
    tokenize(text)
        .into_iter()
        .filter(|t| !STOP_WORDS.contains(&t.as_str()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: ranking the same input twice gives identical scores and order.
    #[test]
    fn prop_ranking_deterministic(corpus in corpus_strategy(), query in query_strategy()) {
        let query = Query::from(query.as_str());
        let first = rank_spans(spans_from(&corpus), &query).unwrap();
        let second = rank_spans(spans_from(&corpus), &query).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: adjacent scores never increase.
    #[test]
    fn prop_scores_descending(corpus in corpus_strategy(), query in query_strategy()) {
        let ranked = rank_spans(spans_from(&corpus), &Query::from(query.as_str())).unwrap();
        for pair in ranked.windows(2) {
            prop_assert!(
                pair[0].score >= pair[1].score,
                "{} ranked above {}", pair[0].score, pair[1].score
            );
        }
    }

    /// Property: every score lies in [0, 1].
    #[test]
    fn prop_scores_bounded(corpus in corpus_strategy(), query in query_strategy()) {
        let ranked = rank_spans(spans_from(&corpus), &Query::from(query.as_str())).unwrap();
        for scored in &ranked {
            prop_assert!((0.0..=1.0).contains(&scored.score), "score {}", scored.score);
        }
    }

    /// Property: ranking is a permutation of the input.
    #[test]
    fn prop_ranking_keeps_every_span(corpus in corpus_strategy(), query in query_strategy()) {
        let ranked = rank_spans(spans_from(&corpus), &Query::from(query.as_str())).unwrap();
        prop_assert_eq!(ranked.len(), corpus.len());

        let mut expected = corpus.clone();
        let mut seen: Vec<String> = ranked.iter().map(|s| s.span.text.clone()).collect();
        expected.sort();
        seen.sort();
        prop_assert_eq!(seen, expected);
    }

    /// Property: spans with no query term in common score exactly 0,
    /// and spans with one score above 0.
    #[test]
    fn prop_zero_overlap_scores_zero(corpus in corpus_strategy(), query in query_strategy()) {
        let query_terms = content_terms(&query);
        let ranked = rank_spans(spans_from(&corpus), &Query::from(query.as_str())).unwrap();
        for scored in &ranked {
            let overlaps = !content_terms(&scored.span.text).is_disjoint(&query_terms);
            if overlaps {
                prop_assert!(scored.score > 0.0, "'{}' shares a term but scored 0", scored.span.text);
            } else {
                prop_assert_eq!(scored.score, 0.0);
            }
        }
    }

    /// Property: equal scores keep collection order.
    #[test]
    fn prop_ties_stable(corpus in corpus_strategy(), query in query_strategy()) {
        let spans = spans_from(&corpus);
        let original: Vec<(u32, String)> = spans.iter().map(|s| (s.page, s.text.clone())).collect();
        let ranked = rank_spans(spans, &Query::from(query.as_str())).unwrap();

        let position = |page: u32, text: &str, from: usize| {
            original.iter().enumerate().skip(from)
                .find(|(_, (p, t))| *p == page && t == text)
                .map(|(i, _)| i)
        };

        // Among zero-score spans (always tied), order must follow the input
        let mut last = 0usize;
        for scored in ranked.iter().filter(|s| s.score == 0.0) {
            let idx = position(scored.span.page, &scored.span.text, last);
            prop_assert!(idx.is_some(), "zero-score span out of collection order");
            last = idx.unwrap_or(0) + 1;
        }
    }

    /// Property: a span identical to the query ranks first with score 1.
    #[test]
    fn prop_identity_query_ranks_first(corpus in corpus_strategy(), query in query_strategy()) {
        let mut spans = spans_from(&corpus);
        spans.push(make_span("doc.pdf", 99, &query));
        let ranked = rank_spans(spans, &Query::from(query.as_str())).unwrap();

        prop_assert!((ranked[0].score - 1.0).abs() < 1e-9, "top score {}", ranked[0].score);
        let identity = ranked.iter().find(|s| s.span.page == 99).unwrap();
        prop_assert!((identity.score - ranked[0].score).abs() < 1e-9);
    }
}
