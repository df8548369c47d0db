// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Scores must be finite, in [0, 1], sorted, and deterministic. An empty
//! vocabulary is the only acceptable error.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spanrank::{rank_spans, Error, Query, Span, SpanFlags};

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    texts: Vec<String>,
}

fuzz_target!(|input: Input| {
    let spans: Vec<Span> = input
        .texts
        .iter()
        .take(64)
        .map(|text| Span {
            document: "fuzz.pdf".to_string(),
            text: text.clone(),
            page: 1,
            size: 10.0,
            flags: SpanFlags::empty(),
        })
        .collect();
    let query = Query::from(input.query.as_str());

    let first = rank_spans(spans.clone(), &query);
    let second = rank_spans(spans, &query);

    match (first, second) {
        (Ok(a), Ok(b)) => {
            // INVARIANT 1: Deterministic
            assert_eq!(a, b);
            for pair in a.windows(2) {
                // INVARIANT 2: Sorted descending
                assert!(pair[0].score >= pair[1].score);
            }
            for scored in &a {
                // INVARIANT 3: Finite and bounded
                assert!(scored.score.is_finite());
                assert!((0.0..=1.0).contains(&scored.score));
            }
        }
        (Err(Error::EmptyVocabulary), Err(Error::EmptyVocabulary)) => {}
        (a, b) => panic!("inconsistent results: {:?} / {:?}", a.is_ok(), b.is_ok()),
    }
});
