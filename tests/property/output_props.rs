//! Output property tests.
//!
//! - Both result views have length min(limit, spans)
//! - importance_rank runs 1..=N
//! - section_title is the first 100 characters of refined_text

use proptest::prelude::*;
use spanrank::{rank_spans, truncate_chars, InputConfig, Query, RankedResult, ScoredSpan};

use crate::common::{assert_result_well_formed, config_json, ROLE, TASK};
use spanrank::testing::make_span;
use crate::strategies::{corpus_strategy, query_strategy};

fn config() -> InputConfig {
    InputConfig::from_json(&config_json(ROLE, TASK, &["doc.pdf"])).unwrap()
}

/// Long text mixing multi-byte characters, to exercise title truncation.
fn long_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zé ü漢]{0,250}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: result length is min(limit, spans), ranks contiguous,
    /// titles are prefixes of the full text.
    #[test]
    fn prop_result_well_formed(
        corpus in corpus_strategy(),
        query in query_strategy(),
        limit in 1usize..20,
    ) {
        let spans = corpus.iter().map(|t| make_span("doc.pdf", 1, t)).collect();
        let ranked = rank_spans(spans, &Query::from(query.as_str())).unwrap();
        let result = RankedResult::build(&ranked, &config(), limit, "ts".to_string());

        assert_result_well_formed(&result, corpus.len().min(limit));
    }

    /// Property: truncation keeps at most 100 characters and is a prefix.
    #[test]
    fn prop_title_truncation(text in long_text_strategy()) {
        let title = truncate_chars(&text, 100);
        prop_assert!(title.chars().count() <= 100);
        prop_assert!(text.starts_with(title));
        if text.chars().count() <= 100 {
            prop_assert_eq!(title, text.as_str());
        }
    }

    /// Property: the builder pairs each section with the span at the same rank.
    #[test]
    fn prop_views_share_rank_order(texts in prop::collection::vec(long_text_strategy(), 0..15)) {
        let ranked: Vec<ScoredSpan> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| ScoredSpan {
                span: make_span("doc.pdf", i as u32 + 1, t),
                score: 1.0 / (i as f64 + 1.0),
            })
            .collect();
        let result = RankedResult::build(&ranked, &config(), 10, "ts".to_string());

        assert_result_well_formed(&result, texts.len().min(10));
        for (i, analysis) in result.subsection_analysis.iter().enumerate() {
            prop_assert_eq!(&analysis.refined_text, &texts[i]);
            prop_assert_eq!(analysis.page_number, i as u32 + 1);
        }
    }
}
