//! Shared proptest strategies.

use proptest::prelude::*;

/// Words that are never stop words.
pub const CONTENT_WORDS: &[&str] = &[
    "paris", "nice", "trip", "plan", "beach", "museum", "hotel", "train", "wine", "market",
    "castle", "harbour", "festival", "itinerary", "budget", "café", "crème",
];

/// A few stop words to mix in.
pub const STOP_WORDS: &[&str] = &["the", "and", "of", "to", "for", "with"];

/// Generate a single word, mostly content words.
pub fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => prop::sample::select(CONTENT_WORDS).prop_map(str::to_string),
        1 => prop::sample::select(STOP_WORDS).prop_map(str::to_string),
    ]
}

/// Generate span text (one or more words).
pub fn span_text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..12).prop_map(|words| words.join(" "))
}

/// Generate a collection of span texts.
pub fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(span_text_strategy(), 1..30)
}

/// Generate a query that always contains at least one content word.
pub fn query_strategy() -> impl Strategy<Value = String> {
    (
        prop::sample::select(CONTENT_WORDS),
        prop::collection::vec(word_strategy(), 0..5),
    )
        .prop_map(|(first, rest)| {
            std::iter::once(first.to_string())
                .chain(rest)
                .collect::<Vec<_>>()
                .join(" ")
        })
}
