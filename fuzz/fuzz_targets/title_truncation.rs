// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for tokenization and title truncation.
//!
//! Arbitrary UTF-8 must never panic the tokenizer, and truncation must never
//! cut inside a code point.

#![no_main]

use libfuzzer_sys::fuzz_target;
use spanrank::{tokenize, truncate_chars, SECTION_TITLE_CHARS};

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    // INVARIANT 1: Title is a prefix of at most 100 characters
    let title = truncate_chars(&text, SECTION_TITLE_CHARS);
    assert!(title.chars().count() <= SECTION_TITLE_CHARS);
    assert!(text.starts_with(title));

    // INVARIANT 2: Short texts are untouched
    if text.chars().count() <= SECTION_TITLE_CHARS {
        assert_eq!(title, &*text);
    }

    // INVARIANT 3: Tokens are lowercase and at least two characters
    for token in tokenize(&text) {
        assert!(token.chars().count() >= 2, "short token {:?}", token);
        assert!(token.chars().all(|c| c.is_alphanumeric() || c == '_'));
    }
});
