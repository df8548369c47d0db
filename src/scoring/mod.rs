// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how spans get their numbers.
//!
//! Lexical similarity only. A span is relevant to the extent it shares
//! non-stop-word terms with the query, weighted by how rare those terms are
//! across the spans being ranked.

mod core;
pub mod ranking;
pub mod stop_words;

pub use core::*;
pub use ranking::{compare_scored, rank_spans};
