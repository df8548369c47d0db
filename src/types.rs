// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types: spans at each stage of the pipeline, and the query.
//!
//! A span moves through three shapes. The parser produces a [`RawSpan`], the
//! collector tags it with its source document to make a [`Span`], and the
//! ranker attaches a similarity score to make a [`ScoredSpan`]. Each stage only
//! ever adds fields, so a span that has a score always has a document.

use bitflags::bitflags;

bitflags! {
    /// Style attributes of a span.
    ///
    /// Bit values follow the layout most PDF span extractors report, so a
    /// bitmask produced here reads the same as one from other tools.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SpanFlags: u32 {
        const SUPERSCRIPT = 1;
        const ITALIC = 1 << 1;
        const SERIF = 1 << 2;
        const MONOSPACE = 1 << 3;
        const BOLD = 1 << 4;
    }
}

/// One span of text as returned by a document parser.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSpan {
    /// Trimmed, non-empty text
    pub text: String,
    /// 1-based page number
    pub page: u32,
    /// Font size in points (diagnostic only)
    pub size: f32,
    /// Style flags (diagnostic only)
    pub flags: SpanFlags,
}

impl RawSpan {
    /// Build a span from untrimmed text, returning `None` when nothing is left
    /// after trimming.
    pub fn new(text: &str, page: u32, size: f32, flags: SpanFlags) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        Some(RawSpan {
            text: text.to_string(),
            page,
            size,
            flags,
        })
    }
}

/// A span tagged with the filename of the document it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub document: String,
    pub text: String,
    pub page: u32,
    pub size: f32,
    pub flags: SpanFlags,
}

impl Span {
    pub fn from_raw(raw: RawSpan, document: &str) -> Self {
        Span {
            document: document.to_string(),
            text: raw.text,
            page: raw.page,
            size: raw.size,
            flags: raw.flags,
        }
    }
}

/// A span with its cosine similarity to the query, in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSpan {
    pub span: Span,
    pub score: f64,
}

/// The bag of words every span is compared against.
///
/// Persona role and task are joined with a single space and treated as one
/// string; there is no weighting between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query(String);

impl Query {
    pub fn new(role: &str, task: &str) -> Self {
        Query(format!("{} {}", role, task))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Query {
    fn from(text: &str) -> Self {
        Query(text.to_string())
    }
}
