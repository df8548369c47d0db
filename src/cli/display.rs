// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the spanrank CLI.
//!
//! Plain ANSI colors when stdout is a terminal, nothing when it is piped or
//! `NO_COLOR` is set. Span dumps stay one line per span so they grep well.

use spanrank::{RawSpan, RunSummary, SpanFlags};

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

pub use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply color if TTY, otherwise return plain text
pub fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

/// Short label for style flags, e.g. `B I` for bold italic, `-` for none.
pub fn flags_label(flags: SpanFlags) -> String {
    let labels = [
        (SpanFlags::BOLD, "B"),
        (SpanFlags::ITALIC, "I"),
        (SpanFlags::SERIF, "S"),
        (SpanFlags::MONOSPACE, "M"),
        (SpanFlags::SUPERSCRIPT, "^"),
    ];
    let parts: Vec<&str> = labels
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .map(|(_, label)| *label)
        .collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" ")
    }
}

/// Pad string to the right to reach the target width.
pub fn pad_right(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - len))
    }
}

/// One line of a span dump: page, size, flags (label and raw bits), text.
pub fn span_line(span: &RawSpan) -> String {
    format!(
        "{} {} {} {}",
        color(CYAN, &pad_right(&format!("p{}", span.page), 5)),
        color(DIM, &pad_right(&format!("{:.1}pt", span.size), 8)),
        color(YELLOW, &pad_right(&format!("{} ({})", flags_label(span.flags), span.flags.bits()), 12)),
        span.text
    )
}

/// Print every span of a document to stdout.
pub fn print_spans(path: &str, spans: &[RawSpan]) {
    println!("{}", color(BOLD, &format!("{} ({} spans)", path, spans.len())));
    for span in spans {
        println!("{}", span_line(span));
    }
}

/// Final summary after a ranking run, on stderr.
pub fn print_summary(summary: &RunSummary) {
    eprintln!();
    eprintln!("✅ Ranking complete");
    eprintln!(
        "   {} documents │ {} spans │ top {} written to {}",
        summary.documents,
        summary.spans,
        summary.selected,
        summary.output_path.display()
    );
}
