// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking run: config in, JSON result out.
//!
//! One pass, in order: read the config, parse every document, rank all spans
//! against the persona/task query, keep the top N, write the result. Any
//! error stops the run before the output file is touched.

pub mod document;
pub mod manifest;

use std::path::{Path, PathBuf};

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use crate::error::Result;
use crate::extract::SpanSource;
use crate::output::{processing_timestamp, write_result, RankedResult, DEFAULT_LIMIT};
use crate::scoring::rank_spans;

pub use document::*;
pub use manifest::*;

/// Paths and limits for one run.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Input configuration JSON
    pub config_path: PathBuf,
    /// Directory the configured filenames are resolved against
    pub input_dir: PathBuf,
    /// Output JSON file
    pub output_path: PathBuf,
    /// Number of spans kept in the output
    pub limit: usize,
    /// Show a progress bar while parsing documents
    pub progress: bool,
}

impl RunOptions {
    pub fn new(
        config_path: impl Into<PathBuf>,
        input_dir: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
    ) -> Self {
        RunOptions {
            config_path: config_path.into(),
            input_dir: input_dir.into(),
            output_path: output_path.into(),
            limit: DEFAULT_LIMIT,
            progress: false,
        }
    }
}

/// Summary of a finished run.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub documents: usize,
    pub spans: usize,
    pub selected: usize,
    pub output_path: PathBuf,
}

/// Create a progress style for the document progress bar
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

/// Run the whole pipeline and write the result to `options.output_path`.
pub fn run_ranking(options: &RunOptions, source: &dyn SpanSource) -> Result<RunSummary> {
    // 1. Read config
    let config = InputConfig::load(&options.config_path)?;
    info!(
        "Ranking {} documents for persona '{}'",
        config.documents.len(),
        config.persona.role
    );

    // 2. Parse documents
    let result = rank_config(&config, &options.input_dir, options.limit, source, options.progress)?;

    // 3. Write atomically
    write_result(&options.output_path, &result.result)?;
    info!("Wrote {}", options.output_path.display());

    Ok(RunSummary {
        documents: config.documents.len(),
        spans: result.spans_considered,
        selected: result.result.extracted_sections.len(),
        output_path: options.output_path.clone(),
    })
}

/// A built result plus how many spans it was chosen from.
pub struct BuiltResult {
    pub result: RankedResult,
    pub spans_considered: usize,
}

/// Collect, rank and select for an already loaded config. Writes nothing.
pub fn rank_config(
    config: &InputConfig,
    input_dir: &Path,
    limit: usize,
    source: &dyn SpanSource,
    show_progress: bool,
) -> Result<BuiltResult> {
    let progress = if show_progress {
        let pb = ProgressBar::new(config.documents.len() as u64);
        pb.set_style(create_progress_style());
        pb.set_prefix("Parsing");
        pb
    } else {
        ProgressBar::hidden()
    };

    let spans = collect_spans_with_progress(input_dir, &config.documents, source, &progress)?;
    progress.finish_with_message(format!("{} spans", spans.len()));
    info!("Collected {} spans", spans.len());

    let spans_considered = spans.len();
    let ranked = rank_spans(spans, &config.query())?;

    let result = RankedResult::build(&ranked, config, limit, processing_timestamp());
    Ok(BuiltResult {
        result,
        spans_considered,
    })
}
