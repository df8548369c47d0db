// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result building and writing.
//!
//! The output holds two parallel views of the same top-ranked spans:
//! `extracted_sections` (short title plus rank) and `subsection_analysis`
//! (full text). Both are built in one pass over the same slice, so they always
//! have the same length and order.
//!
//! The file is written to a temporary sibling and renamed into place. A run
//! that fails halfway leaves either the previous file or nothing, never a
//! truncated JSON document.

use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::build::InputConfig;
use crate::error::{Error, Result};
use crate::types::ScoredSpan;
use crate::utils::truncate_chars;

/// Default number of spans kept in the output.
pub const DEFAULT_LIMIT: usize = 10;

/// Maximum length of `section_title`, in characters.
pub const SECTION_TITLE_CHARS: usize = 100;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Metadata {
    pub input_documents: Vec<String>,
    pub persona: String,
    pub job_to_be_done: String,
    pub processing_timestamp: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExtractedSection {
    pub document: String,
    pub section_title: String,
    pub importance_rank: usize,
    pub page_number: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SubsectionAnalysis {
    pub document: String,
    pub refined_text: String,
    pub page_number: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RankedResult {
    pub metadata: Metadata,
    pub extracted_sections: Vec<ExtractedSection>,
    pub subsection_analysis: Vec<SubsectionAnalysis>,
}

impl RankedResult {
    /// Assemble the output from ranked spans.
    ///
    /// Keeps the first `limit` spans, or all of them when there are fewer.
    /// `input_documents` lists the configured documents in configured order,
    /// not ranked order.
    pub fn build(
        ranked: &[ScoredSpan],
        config: &InputConfig,
        limit: usize,
        processing_timestamp: String,
    ) -> Self {
        let top = &ranked[..ranked.len().min(limit)];

        let extracted_sections = top
            .iter()
            .enumerate()
            .map(|(i, scored)| ExtractedSection {
                document: scored.span.document.clone(),
                section_title: truncate_chars(&scored.span.text, SECTION_TITLE_CHARS).to_string(),
                importance_rank: i + 1,
                page_number: scored.span.page,
            })
            .collect();

        let subsection_analysis = top
            .iter()
            .map(|scored| SubsectionAnalysis {
                document: scored.span.document.clone(),
                refined_text: scored.span.text.clone(),
                page_number: scored.span.page,
            })
            .collect();

        RankedResult {
            metadata: Metadata {
                input_documents: config.filenames(),
                persona: config.persona.role.clone(),
                job_to_be_done: config.job_to_be_done.task.clone(),
                processing_timestamp,
            },
            extracted_sections,
            subsection_analysis,
        }
    }
}

/// Current local time as naive ISO-8601 with microseconds,
/// e.g. `2025-07-10T14:03:22.418305`. No UTC offset is attached.
pub fn processing_timestamp() -> String {
    Local::now()
        .naive_local()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Write `result` as pretty-printed JSON, atomically.
///
/// Creates the parent directory if it does not exist. Non-ASCII text is
/// written as UTF-8, unescaped.
pub fn write_result(path: &Path, result: &RankedResult) -> Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;

    let mut tmp = NamedTempFile::new_in(parent).map_err(|e| Error::io(parent, e))?;
    serde_json::to_writer_pretty(&mut tmp, result)
        .map_err(|e| Error::io(path, std::io::Error::from(e)))?;
    tmp.flush().map_err(|e| Error::io(path, e))?;
    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}
