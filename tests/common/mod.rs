//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use spanrank::RankedResult;

/// Persona role used across end-to-end fixtures.
pub const ROLE: &str = "Travel Planner";

/// Task used across end-to-end fixtures.
pub const TASK: &str = "Plan a trip";

/// Build config JSON for the given document filenames.
pub fn config_json(role: &str, task: &str, filenames: &[&str]) -> String {
    let documents: Vec<String> = filenames
        .iter()
        .map(|f| format!(r#"{{"filename": "{}", "title": "{}"}}"#, f, f.trim_end_matches(".pdf")))
        .collect();
    format!(
        r#"{{
    "challenge_info": {{"challenge_id": "round_1b_test", "test_case_name": "fixture"}},
    "documents": [{}],
    "persona": {{"role": "{}"}},
    "job_to_be_done": {{"task": "{}"}}
}}"#,
        documents.join(", "),
        role,
        task
    )
}

/// Write a config file into `dir` and return its path.
pub fn write_config(dir: &Path, role: &str, task: &str, filenames: &[&str]) -> PathBuf {
    let path = dir.join("challenge1b_input.json");
    fs::write(&path, config_json(role, task, filenames)).unwrap();
    path
}

/// Read and parse a written result file.
pub fn read_result(path: &Path) -> RankedResult {
    let content = fs::read_to_string(path).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Check every structural invariant of a result.
pub fn assert_result_well_formed(result: &RankedResult, expected_len: usize) {
    assert_eq!(result.extracted_sections.len(), expected_len);
    assert_eq!(result.subsection_analysis.len(), expected_len);

    for (i, (section, analysis)) in result
        .extracted_sections
        .iter()
        .zip(&result.subsection_analysis)
        .enumerate()
    {
        assert_eq!(section.importance_rank, i + 1, "ranks must be contiguous from 1");
        assert_eq!(section.document, analysis.document);
        assert_eq!(section.page_number, analysis.page_number);
        assert!(section.page_number >= 1);

        let expected_title: String = analysis.refined_text.chars().take(100).collect();
        assert_eq!(section.section_title, expected_title);
    }
}
