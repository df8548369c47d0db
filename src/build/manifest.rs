use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Query;

/// Input configuration: who is asking, what they want, and which documents
/// to read.
#[derive(Deserialize, Clone, Debug)]
pub struct InputConfig {
    pub persona: Persona,
    pub job_to_be_done: JobToBeDone,
    pub documents: Vec<DocumentRef>,
    /// Free-form challenge metadata, carried through but never used
    #[serde(default)]
    pub challenge_info: Option<serde_json::Value>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct Persona {
    pub role: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct JobToBeDone {
    pub task: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct DocumentRef {
    pub filename: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl InputConfig {
    /// Read and parse a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: format!("Failed to read: {}", e),
        })?;
        Self::from_json(&content).map_err(|reason| Error::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse a config from JSON text.
    pub fn from_json(json: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Invalid config JSON: {}", e))
    }

    /// The query every span is ranked against.
    pub fn query(&self) -> Query {
        Query::new(&self.persona.role, &self.job_to_be_done.task)
    }

    /// Filenames in configured order.
    pub fn filenames(&self) -> Vec<String> {
        self.documents.iter().map(|d| d.filename.clone()).collect()
    }
}
