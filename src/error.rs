// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for a ranking run.
//!
//! Every variant is fatal. Nothing is retried and nothing is skipped: a bad
//! config, one unreadable PDF, or a corpus made entirely of stop words stops
//! the run before any output is written.

use std::path::PathBuf;

/// Result type alias for spanrank operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort a ranking run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input configuration is unreadable, malformed, or missing required keys.
    #[error("Invalid config {}: {reason}", path.display())]
    Config {
        /// Path of the configuration file
        path: PathBuf,
        /// Underlying read or parse error
        reason: String,
    },

    /// A referenced document is missing, unreadable, or not a parsable PDF.
    #[error("Failed to parse document {}: {reason}", path.display())]
    Document {
        /// Resolved path of the document
        path: PathBuf,
        /// Underlying parser error
        reason: String,
    },

    /// Query and spans produced no terms once stop words were removed.
    #[error("Empty vocabulary: query and spans contain only stop words or no words at all")]
    EmptyVocabulary,

    /// Writing the output failed.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// Path being written
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
