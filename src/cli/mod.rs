// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the spanrank command-line interface.
//!
//! With no arguments the binary runs the ranking job on the fixed container
//! paths under `/app`. Every path can be overridden by a flag or environment
//! variable. The `spans` subcommand prints what the parser sees in one PDF,
//! including the font size and style flags that ranking ignores.

pub mod display;

use clap::{Parser, Subcommand};

pub const DEFAULT_CONFIG: &str = "/app/input/challenge1b_input.json";
pub const DEFAULT_INPUT_DIR: &str = "/app/input";
pub const DEFAULT_OUTPUT: &str = "/app/output/challenge1b_output.json";

#[derive(Parser, Debug)]
#[command(
    name = "spanrank",
    about = "Rank PDF text spans against a persona and task",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input configuration JSON (persona, job_to_be_done, documents)
    #[arg(long, env = "SPANRANK_CONFIG", default_value = DEFAULT_CONFIG)]
    pub config: String,

    /// Directory containing the configured PDF files
    #[arg(long, env = "SPANRANK_INPUT_DIR", default_value = DEFAULT_INPUT_DIR)]
    pub input_dir: String,

    /// Output JSON file (parent directory is created if missing)
    #[arg(long, env = "SPANRANK_OUTPUT", default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Number of top-ranked spans to keep
    #[arg(long, env = "SPANRANK_LIMIT", default_value_t = spanrank::DEFAULT_LIMIT)]
    pub limit: usize,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the spans extracted from a single PDF
    Spans {
        /// Path to the PDF file
        file: String,
    },
}
