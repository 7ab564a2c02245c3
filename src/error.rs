// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for accessibility-analyzer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyzerError>;

#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Input could not be tokenized as markup at all. Aborts the analysis.
    #[error("Malformed markup: {0}")]
    MalformedMarkup(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
