//! Error types for the extraction engine.
//!
//! Structural and parse mismatches are recovered per listing by the
//! aggregator; input and output failures are fatal to their call.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ScrapeError {
    /// An expected node, attribute or sibling is absent in the page.
    #[error("structural mismatch: {detail}")]
    StructuralMismatch {
        detail: String,
        context: Option<String>,
    },

    /// A value that must be numeric is not.
    #[error("could not parse {field} from '{value}'")]
    ParseMismatch { field: String, value: String },

    /// The input document path does not resolve to a readable file.
    #[error("cannot read input file '{path}': {reason}")]
    InputNotFound { path: PathBuf, reason: String },

    /// The export destination is invalid or unwritable.
    #[error("cannot write output file '{path}': {reason}")]
    OutputWriteFailure { path: PathBuf, reason: String },

    /// An engine call was made before `load()`.
    #[error("no document loaded; call load() first")]
    DocumentNotLoaded,

    /// A configured selector or regex pattern failed to compile.
    #[error("invalid structural pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },
}

impl ScrapeError {
    /// Create a structural mismatch with optional extraction context.
    pub fn structural_mismatch(detail: impl Into<String>, context: Option<&str>) -> Self {
        Self::StructuralMismatch {
            detail: detail.into(),
            context: context.map(|s| s.to_string()),
        }
    }

    /// Create a parse mismatch for a named field.
    pub fn parse_mismatch(field: &str, value: &str) -> Self {
        Self::ParseMismatch {
            field: field.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an input read failure.
    pub fn input_not_found(path: &Path, reason: &str) -> Self {
        Self::InputNotFound {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create an output write failure.
    pub fn output_write_failure(path: &Path, reason: &str) -> Self {
        Self::OutputWriteFailure {
            path: path.to_path_buf(),
            reason: reason.to_string(),
        }
    }

    /// Create a pattern compilation failure.
    pub fn invalid_pattern(pattern: &str, reason: &str) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Whether the run recovers from this error by marking one listing
    /// failed, rather than aborting.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::StructuralMismatch { .. } => true,
            Self::ParseMismatch { .. } => true,
            Self::InputNotFound { .. } => false,
            Self::OutputWriteFailure { .. } => false,
            Self::DocumentNotLoaded => false,
            Self::InvalidPattern { .. } => false,
        }
    }
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
