// Common error types for the postprocess tool

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PostprocessError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The source directory does not contain a CMakeLists.txt.
    /// The message wording is part of the build-pipeline contract.
    #[error("Parse path not exists: {}", .0.display())]
    MissingSource(PathBuf),

    /// A marker line the extractor could not split into a value.
    #[error("Malformed line in {file}: {line:?}")]
    MalformedLine { file: PathBuf, line: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PostprocessError {
    /// Process exit code for this error, reported by `main`.
    pub fn exit_code(&self) -> i32 {
        match self {
            PostprocessError::MissingSource(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PostprocessError>;
