use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One reportable contract failure.
///
/// Violations are plain data: they are collected across all checked files,
/// merged, and sorted before rendering. They never abort a run — that is
/// what [`crate::error::FatalError`] is for.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Violation {
    /// File the violation points at (repo-relative in the final report).
    pub file: PathBuf,
    /// Line number (1-based).
    pub line: u32,
    /// Human-readable description of the broken rule.
    pub message: String,
}

impl Violation {
    pub fn new(file: impl Into<PathBuf>, line: u32, message: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            line,
            message: message.into(),
        }
    }
}

/// Which set of files a run inspects. Chosen once per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeSelection {
    /// Files different between the index and the last commit.
    Staged,
    /// Files differing between two named revisions.
    Range { base: String, head: String },
    /// The entry file, everything under the API directory, and every
    /// existing core module — independent of version-control state.
    All,
}
