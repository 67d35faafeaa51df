use serde::{Deserialize, Serialize};

use docpact_core::types::Violation;

/// Final outcome of one enforcement run, ready for a formatter.
///
/// `violations` are sorted by (file, line) before the report is built, so
/// output is reproducible regardless of file-system enumeration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// True iff the violation list is empty.
    pub ok: bool,
    /// Repo-relative paths of the files that fell under some tier.
    pub files_checked: Vec<String>,
    pub violations: Vec<Violation>,
}

impl Report {
    pub fn from_violations(files_checked: Vec<String>, violations: Vec<Violation>) -> Self {
        Self {
            ok: violations.is_empty(),
            files_checked,
            violations,
        }
    }
}
