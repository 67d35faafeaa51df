//! Output formatters for docpact reports.
//!
//! Provides two output modes:
//! - **Human** (default): the sorted violation list with a remediation
//!   footer, or a single OK line
//! - **JSON** (`--json`): machine-readable structured output
//!
//! Formatters only render; the process-exit decision belongs to the CLI.

pub mod human;
pub mod json;

use docpact_enforce::types::Report;

pub trait OutputFormatter {
    fn format_report(&self, report: &Report) -> String;
}
