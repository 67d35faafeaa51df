use clap::Parser;

use docpact_core::error::FatalError;
use docpact_core::types::ScopeSelection;

#[derive(Parser, Debug)]
#[command(name = "docpact", version, about = "Docstring contract enforcement for Python packages")]
#[command(group = clap::ArgGroup::new("scope").args(["staged", "range", "all"]).multiple(false))]
pub(crate) struct Cli {
    /// Check staged changes only (default)
    #[arg(long)]
    pub staged: bool,

    /// Git diff range, e.g. origin/main...HEAD
    #[arg(long, value_name = "BASE...HEAD")]
    pub range: Option<String>,

    /// Check everything the contract covers, regardless of git state
    #[arg(long)]
    pub all: bool,

    /// Package directory name under src/ (overrides auto-detection)
    #[arg(long, value_name = "NAME")]
    pub pkg: Option<String>,

    /// Output as structured JSON
    #[arg(long)]
    pub json: bool,

    /// Also list the files that were checked
    #[arg(long)]
    pub verbose: bool,
}

impl Cli {
    /// The validated scope for this invocation. Staged is the default when
    /// no scope flag is given.
    pub fn scope(&self) -> Result<ScopeSelection, FatalError> {
        if self.all {
            return Ok(ScopeSelection::All);
        }
        if let Some(range) = &self.range {
            let Some((base, head)) = range.split_once("...") else {
                return Err(FatalError::Arguments(format!(
                    "--range expects BASE...HEAD, got '{range}'"
                )));
            };
            if base.is_empty() || head.is_empty() {
                return Err(FatalError::Arguments(format!(
                    "--range expects BASE...HEAD, got '{range}'"
                )));
            }
            return Ok(ScopeSelection::Range {
                base: base.to_string(),
                head: head.to_string(),
            });
        }
        Ok(ScopeSelection::Staged)
    }
}
