use std::path::{Path, PathBuf};

use docpact_core::config::DocpactConfig;
use docpact_core::error::FatalError;
use docpact_core::types::{ScopeSelection, Violation};
use docpact_parsers::python::PyParser;

use crate::checks::{check_api_file, check_core_module, check_entry};
use crate::classify::{PackageLayout, Tier};
use crate::scope::{select_targets, ChangeLister};
use crate::types::Report;

/// Core contract engine. Owns the parser and drives the per-tier checks
/// over a resolved scope.
///
/// Processing order between files carries no meaning; the final report is
/// sorted by (file, line) so output is deterministic regardless of how the
/// scope was enumerated.
pub struct ContractEngine {
    layout: PackageLayout,
    escape_tokens: Vec<String>,
    parser: PyParser,
}

impl ContractEngine {
    pub fn new(layout: PackageLayout, config: &DocpactConfig) -> Self {
        Self {
            layout,
            escape_tokens: config.escape_tokens.clone(),
            parser: PyParser::new(),
        }
    }

    pub fn layout(&self) -> &PackageLayout {
        &self.layout
    }

    /// Run the contract over one scope and produce the final report.
    pub fn run(
        &mut self,
        scope: &ScopeSelection,
        lister: &dyn ChangeLister,
    ) -> Result<Report, FatalError> {
        let targets = select_targets(scope, &self.layout, lister)?;

        let mut violations = Vec::new();
        let mut files_checked = Vec::new();
        for target in &targets {
            let tier = self.layout.classify(target);
            if tier == Tier::Unchecked {
                continue;
            }
            files_checked.push(self.display_path(target));
            violations.extend(self.check_tier(target, tier)?);
        }

        for violation in &mut violations {
            violation.file = self.relativize(&violation.file);
        }
        violations.sort();
        files_checked.sort();

        Ok(Report::from_violations(files_checked, violations))
    }

    /// Check a single file under whatever tier it classifies into.
    ///
    /// Scope selection never changes per-file logic: a full sweep produces
    /// exactly the union of these per-file results.
    pub fn check_file(&mut self, path: &Path) -> Result<Vec<Violation>, FatalError> {
        let tier = self.layout.classify(path);
        let mut violations = self.check_tier(path, tier)?;
        for violation in &mut violations {
            violation.file = self.relativize(&violation.file);
        }
        violations.sort();
        Ok(violations)
    }

    fn check_tier(&mut self, path: &Path, tier: Tier) -> Result<Vec<Violation>, FatalError> {
        if tier == Tier::Unchecked {
            return Ok(Vec::new());
        }
        let module = self.parser.parse_module(path)?;
        match tier {
            Tier::Entry => check_entry(
                &module,
                &self.layout.pkg_dir,
                &self.escape_tokens,
                &mut self.parser,
            ),
            Tier::ApiFile => Ok(check_api_file(&module, &self.escape_tokens)),
            Tier::CoreModule => Ok(check_core_module(&module)),
            Tier::Unchecked => Ok(Vec::new()),
        }
    }

    fn relativize(&self, path: &Path) -> PathBuf {
        path.strip_prefix(&self.layout.repo_root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf())
    }

    fn display_path(&self, path: &Path) -> String {
        self.relativize(path).display().to_string()
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
