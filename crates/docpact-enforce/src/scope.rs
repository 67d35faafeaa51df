use std::collections::BTreeSet;
use std::path::PathBuf;

use ignore::WalkBuilder;

use docpact_core::error::FatalError;
use docpact_core::types::ScopeSelection;

use crate::classify::{is_python_file, normalize_path, PackageLayout};

/// The version-control collaborator: supplies repo-relative paths for a
/// scope, nothing else. Kept behind a trait so tests can enumerate changes
/// without a git repository.
pub trait ChangeLister {
    /// Files different between the working index and the last commit.
    fn staged_files(&self) -> Result<Vec<String>, FatalError>;
    /// Files differing between two named revisions.
    fn files_in_range(&self, base: &str, head: &str) -> Result<Vec<String>, FatalError>;
}

/// Resolve a scope to the concrete list of candidate files.
///
/// Staged and Range scopes take the lister's output filtered to Python
/// files; the All sweep enumerates everything the contract covers,
/// deduplicated by normalized path and independent of version-control
/// state. The returned order is sorted but carries no semantic weight —
/// only the final report is ordered.
pub fn select_targets(
    scope: &ScopeSelection,
    layout: &PackageLayout,
    lister: &dyn ChangeLister,
) -> Result<Vec<PathBuf>, FatalError> {
    let changed = match scope {
        ScopeSelection::Staged => lister.staged_files()?,
        ScopeSelection::Range { base, head } => lister.files_in_range(base, head)?,
        ScopeSelection::All => return Ok(full_sweep(layout)),
    };
    Ok(changed
        .iter()
        .map(|rel| layout.repo_root.join(rel))
        .filter(|p| is_python_file(p))
        .collect())
}

/// Every file the contract covers: the entry file, the API directory
/// recursively, and each existing core-tier path.
fn full_sweep(layout: &PackageLayout) -> Vec<PathBuf> {
    let mut candidates = vec![layout.entry_file.clone()];

    if layout.api_dir.is_dir() {
        let walker = WalkBuilder::new(&layout.api_dir)
            .hidden(true)
            .git_ignore(true)
            .git_global(false)
            .git_exclude(true)
            .build();
        for result in walker {
            let Ok(entry) = result else { continue };
            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }
            let path = entry.into_path();
            if is_python_file(&path) {
                candidates.push(path);
            }
        }
    }

    for core in &layout.core_paths {
        if core.is_file() {
            candidates.push(core.clone());
        }
    }

    let deduped: BTreeSet<PathBuf> = candidates.iter().map(|p| normalize_path(p)).collect();
    deduped.into_iter().collect()
}

/// In-memory lister for tests and callers that already know the change set.
#[derive(Debug, Default)]
pub struct MockChangeLister {
    pub staged: Vec<String>,
    pub range: Vec<String>,
    /// When set, every call fails with this message.
    pub fail_with: Option<String>,
}

impl ChangeLister for MockChangeLister {
    fn staged_files(&self) -> Result<Vec<String>, FatalError> {
        match &self.fail_with {
            Some(msg) => Err(FatalError::Vcs(msg.clone())),
            None => Ok(self.staged.clone()),
        }
    }

    fn files_in_range(&self, _base: &str, _head: &str) -> Result<Vec<String>, FatalError> {
        match &self.fail_with {
            Some(msg) => Err(FatalError::Vcs(msg.clone())),
            None => Ok(self.range.clone()),
        }
    }
}
