use std::path::{Path, PathBuf};
use std::process::Command;

use docpact_core::error::FatalError;
use docpact_enforce::scope::ChangeLister;

/// Resolve the repository top-level directory for a starting directory.
///
/// `git diff --name-only` prints paths relative to the repository root, so
/// the whole run must be anchored there even when invoked from a
/// subdirectory. Outside a git repository the starting directory is used
/// as-is; a later staged/range listing will fail with its own diagnostic.
pub fn discover_repo_root(start: &Path) -> PathBuf {
    let output = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .current_dir(start)
        .output();
    match output {
        Ok(out) if out.status.success() => {
            let top = String::from_utf8_lossy(&out.stdout);
            let top = top.trim();
            if top.is_empty() {
                start.to_path_buf()
            } else {
                PathBuf::from(top)
            }
        }
        _ => start.to_path_buf(),
    }
}

/// Git-backed change lister. Shells out to `git diff --name-only` and
/// returns repo-relative paths as git printed them.
pub struct GitChangeLister {
    repo_root: PathBuf,
}

impl GitChangeLister {
    pub fn new(repo_root: &Path) -> Self {
        Self {
            repo_root: repo_root.to_path_buf(),
        }
    }

    fn run_git(&self, args: &[&str]) -> Result<Vec<String>, FatalError> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_root)
            .output()
            .map_err(|e| FatalError::Vcs(format!("failed to spawn git: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FatalError::Vcs(format!(
                "git {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect())
    }
}

impl ChangeLister for GitChangeLister {
    fn staged_files(&self) -> Result<Vec<String>, FatalError> {
        self.run_git(&["diff", "--cached", "--name-only", "--diff-filter=ACMR"])
    }

    fn files_in_range(&self, base: &str, head: &str) -> Result<Vec<String>, FatalError> {
        let range = format!("{base}...{head}");
        self.run_git(&["diff", "--name-only", "--diff-filter=ACMR", &range])
    }
}
