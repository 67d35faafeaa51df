use std::path::{Path, PathBuf};

use docpact_core::config::DocpactConfig;

/// Which documentation rule applies to a file.
///
/// Computed once per file before any rule logic runs. A file is checked
/// under exactly one tier; precedence is Entry, then ApiFile, then
/// CoreModule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// The package's root `__init__.py`.
    Entry,
    /// A file under the designated API subdirectory.
    ApiFile,
    /// A file on the explicit core infrastructure list.
    CoreModule,
    /// Matches no tier; not checked.
    Unchecked,
}

/// The concrete on-disk shape of the package under enforcement.
///
/// All paths are normalized at construction so later comparisons are purely
/// lexical.
#[derive(Debug, Clone)]
pub struct PackageLayout {
    pub repo_root: PathBuf,
    pub pkg_dir: PathBuf,
    pub entry_file: PathBuf,
    pub api_dir: PathBuf,
    pub core_paths: Vec<PathBuf>,
}

impl PackageLayout {
    pub fn new(repo_root: &Path, pkg_dir: &Path, config: &DocpactConfig) -> Self {
        let repo_root = normalize_path(repo_root);
        let pkg_dir = normalize_path(pkg_dir);
        let entry_file = pkg_dir.join("__init__.py");
        let api_dir = pkg_dir.join(&config.api_dir);
        let core_paths = config
            .core_modules
            .iter()
            .map(|rel| pkg_dir.join(rel))
            .collect();
        Self {
            repo_root,
            pkg_dir,
            entry_file,
            api_dir,
            core_paths,
        }
    }

    /// Classify a path into its tier. Purely path-based; file contents are
    /// never consulted.
    pub fn classify(&self, path: &Path) -> Tier {
        let path = normalize_path(path);
        if path == self.entry_file {
            return Tier::Entry;
        }
        if path.starts_with(&self.api_dir) && is_python_file(&path) {
            return Tier::ApiFile;
        }
        if self.core_paths.iter().any(|c| *c == path) {
            return Tier::CoreModule;
        }
        Tier::Unchecked
    }
}

/// Canonicalize when the path exists, otherwise keep it as given. Keeps
/// classification stable between git-relative and walked absolute paths.
pub fn normalize_path(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

pub fn is_python_file(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "py")
}
