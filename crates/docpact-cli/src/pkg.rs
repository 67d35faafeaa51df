use std::path::{Path, PathBuf};

use docpact_core::config::DocpactConfig;
use docpact_core::error::FatalError;

/// Locate the package directory under `<repo_root>/<src_dir>`.
///
/// With `--pkg` the named directory is used directly (it must contain an
/// `__init__.py`). Otherwise exactly one package directory must exist;
/// zero or several is an error asking the caller to disambiguate.
pub fn locate_package(
    repo_root: &Path,
    config: &DocpactConfig,
    pkg: Option<&str>,
) -> Result<PathBuf, FatalError> {
    let src = repo_root.join(&config.src_dir);

    if let Some(name) = pkg {
        let dir = src.join(name);
        if !dir.join("__init__.py").is_file() {
            return Err(FatalError::Package(format!(
                "package '{name}' not found: expected {}/{name}/__init__.py",
                config.src_dir
            )));
        }
        return Ok(dir);
    }

    if !src.is_dir() {
        return Err(FatalError::Package(format!(
            "no {}/ directory at the repository root",
            config.src_dir
        )));
    }

    let mut candidates = Vec::new();
    let entries = std::fs::read_dir(&src).map_err(|e| FatalError::Io {
        path: src.clone(),
        source: e,
    })?;
    for entry in entries {
        let entry = entry.map_err(|e| FatalError::Io {
            path: src.clone(),
            source: e,
        })?;
        let path = entry.path();
        if path.is_dir() && path.join("__init__.py").is_file() {
            candidates.push(path);
        }
    }
    candidates.sort();

    match candidates.len() {
        1 => Ok(candidates.remove(0)),
        0 => Err(FatalError::Package(format!(
            "could not auto-detect a package: no {}/<pkg>/__init__.py found",
            config.src_dir
        ))),
        _ => {
            let names: Vec<String> = candidates
                .iter()
                .filter_map(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .collect();
            Err(FatalError::Package(format!(
                "multiple packages under {}/ ({}); pass --pkg to choose one",
                config.src_dir,
                names.join(", ")
            )))
        }
    }
}
