use std::path::{Path, PathBuf};

/// Convert a dotted module path to the file it names, relative to the
/// package directory.
///
/// `"api.metrics"` resolves to `<pkg>/api/metrics.py` first, then to
/// `<pkg>/api/metrics/__init__.py`; the empty path (from `from . import x`)
/// resolves to the package's own `__init__.py`. Returns `None` when neither
/// candidate exists.
pub fn resolve_module_file(pkg: &Path, dotted: &str) -> Option<PathBuf> {
    if dotted.is_empty() {
        let init = pkg.join("__init__.py");
        return init.is_file().then_some(init);
    }

    let mut base = pkg.to_path_buf();
    for part in dotted.split('.') {
        base.push(part);
    }

    let as_file = base.with_extension("py");
    if as_file.is_file() {
        return Some(as_file);
    }
    let as_pkg = base.join("__init__.py");
    as_pkg.is_file().then_some(as_pkg)
}
