use std::path::{Path, PathBuf};

use docpact_core::error::FatalError;
use docpact_core::types::Violation;
use docpact_parsers::module::{Definition, SourceModule};
use docpact_parsers::python::PyParser;
use docpact_parsers::resolve::resolve_module_file;

/// The traced origin of one name in the entry file's `__all__`.
#[derive(Debug, Clone)]
pub struct ResolvedExport {
    pub exported_name: String,
    pub origin_file: PathBuf,
    pub origin_definition: Definition,
}

/// Output of tracing an export list: origins that resolved, plus a
/// violation for every name that could not be traced. Unresolved exports
/// are never silently dropped.
#[derive(Debug, Clone, Default)]
pub struct ExportResolution {
    pub resolved: Vec<ResolvedExport>,
    pub violations: Vec<Violation>,
}

/// Trace each exported name, in list order, through the entry module's
/// import bindings to a top-level definition in another file.
///
/// Resolution is deliberately shallow: one import hop, top-level
/// definitions only. Re-export chains, wildcard imports, and computed
/// assignments are flagged rather than heuristically followed.
pub fn resolve_exports(
    entry: &SourceModule,
    names: &[String],
    pkg_dir: &Path,
    parser: &mut PyParser,
) -> Result<ExportResolution, FatalError> {
    let mut resolution = ExportResolution::default();

    for name in names {
        if name.starts_with('_') {
            resolution.violations.push(Violation::new(
                entry.path.clone(),
                1,
                format!("__all__ contains private name '{name}'."),
            ));
            continue;
        }

        let Some(binding) = entry.find_binding(name) else {
            resolution.violations.push(Violation::new(
                entry.path.clone(),
                1,
                format!(
                    "__all__ exports '{name}' but it is not imported via a simple \
                     'from .x import {name}' mapping."
                ),
            ));
            continue;
        };

        let Some(origin_file) = resolve_module_file(pkg_dir, &binding.origin_module) else {
            resolution.violations.push(Violation::new(
                entry.path.clone(),
                1,
                format!(
                    "Cannot resolve module '.{}' for exported '{name}'.",
                    binding.origin_module
                ),
            ));
            continue;
        };

        let origin = parser.parse_module(&origin_file)?;
        let Some(definition) = origin.find_definition(&binding.original_name) else {
            resolution.violations.push(Violation::new(
                origin_file,
                1,
                format!(
                    "Exported '{name}' maps to '{}' but symbol not found.",
                    binding.original_name
                ),
            ));
            continue;
        };

        resolution.resolved.push(ResolvedExport {
            exported_name: name.clone(),
            origin_file,
            origin_definition: definition.clone(),
        });
    }

    Ok(resolution)
}
