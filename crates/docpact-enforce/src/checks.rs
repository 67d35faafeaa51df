//! Per-tier documentation rules.
//!
//! Each check is a pure function from parsed structure to a violation list;
//! nothing here mutates shared state, so the checks compose in any order
//! and are independently testable.

use std::path::Path;

use docpact_core::error::FatalError;
use docpact_core::types::Violation;
use docpact_parsers::module::SourceModule;
use docpact_parsers::python::PyParser;

use crate::escape::has_escape_with_reason;
use crate::exports::resolve_exports;

/// Entry tier: the package `__init__.py` defines the public surface.
///
/// Requires a header docstring and a literal `__all__`; a missing `__all__`
/// is one violation and skips the per-export checks. Every resolved export
/// must point at a documented origin definition, with violations reported
/// at the origin file and line.
pub fn check_entry(
    entry: &SourceModule,
    pkg_dir: &Path,
    escape_tokens: &[String],
    parser: &mut PyParser,
) -> Result<Vec<Violation>, FatalError> {
    let mut violations = Vec::new();

    if !entry.has_header_doc {
        violations.push(Violation::new(
            entry.path.clone(),
            1,
            "Missing module docstring in package __init__.py (public file).",
        ));
    }

    let Some(names) = entry.exports.as_deref() else {
        violations.push(Violation::new(
            entry.path.clone(),
            1,
            "__all__ is missing; public files must be explicit.",
        ));
        return Ok(violations);
    };

    let resolution = resolve_exports(entry, names, pkg_dir, parser)?;
    violations.extend(resolution.violations);

    for export in &resolution.resolved {
        let def = &export.origin_definition;
        if def.has_doc {
            continue;
        }
        if has_escape_with_reason(&def.line_text, escape_tokens) {
            continue;
        }
        violations.push(Violation::new(
            export.origin_file.clone(),
            def.line,
            format!(
                "Exported public symbol '{}' is missing a docstring.",
                export.exported_name
            ),
        ));
    }

    Ok(violations)
}

/// API tier: header docstring plus a docstring on every public top-level
/// definition, unless escaped with a reason.
pub fn check_api_file(module: &SourceModule, escape_tokens: &[String]) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !module.has_header_doc {
        violations.push(Violation::new(
            module.path.clone(),
            1,
            "Missing module docstring (required for public API file).",
        ));
    }

    for def in &module.definitions {
        if !def.is_public() || def.has_doc {
            continue;
        }
        if has_escape_with_reason(&def.line_text, escape_tokens) {
            continue;
        }
        violations.push(Violation::new(
            module.path.clone(),
            def.line,
            format!("Public symbol '{}' is missing a docstring.", def.name),
        ));
    }

    violations
}

/// Core tier: header docstring only, no per-definition checks.
pub fn check_core_module(module: &SourceModule) -> Vec<Violation> {
    if module.has_header_doc {
        return Vec::new();
    }
    vec![Violation::new(
        module.path.clone(),
        1,
        "Missing module header docstring (required for core infrastructure module).",
    )]
}
