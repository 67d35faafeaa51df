use std::path::PathBuf;

/// Complete structural record for a single parsed source file.
///
/// Built once per file and immutable afterwards. `definitions` preserve
/// source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceModule {
    /// Path the file was parsed from.
    pub path: PathBuf,
    /// Whether the file's first statement is a standalone string literal.
    pub has_header_doc: bool,
    /// Top-level functions, async functions, and classes, in source order.
    pub definitions: Vec<Definition>,
    /// Single-level relative import bindings (`from .x import a [as b]`).
    /// Any other import shape is not tracked.
    pub imports: Vec<ImportBinding>,
    /// The literal `__all__` list, or `None` when the file declares none.
    pub exports: Option<Vec<String>>,
}

impl SourceModule {
    /// First top-level definition with the given name, if any.
    ///
    /// When a file has two same-named top-level definitions (e.g. guarded
    /// by a conditional) the first match wins; nested definitions are never
    /// searched.
    pub fn find_definition(&self, name: &str) -> Option<&Definition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// Binding for a local name, if a supported import introduced it.
    /// Later imports shadow earlier ones, as they do at runtime.
    pub fn find_binding(&self, local_name: &str) -> Option<&ImportBinding> {
        self.imports.iter().rev().find(|b| b.local_name == local_name)
    }
}

/// One top-level function, async function, or class definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Simple name of the symbol. Unique only within its module.
    pub name: String,
    /// Line of the definition header (1-based, decorators excluded).
    pub line: u32,
    /// Whether the body's first statement is a standalone string literal.
    pub has_doc: bool,
    /// The exact source line at the definition header, used by the
    /// escape-token scan.
    pub line_text: String,
}

impl Definition {
    /// Whether the name is part of the public surface.
    pub fn is_public(&self) -> bool {
        !self.name.starts_with('_')
    }
}

/// One name bound by `from .<module> import <original> [as <local>]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportBinding {
    /// The name visible in the importing module.
    pub local_name: String,
    /// Dotted module path relative to the package root (empty for
    /// `from . import x`).
    pub origin_module: String,
    /// The name as defined in the origin module.
    pub original_name: String,
}
