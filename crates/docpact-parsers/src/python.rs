use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tree_sitter::{Node, Parser};

use docpact_core::error::FatalError;

use crate::module::{Definition, ImportBinding, SourceModule};

/// The well-known assignment name that declares a module's public surface.
pub const EXPORT_LIST_NAME: &str = "__all__";

/// Python structural parser backed by tree-sitter-python.
///
/// Parses a file into a [`SourceModule`] or fails fatally with a
/// `file:line:column` diagnostic — a syntax error means the analysis cannot
/// proceed meaningfully for that file. Parsed modules are cached by path so
/// an origin file referenced by several exports is read once.
pub struct PyParser {
    parser: Parser,
    cache: HashMap<PathBuf, SourceModule>,
}

impl PyParser {
    pub fn new() -> Self {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .expect("Error loading Python grammar");
        Self {
            parser,
            cache: HashMap::new(),
        }
    }

    /// Read and parse `path`, reusing the cache when it was seen before.
    pub fn parse_module(&mut self, path: &Path) -> Result<SourceModule, FatalError> {
        if let Some(cached) = self.cache.get(path) {
            return Ok(cached.clone());
        }
        let source = std::fs::read_to_string(path).map_err(|e| FatalError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let module = self.parse_source(path, &source)?;
        self.cache.insert(path.to_path_buf(), module.clone());
        Ok(module)
    }

    /// Parse already-loaded source text into a [`SourceModule`].
    pub fn parse_source(&mut self, path: &Path, source: &str) -> Result<SourceModule, FatalError> {
        let tree = self
            .parser
            .parse(source.as_bytes(), None)
            .ok_or_else(|| FatalError::Syntax {
                path: path.to_path_buf(),
                line: 1,
                column: 1,
                message: "parser produced no tree".to_string(),
            })?;

        let root = tree.root_node();
        if root.has_error() {
            let node = first_error_node(root);
            let pos = node.start_position();
            return Err(FatalError::Syntax {
                path: path.to_path_buf(),
                line: pos.row as u32 + 1,
                column: pos.column as u32 + 1,
                message: if node.is_missing() {
                    format!("missing {}", node.kind())
                } else {
                    "invalid syntax".to_string()
                },
            });
        }

        let bytes = source.as_bytes();
        let lines: Vec<&str> = source.lines().collect();

        let mut has_header_doc = false;
        let mut saw_first_statement = false;
        let mut definitions = Vec::new();
        let mut imports = Vec::new();
        let mut exports: Option<Vec<String>> = None;

        let mut cursor = root.walk();
        for stmt in root.named_children(&mut cursor) {
            if stmt.kind() == "comment" {
                continue;
            }
            if !saw_first_statement {
                saw_first_statement = true;
                has_header_doc = is_string_expression(stmt);
            }
            match stmt.kind() {
                "function_definition" | "class_definition" => {
                    definitions.push(definition_from(stmt, bytes, &lines));
                }
                "decorated_definition" => {
                    if let Some(inner) = stmt.child_by_field_name("definition") {
                        if matches!(inner.kind(), "function_definition" | "class_definition") {
                            definitions.push(definition_from(inner, bytes, &lines));
                        }
                    }
                }
                "import_from_statement" => {
                    imports.extend(import_bindings_from(stmt, bytes));
                }
                "expression_statement" => {
                    // First __all__ assignment wins; later ones are ignored.
                    if exports.is_none() {
                        exports = extract_export_list(stmt, bytes, path)?;
                    }
                }
                _ => {}
            }
        }

        Ok(SourceModule {
            path: path.to_path_buf(),
            has_header_doc,
            definitions,
            imports,
            exports,
        })
    }
}

impl Default for PyParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Descend to the first concrete error or missing node for the diagnostic.
fn first_error_node(node: Node<'_>) -> Node<'_> {
    if node.is_error() || node.is_missing() {
        return node;
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() || child.is_missing() {
            return first_error_node(child);
        }
    }
    node
}

fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// True when the statement is a standalone string literal — the shape of a
/// docstring.
fn is_string_expression(stmt: Node<'_>) -> bool {
    stmt.kind() == "expression_statement"
        && stmt
            .named_child(0)
            .is_some_and(|n| matches!(n.kind(), "string" | "concatenated_string"))
}

fn definition_from(def: Node<'_>, source: &[u8], lines: &[&str]) -> Definition {
    let name = def
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string())
        .unwrap_or_default();
    let line = def.start_position().row as u32 + 1;
    let has_doc = def
        .child_by_field_name("body")
        .is_some_and(|body| body_opens_with_string(body));
    let line_text = lines
        .get(line as usize - 1)
        .map(|l| l.to_string())
        .unwrap_or_default();
    Definition {
        name,
        line,
        has_doc,
        line_text,
    }
}

/// True when the first statement of a definition body is a docstring.
fn body_opens_with_string(body: Node<'_>) -> bool {
    let mut cursor = body.walk();
    for stmt in body.named_children(&mut cursor) {
        if stmt.kind() == "comment" {
            continue;
        }
        return is_string_expression(stmt);
    }
    false
}

/// Extract bindings from `from .<module> import a, b as c`.
///
/// Only the single-level relative form is recognized. Absolute imports,
/// wildcard imports, and plain `import x` statements contribute nothing —
/// they are not errors, simply not tracked.
fn import_bindings_from(stmt: Node<'_>, source: &[u8]) -> Vec<ImportBinding> {
    let Some(module_node) = stmt.child_by_field_name("module_name") else {
        return Vec::new();
    };
    if module_node.kind() != "relative_import" {
        return Vec::new();
    }

    // `..sub.mod` → "sub.mod"; `from . import x` → "".
    let mut origin_module = String::new();
    let mut cursor = module_node.walk();
    for child in module_node.named_children(&mut cursor) {
        if child.kind() == "dotted_name" {
            origin_module = node_text(child, source).to_string();
        }
    }

    let mut bindings = Vec::new();
    let mut names = stmt.walk();
    for name_node in stmt.children_by_field_name("name", &mut names) {
        match name_node.kind() {
            "dotted_name" => {
                let name = node_text(name_node, source).to_string();
                bindings.push(ImportBinding {
                    local_name: name.clone(),
                    origin_module: origin_module.clone(),
                    original_name: name,
                });
            }
            "aliased_import" => {
                let original = name_node
                    .child_by_field_name("name")
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_default();
                let alias = name_node
                    .child_by_field_name("alias")
                    .map(|n| node_text(n, source).to_string())
                    .unwrap_or_default();
                bindings.push(ImportBinding {
                    local_name: alias,
                    origin_module: origin_module.clone(),
                    original_name: original,
                });
            }
            _ => {}
        }
    }
    bindings
}

/// Extract `__all__ = ["a", "b"]` from an expression statement.
///
/// Returns `Ok(None)` when the statement is not a plain `__all__`
/// assignment. A right-hand side that is not a literal list/tuple of plain
/// string constants is a fatal configuration error, not a violation.
fn extract_export_list(
    stmt: Node<'_>,
    source: &[u8],
    path: &Path,
) -> Result<Option<Vec<String>>, FatalError> {
    let Some(assign) = stmt.named_child(0).filter(|n| n.kind() == "assignment") else {
        return Ok(None);
    };
    let Some(left) = assign.child_by_field_name("left") else {
        return Ok(None);
    };
    if left.kind() != "identifier" || node_text(left, source) != EXPORT_LIST_NAME {
        return Ok(None);
    }
    // Annotated assignments (`__all__: Final = [...]`) are not the plain
    // declaration form and are ignored, matching the assignment-only rule.
    if assign.child_by_field_name("type").is_some() {
        return Ok(None);
    }
    let Some(right) = assign.child_by_field_name("right") else {
        return Ok(None);
    };

    if !matches!(right.kind(), "list" | "tuple") {
        return Err(FatalError::NonLiteralExportList {
            path: path.to_path_buf(),
        });
    }

    let mut items = Vec::new();
    let mut cursor = right.walk();
    for element in right.named_children(&mut cursor) {
        if element.kind() == "comment" {
            continue;
        }
        if !matches!(element.kind(), "string" | "concatenated_string") {
            return Err(FatalError::NonLiteralExportList {
                path: path.to_path_buf(),
            });
        }
        items.push(string_constant_value(element, source, path)?);
    }
    Ok(Some(items))
}

/// The value of a plain string literal. Implicitly concatenated literals
/// (`"a" "b"`) join into one value; interpolated strings are rejected —
/// an f-string export name is a computed expression.
fn string_constant_value(
    string: Node<'_>,
    source: &[u8],
    path: &Path,
) -> Result<String, FatalError> {
    let mut value = String::new();
    let mut cursor = string.walk();
    for part in string.named_children(&mut cursor) {
        match part.kind() {
            "string" => value.push_str(&string_constant_value(part, source, path)?),
            "string_content" => value.push_str(node_text(part, source)),
            "interpolation" => {
                return Err(FatalError::NonLiteralExportList {
                    path: path.to_path_buf(),
                })
            }
            _ => {}
        }
    }
    Ok(value)
}
