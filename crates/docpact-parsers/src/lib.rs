//! Tree-sitter structural extraction for docpact.
//!
//! Turns one Python source file into a [`module::SourceModule`]: header
//! docstring presence, top-level definitions, relative import bindings, and
//! the literal `__all__` export list. Nothing here evaluates Python — the
//! public surface is read statically or rejected.

pub mod module;
pub mod python;
pub mod resolve;
