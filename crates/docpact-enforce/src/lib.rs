//! Enforcement engine for the docpact docstring contract.
//!
//! Classifies each target file into a tier and applies the tier's
//! documentation rule:
//! - **Entry** — the package `__init__.py`: header docstring, a literal
//!   `__all__`, and a documented origin definition for every export
//! - **API** — files under the designated API directory: header docstring
//!   plus a docstring on every public top-level definition
//! - **Core** — the fixed infrastructure list: header docstring only
//!
//! Violations are collected, never thrown; a fatal parse or scope error
//! aborts the run instead.

pub mod types;
pub mod classify;
pub mod escape;
pub mod exports;
pub mod checks;
pub mod scope;
pub mod engine;
