//! Core types, configuration, and error handling for docpact.
//!
//! This crate provides the foundational data structures used across all
//! docpact crates:
//! - [`types`] — Violations, scope selection, and the shared vocabulary of
//!   the contract
//! - [`config`] — Configuration loading from `docpact.json`
//! - [`error`] — The fatal error type that aborts a run

pub mod config;
pub mod error;
pub mod types;
