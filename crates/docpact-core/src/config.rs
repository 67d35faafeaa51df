//! Configuration file loading for docpact.
//!
//! Reads `docpact.json` at the repository root and provides typed access to
//! all settings. Falls back to sensible defaults when the config file is
//! missing or incomplete.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Top-level docpact configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocpactConfig {
    /// Directory under the repository root where packages live.
    #[serde(default = "default_src_dir")]
    pub src_dir: String,
    /// Name of the API-tier subdirectory, relative to the package.
    #[serde(default = "default_api_dir")]
    pub api_dir: String,
    /// Core infrastructure modules, relative to the package directory.
    /// These need a module header docstring and nothing else.
    #[serde(default = "default_core_modules")]
    pub core_modules: Vec<String>,
    /// Tokens that suppress a definition-level violation when followed by a
    /// non-empty reason on the same line.
    #[serde(default = "default_escape_tokens")]
    pub escape_tokens: Vec<String>,
}

fn default_src_dir() -> String {
    "src".to_string()
}

fn default_api_dir() -> String {
    "api".to_string()
}

fn default_core_modules() -> Vec<String> {
    [
        "config/load.py",
        "runs/layout.py",
        "executor.py",
        "logging.py",
        "eval/metrics.py",
        "eval/metrics/__init__.py",
        "checkpointing.py",
        "determinism.py",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_escape_tokens() -> Vec<String> {
    vec![
        "noqa: DOC".to_string(),
        "docstring-contract: ignore".to_string(),
    ]
}

impl Default for DocpactConfig {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            api_dir: default_api_dir(),
            core_modules: default_core_modules(),
            escape_tokens: default_escape_tokens(),
        }
    }
}

impl DocpactConfig {
    /// Load configuration from `docpact.json` inside the given repository
    /// root. Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(repo_root: &Path) -> Self {
        let config_path = repo_root.join("docpact.json");
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str(&content) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!(
                    "docpact: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
