use std::path::PathBuf;

/// An error that aborts the whole run.
///
/// Fatal errors are disjoint from [`crate::types::Violation`]s: a violation
/// means a documentation rule was broken, a fatal error means the analysis
/// itself could not be trusted. They are never mixed into the violation
/// list.
#[derive(Debug, thiserror::Error)]
pub enum FatalError {
    /// A source file could not be parsed. Analysis cannot proceed
    /// meaningfully for a file whose structure is unknown.
    #[error("SyntaxError parsing {path}:{line}:{column}: {message}")]
    Syntax {
        path: PathBuf,
        line: u32,
        column: u32,
        message: String,
    },

    /// `__all__` had a computed or otherwise non-literal right-hand side.
    /// The module cannot declare its public surface ambiguously.
    #[error("__all__ in {path} must be a literal list/tuple of strings (no computed expressions)")]
    NonLiteralExportList { path: PathBuf },

    /// The package directory could not be determined.
    #[error("{0}")]
    Package(String),

    /// A command-line value survived clap but failed semantic validation.
    #[error("invalid arguments: {0}")]
    Arguments(String),

    /// The version-control collaborator could not enumerate the scope.
    #[error("git enumeration failed: {0}")]
    Vcs(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FatalError {
    /// Process exit status for this error.
    ///
    /// Recoverable configuration problems share exit 1 with ordinary
    /// violations; errors that mean the analysis could not run at all
    /// exit 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            FatalError::NonLiteralExportList { .. }
            | FatalError::Package(_)
            | FatalError::Arguments(_) => 1,
            FatalError::Syntax { .. } | FatalError::Vcs(_) | FatalError::Io { .. } => 2,
        }
    }

    /// Remediation hint printed after the diagnostic.
    pub fn hint(&self) -> &'static str {
        match self {
            FatalError::Syntax { .. } => "Fix the syntax error and re-run.",
            FatalError::NonLiteralExportList { .. } => {
                "Declare __all__ as a plain list of string literals."
            }
            FatalError::Package(_) => {
                "Pass --pkg explicitly or create src/<pkg>/__init__.py."
            }
            FatalError::Arguments(_) => "See --help for the expected format.",
            FatalError::Vcs(_) => {
                "Check that git is available and the named revisions exist."
            }
            FatalError::Io { .. } => "Check that the file exists and is readable.",
        }
    }
}
