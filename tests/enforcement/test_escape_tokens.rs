// Escape tokens suppress definition-level violations, but only with a
// stated reason on the same line.

use docpact_core::config::DocpactConfig;
use docpact_core::types::ScopeSelection;
use docpact_enforce::scope::MockChangeLister;

use crate::common::empty_repo;

#[test]
fn escape_with_reason_suppresses_an_api_violation() {
    let repo = empty_repo("pkg");
    repo.write("__init__.py", "\"\"\"Pkg.\"\"\"\n__all__ = []\n");
    repo.write(
        "api/sampler.py",
        "\"\"\"Sampler.\"\"\"\ndef sample():  # noqa: DOC covered by module docs\n    pass\n",
    );
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert!(report.ok, "unexpected violations: {:?}", report.violations);
}

#[test]
fn escape_without_reason_does_not_suppress() {
    let repo = empty_repo("pkg");
    repo.write("__init__.py", "\"\"\"Pkg.\"\"\"\n__all__ = []\n");
    repo.write(
        "api/sampler.py",
        "\"\"\"Sampler.\"\"\"\ndef sample():  # noqa: DOC\n    pass\n",
    );
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0]
        .message
        .contains("Public symbol 'sample' is missing a docstring."));
}

#[test]
fn escape_token_match_is_case_insensitive() {
    let repo = empty_repo("pkg");
    repo.write("__init__.py", "\"\"\"Pkg.\"\"\"\n__all__ = []\n");
    repo.write(
        "api/sampler.py",
        "\"\"\"Sampler.\"\"\"\ndef sample():  # NOQA: doc legacy interface\n    pass\n",
    );
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert!(report.ok, "unexpected violations: {:?}", report.violations);
}

#[test]
fn second_builtin_token_also_works() {
    let repo = empty_repo("pkg");
    repo.write("__init__.py", "\"\"\"Pkg.\"\"\"\n__all__ = []\n");
    repo.write(
        "api/sampler.py",
        "\"\"\"Sampler.\"\"\"\ndef sample():  # docstring-contract: ignore thin wrapper\n    pass\n",
    );
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert!(report.ok, "unexpected violations: {:?}", report.violations);
}

#[test]
fn escape_applies_to_the_origin_of_an_export() {
    let repo = empty_repo("pkg");
    repo.write(
        "__init__.py",
        "\"\"\"Pkg.\"\"\"\nfrom .pipeline import Pipeline\n__all__ = [\"Pipeline\"]\n",
    );
    repo.write(
        "pipeline.py",
        "\"\"\"Pipeline.\"\"\"\nclass Pipeline:  # noqa: DOC documented in the user guide\n    pass\n",
    );
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert!(report.ok, "unexpected violations: {:?}", report.violations);
}

#[test]
fn configured_tokens_replace_the_defaults() {
    let repo = empty_repo("pkg");
    repo.write("__init__.py", "\"\"\"Pkg.\"\"\"\n__all__ = []\n");
    repo.write(
        "api/sampler.py",
        "\"\"\"Sampler.\"\"\"\ndef sample():  # docs: skip perf-critical inner loop\n    pass\n",
    );
    let config = DocpactConfig {
        escape_tokens: vec!["docs: skip".to_string()],
        ..DocpactConfig::default()
    };
    let report = repo
        .engine_with(&config)
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert!(report.ok, "unexpected violations: {:?}", report.violations);

    // And the stock token no longer suppresses anything.
    repo.write(
        "api/sampler.py",
        "\"\"\"Sampler.\"\"\"\ndef sample():  # noqa: DOC some reason\n    pass\n",
    );
    let report = repo
        .engine_with(&config)
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert_eq!(report.violations.len(), 1);
}

#[test]
fn module_header_violations_cannot_be_escaped() {
    let repo = empty_repo("pkg");
    repo.write("__init__.py", "\"\"\"Pkg.\"\"\"\n__all__ = []\n");
    repo.write("executor.py", "# noqa: DOC whole file exempt\nX = 1\n");
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0]
        .message
        .contains("Missing module header docstring"));
}
