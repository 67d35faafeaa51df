// End-to-end tracing of `__all__` names to their defining files.

use docpact_core::types::ScopeSelection;
use docpact_enforce::scope::MockChangeLister;

use crate::common::empty_repo;

#[test]
fn undocumented_export_is_reported_at_the_origin_definition() {
    let repo = empty_repo("pkg");
    repo.write(
        "__init__.py",
        "\"\"\"Pkg.\"\"\"\nfrom .pipeline import Pipeline\n__all__ = [\"Pipeline\"]\n",
    );
    repo.write(
        "pipeline.py",
        "\"\"\"Pipeline.\"\"\"\n\n\nclass Pipeline:\n    pass\n",
    );
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0].file.ends_with("pipeline.py"));
    assert_eq!(report.violations[0].line, 4);
    assert!(report.violations[0]
        .message
        .contains("Exported public symbol 'Pipeline' is missing a docstring."));
}

#[test]
fn aliased_export_resolves_the_original_and_reports_the_alias() {
    let repo = empty_repo("pkg");
    repo.write(
        "__init__.py",
        "\"\"\"Pkg.\"\"\"\nfrom .pipeline import Pipeline as Pipe\n__all__ = [\"Pipe\"]\n",
    );
    repo.write("pipeline.py", "\"\"\"Pipeline.\"\"\"\nclass Pipeline:\n    pass\n");
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0]
        .message
        .contains("Exported public symbol 'Pipe' is missing a docstring."));
    assert!(report.violations[0].file.ends_with("pipeline.py"));
}

#[test]
fn private_export_is_flagged_even_when_documented() {
    let repo = empty_repo("pkg");
    repo.write(
        "__init__.py",
        "\"\"\"Pkg.\"\"\"\nfrom .bar import _helper\n__all__ = [\"_helper\"]\n",
    );
    repo.write(
        "bar.py",
        "\"\"\"Bar.\"\"\"\ndef _helper():\n    \"\"\"Documented but private.\"\"\"\n",
    );
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0]
        .message
        .contains("__all__ contains private name '_helper'."));
}

#[test]
fn export_without_an_import_binding_is_flagged() {
    let repo = empty_repo("pkg");
    repo.write("__init__.py", "\"\"\"Pkg.\"\"\"\n__all__ = [\"Ghost\"]\n");
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0]
        .message
        .contains("__all__ exports 'Ghost' but it is not imported via a simple"));
}

#[test]
fn export_from_a_missing_module_is_flagged() {
    let repo = empty_repo("pkg");
    repo.write(
        "__init__.py",
        "\"\"\"Pkg.\"\"\"\nfrom .nowhere import thing\n__all__ = [\"thing\"]\n",
    );
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0]
        .message
        .contains("Cannot resolve module '.nowhere' for exported 'thing'."));
}

#[test]
fn export_of_a_symbol_absent_from_its_origin_is_flagged_there() {
    let repo = empty_repo("pkg");
    repo.write(
        "__init__.py",
        "\"\"\"Pkg.\"\"\"\nfrom .bar import Missing\n__all__ = [\"Missing\"]\n",
    );
    repo.write("bar.py", "\"\"\"Bar.\"\"\"\nPRESENT = 1\n");
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0].file.ends_with("bar.py"));
    assert!(report.violations[0]
        .message
        .contains("Exported 'Missing' maps to 'Missing' but symbol not found."));
}

#[test]
fn dotted_module_resolves_through_package_init() {
    let repo = empty_repo("pkg");
    repo.write(
        "__init__.py",
        "\"\"\"Pkg.\"\"\"\nfrom .utils import helper\n__all__ = [\"helper\"]\n",
    );
    repo.write(
        "utils/__init__.py",
        "\"\"\"Utils.\"\"\"\ndef helper():\n    \"\"\"Helps.\"\"\"\n",
    );
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert!(report.ok, "unexpected violations: {:?}", report.violations);
}

#[test]
fn exported_constants_do_not_count_as_definitions() {
    let repo = empty_repo("pkg");
    repo.write(
        "__init__.py",
        "\"\"\"Pkg.\"\"\"\nfrom .constants import VERSION\n__all__ = [\"VERSION\"]\n",
    );
    repo.write("constants.py", "\"\"\"Constants.\"\"\"\nVERSION = \"1.0\"\n");
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    // Only functions and classes can carry docstrings; a bare assignment
    // cannot satisfy the export contract.
    assert_eq!(report.violations.len(), 1);
    assert!(report.violations[0]
        .message
        .contains("Exported 'VERSION' maps to 'VERSION' but symbol not found."));
}
