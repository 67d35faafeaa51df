// Scope selection changes which files are visited, never how any single
// file is judged.

use docpact_core::types::ScopeSelection;
use docpact_enforce::scope::MockChangeLister;

use crate::common::{clean_package, empty_repo, FixtureRepo};

fn messy_package() -> FixtureRepo {
    let repo = empty_repo("pkg");
    repo.write(
        "__init__.py",
        "\"\"\"Pkg.\"\"\"\nfrom .pipeline import Pipeline\n__all__ = [\"Pipeline\"]\n",
    );
    repo.write("pipeline.py", "\"\"\"Pipeline.\"\"\"\nclass Pipeline:\n    pass\n");
    repo.write("api/metrics.py", "def compute():\n    pass\n");
    repo.write("executor.py", "X = 1\n");
    repo
}

#[test]
fn full_sweep_equals_union_of_single_file_checks() {
    let repo = messy_package();
    let sweep = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();

    let layout = repo.layout();
    let mut engine = repo.engine();
    let mut union = Vec::new();
    for target in [
        layout.entry_file.clone(),
        layout.api_dir.join("metrics.py"),
        layout.pkg_dir.join("executor.py"),
    ] {
        union.extend(engine.check_file(&target).unwrap());
    }
    union.sort();

    assert_eq!(sweep.violations, union);
}

#[test]
fn staged_scope_visits_only_the_listed_python_files() {
    let repo = messy_package();
    let lister = MockChangeLister {
        staged: vec![
            "src/pkg/api/metrics.py".to_string(),
            "src/pkg/api/README.md".to_string(),
            "README.md".to_string(),
        ],
        ..Default::default()
    };
    let report = repo.engine().run(&ScopeSelection::Staged, &lister).unwrap();
    assert_eq!(report.files_checked, vec!["src/pkg/api/metrics.py"]);
    assert!(report
        .violations
        .iter()
        .all(|v| v.file.ends_with("api/metrics.py")));
}

#[test]
fn range_scope_uses_the_listers_range_output() {
    let repo = messy_package();
    let lister = MockChangeLister {
        range: vec!["src/pkg/executor.py".to_string()],
        ..Default::default()
    };
    let scope = ScopeSelection::Range {
        base: "origin/main".to_string(),
        head: "HEAD".to_string(),
    };
    let report = repo.engine().run(&scope, &lister).unwrap();
    assert_eq!(report.files_checked, vec!["src/pkg/executor.py"]);
    assert_eq!(report.violations.len(), 1);
}

#[test]
fn repeated_runs_produce_identical_reports() {
    let repo = messy_package();
    let first = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    let second = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    assert_eq!(first.violations, second.violations);
    assert_eq!(first.files_checked, second.files_checked);
}

#[test]
fn report_ordering_is_file_then_line() {
    let repo = messy_package();
    let report = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    let mut sorted = report.violations.clone();
    sorted.sort();
    assert_eq!(report.violations, sorted);
}

#[test]
fn a_clean_package_is_clean_under_every_scope() {
    let repo = clean_package();
    let staged_everything = MockChangeLister {
        staged: vec![
            "src/diffusion_core/__init__.py".to_string(),
            "src/diffusion_core/api/metrics.py".to_string(),
            "src/diffusion_core/executor.py".to_string(),
        ],
        ..Default::default()
    };
    let all = repo
        .engine()
        .run(&ScopeSelection::All, &MockChangeLister::default())
        .unwrap();
    let staged = repo
        .engine()
        .run(&ScopeSelection::Staged, &staged_everything)
        .unwrap();
    assert!(all.ok);
    assert!(staged.ok);
}
