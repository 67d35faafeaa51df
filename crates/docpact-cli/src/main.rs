//! docpact command-line entry point.
//!
//! Wires together configuration loading, package detection, scope
//! resolution, the contract engine, and output formatting. Exit codes:
//! 0 clean, 1 violations or a recoverable setup problem, 2 analysis
//! could not complete.

use clap::Parser;

mod cli_args;
mod git;
mod pkg;

use cli_args::Cli;
use docpact_core::config::DocpactConfig;
use docpact_core::error::FatalError;
use docpact_enforce::classify::PackageLayout;
use docpact_enforce::engine::ContractEngine;
use docpact_output::human::HumanFormatter;
use docpact_output::json::JsonFormatter;
use docpact_output::OutputFormatter;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("docpact: cannot determine working directory: {e}");
            return 2;
        }
    };
    // Anchor at the git top-level: change listings are printed relative to
    // it, not to the invocation directory.
    let repo_root = git::discover_repo_root(&cwd);

    let scope = match cli.scope() {
        Ok(scope) => scope,
        Err(e) => return fail(&e),
    };

    let config = DocpactConfig::load(&repo_root);
    let formatter: Box<dyn OutputFormatter> = if cli.json {
        Box::new(JsonFormatter)
    } else {
        Box::new(HumanFormatter::new(&config.escape_tokens))
    };

    let pkg_dir = match pkg::locate_package(&repo_root, &config, cli.pkg.as_deref()) {
        Ok(dir) => dir,
        Err(e) => return fail(&e),
    };

    let layout = PackageLayout::new(&repo_root, &pkg_dir, &config);
    let lister = git::GitChangeLister::new(&repo_root);
    let mut engine = ContractEngine::new(layout, &config);

    match engine.run(&scope, &lister) {
        Ok(report) => {
            if cli.verbose && !cli.json {
                for file in &report.files_checked {
                    eprintln!("docpact: checked {file}");
                }
            }
            print!("{}", formatter.format_report(&report));
            if report.ok {
                0
            } else {
                1
            }
        }
        Err(e) => fail(&e),
    }
}

fn fail(error: &FatalError) -> i32 {
    eprintln!("docpact: {error}");
    eprintln!("docpact: {}", error.hint());
    error.exit_code()
}
