//! Command-line harness for running and updating Advent of Code solutions.

mod console;
mod dispatch;
mod error;
mod update;

// Linked for its solver registrations only.
use aoc_solutions as _;

use std::path::PathBuf;

use chrono::Local;
use itertools::Itertools;

use aoc_runner::fixtures::FixtureLocator;
use aoc_runner::runner::SolverRunner;
use aoc_runner::{Solver, SolverRegistry};

use crate::dispatch::{Request, Resolution};
use crate::error::CliError;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if let Err(error) = run(&args) {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run(args: &[String]) -> Result<(), CliError> {
    let registry = SolverRegistry::discover()?;
    let today = Local::now().date_naive();

    match dispatch::dispatch(args, today)? {
        None => {
            print!("{}", dispatch::usage());
            Ok(())
        }
        Some(Request::Update { year, day }) => update::update(&workspace_root(), year, day),
        Some(Request::List) => {
            print_list(&registry);
            Ok(())
        }
        Some(Request::Run(scope)) => match dispatch::resolve(&registry, &scope) {
            Resolution::Miss(message) => {
                println!("{message}");
                Ok(())
            }
            Resolution::Run(solvers) => run_solvers(&solvers),
        },
    }
}

fn run_solvers(solvers: &[&'static dyn Solver]) -> Result<(), CliError> {
    let locator = FixtureLocator::new(search_roots());
    let mut reporter = console::ConsoleReporter;
    let summary = SolverRunner::new(locator, &mut reporter).run(solvers)?;
    console::print_summary(&summary);

    if summary.aborted > 0 {
        return Err(CliError::AbortedFixtures(summary.aborted));
    }
    Ok(())
}

fn print_list(registry: &SolverRegistry) {
    if registry.is_empty() {
        println!("No solvers registered.");
        return;
    }
    for (year, days) in &registry.coordinates().chunk_by(|&(year, _)| year) {
        println!("{year}: days {}", days.map(|(_, day)| day.to_string()).join(", "));
    }
}

/// Fixture search roots: the process working directory first, then the
/// workspace root, so runs behave the same from the repository root and from
/// a member crate directory.
fn search_roots() -> Vec<PathBuf> {
    let mut roots = Vec::new();
    if let Ok(current) = std::env::current_dir() {
        roots.push(current);
    }
    roots.push(workspace_root());
    roots
}

/// The workspace root, fixed at compile time.
fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}
