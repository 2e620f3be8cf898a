//! Runs every registered solver against the committed example fixtures.

use std::path::PathBuf;

use aoc_runner::fixtures::FixtureLocator;
use aoc_runner::runner::{MatchStatus, Reporter, RunReport, SolverRunner};
use aoc_runner::{RunError, Solver, SolverRegistry};

// Linked for its registrations only.
use aoc_solutions as _;

#[derive(Default)]
struct Silent {
    mismatches: Vec<String>,
    aborts: Vec<String>,
}

impl Reporter for Silent {
    fn year_banner(&mut self, _year: u16) {}

    fn solver_header(&mut self, _solver: &dyn Solver) {}

    fn fixture_header(&mut self, _label: &str) {}

    fn part_report(&mut self, report: &RunReport) {
        if let MatchStatus::Mismatched { message } = &report.status {
            self.mismatches.push(message.clone());
        }
    }

    fn fixture_aborted(&mut self, label: &str, error: &RunError) {
        self.aborts.push(format!("{label}: {error}"));
    }
}

fn workspace_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(PathBuf::from)
        .unwrap()
}

#[test]
fn every_example_fixture_matches_its_reference_output() {
    let registry = SolverRegistry::discover().unwrap();
    assert_eq!(registry.len(), 6);

    let mut reporter = Silent::default();
    let locator = FixtureLocator::new(vec![workspace_root()]);
    let summary = SolverRunner::new(locator, &mut reporter)
        .run(&registry.all())
        .unwrap();

    assert!(reporter.mismatches.is_empty(), "{:#?}", reporter.mismatches);
    assert!(reporter.aborts.is_empty(), "{:#?}", reporter.aborts);
    assert_eq!(summary.solvers, 6);
    assert_eq!(summary.mismatched, 0);
    assert_eq!(summary.unknown, 0);
    assert_eq!(summary.aborted, 0);
    assert!(summary.parts >= 12, "only {} parts ran", summary.parts);
    assert_eq!(summary.matched, summary.parts);
}
