//! Fixture execution and reporting.
//!
//! The runner drives everything strictly in sequence: solvers in the order
//! they were resolved, fixtures in discovery order, parts in the order the
//! solver yields them. Each part is timed around the pull from the lazy part
//! stream and compared against the matching reference line, and every result
//! reaches the [`Reporter`] the moment it is known.

use std::time::{Duration, Instant};

use crate::error::{FixtureError, RunError};
use crate::fixtures::{Fixture, FixtureLocator};
use crate::solver::{SolveContext, Solver};

/// How a part value compared against its reference line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchStatus {
    /// The value equals the reference line.
    Matched,
    /// The value differs; the message names the line and both values.
    Mismatched { message: String },
    /// No reference line exists for this part.
    Unknown,
}

/// Coarse wall-clock classification of one part.
///
/// Presentation only: a severe band does not fail a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeBand {
    Nominal,
    Warning,
    Severe,
}

impl TimeBand {
    /// Parts at or above this duration are flagged as a warning.
    pub const WARNING: Duration = Duration::from_millis(500);

    /// Parts beyond this duration are flagged as severe.
    pub const SEVERE: Duration = Duration::from_millis(1000);

    /// Band for one part's elapsed time.
    pub fn classify(elapsed: Duration) -> Self {
        if elapsed > Self::SEVERE {
            TimeBand::Severe
        } else if elapsed >= Self::WARNING {
            TimeBand::Warning
        } else {
            TimeBand::Nominal
        }
    }
}

/// Everything known about one produced part value.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// 1-based part index.
    pub part: usize,
    /// The stringified answer.
    pub value: String,
    /// Wall-clock time of the pull that produced the value.
    pub elapsed: Duration,
    /// Comparison against the reference line, if one existed.
    pub status: MatchStatus,
    /// Diagnostic text the part wrote to its sink; often empty.
    pub diagnostics: String,
}

/// Counters for a whole run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Solvers visited.
    pub solvers: usize,
    /// Fixtures that produced at least a header (non-empty input).
    pub fixtures: usize,
    /// Part values produced.
    pub parts: usize,
    /// Parts equal to their reference line.
    pub matched: usize,
    /// Parts that differ from their reference line.
    pub mismatched: usize,
    /// Parts with no reference line to compare against.
    pub unknown: usize,
    /// Fixture runs cut short by an error.
    pub aborted: usize,
    /// Total time spent pulling part values.
    pub solve_time: Duration,
}

/// Presentation seam for run progress.
///
/// The runner reports incrementally; implementations decide how (or whether)
/// to render. For a fixture, `fixture_header` always precedes any
/// `part_report` or `fixture_aborted` call.
pub trait Reporter {
    /// A new event year begins.
    fn year_banner(&mut self, year: u16);
    /// A solver is about to run its fixtures.
    fn solver_header(&mut self, solver: &dyn Solver);
    /// A fixture with non-empty (or unreadable) input is about to run.
    fn fixture_header(&mut self, label: &str);
    /// One part value was produced and classified.
    fn part_report(&mut self, report: &RunReport);
    /// The current fixture was cut short.
    fn fixture_aborted(&mut self, label: &str, error: &RunError);
}

/// Executes solvers against their on-disk fixtures.
pub struct SolverRunner<'r> {
    locator: FixtureLocator,
    reporter: &'r mut dyn Reporter,
}

impl<'r> SolverRunner<'r> {
    pub fn new(locator: FixtureLocator, reporter: &'r mut dyn Reporter) -> Self {
        Self { locator, reporter }
    }

    /// Run every solver in order against every fixture found for it.
    ///
    /// A solver error aborts the current fixture only. Fixture discovery
    /// failures end the whole run.
    pub fn run(&mut self, solvers: &[&'static dyn Solver]) -> Result<RunSummary, FixtureError> {
        let mut summary = RunSummary::default();
        let mut current_year = None;
        for &solver in solvers {
            if current_year != Some(solver.year()) {
                self.reporter.year_banner(solver.year());
                current_year = Some(solver.year());
            }
            self.reporter.solver_header(solver);
            summary.solvers += 1;

            let fixtures = self.locator.locate(solver.year(), solver.day())?;
            for fixture in &fixtures {
                self.run_fixture(solver, fixture, &mut summary);
            }
        }
        Ok(summary)
    }

    fn run_fixture(&mut self, solver: &dyn Solver, fixture: &Fixture, summary: &mut RunSummary) {
        let input = match fixture.read_input() {
            Ok(input) => input,
            Err(error) => {
                self.reporter.fixture_header(fixture.label());
                summary.fixtures += 1;
                self.abort(fixture, error.into(), summary);
                return;
            }
        };
        // Placeholders scaffolded by the updater stay empty until the puzzle
        // unlocks; they are skipped without a trace.
        if input.is_empty() {
            return;
        }

        self.reporter.fixture_header(fixture.label());
        summary.fixtures += 1;

        let refout = match fixture.read_refout() {
            Ok(refout) => refout,
            Err(error) => {
                self.abort(fixture, error.into(), summary);
                return;
            }
        };

        let ctx = SolveContext::new();
        let mut parts = solver.solve(&input, &ctx);
        let mut produced = 0usize;
        loop {
            let started = Instant::now();
            let Some(item) = parts.next() else {
                break;
            };
            let elapsed = started.elapsed();
            let part = produced + 1;
            match item {
                Ok(value) => {
                    let status = classify(solver, part, &value, refout.as_deref());
                    match status {
                        MatchStatus::Matched => summary.matched += 1,
                        MatchStatus::Mismatched { .. } => summary.mismatched += 1,
                        MatchStatus::Unknown => summary.unknown += 1,
                    }
                    summary.parts += 1;
                    summary.solve_time += elapsed;

                    self.reporter.part_report(&RunReport {
                        part,
                        value,
                        elapsed,
                        status,
                        diagnostics: ctx.captured(part),
                    });
                    produced = part;
                }
                Err(source) => {
                    self.abort(fixture, RunError::Solve { part, source }, summary);
                    return;
                }
            }
        }
    }

    fn abort(&mut self, fixture: &Fixture, error: RunError, summary: &mut RunSummary) {
        summary.aborted += 1;
        self.reporter.fixture_aborted(fixture.label(), &error);
    }
}

fn classify(solver: &dyn Solver, part: usize, value: &str, refout: Option<&[String]>) -> MatchStatus {
    match refout.and_then(|lines| lines.get(part - 1)) {
        None => MatchStatus::Unknown,
        Some(expected) if expected.as_str() == value => MatchStatus::Matched,
        Some(expected) => MatchStatus::Mismatched {
            message: format!(
                "Day {}: In line {} expected '{}' but found '{}'",
                solver.day(),
                part,
                expected,
                value
            ),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::fixtures::working_dir;
    use crate::parts;
    use crate::solver::Parts;
    use std::fmt::Write as _;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    struct Produces {
        year: u16,
        day: u8,
        values: Vec<Result<String, SolveError>>,
    }

    impl Solver for Produces {
        fn year(&self) -> u16 {
            self.year
        }

        fn day(&self) -> u8 {
            self.day
        }

        fn name(&self) -> &str {
            "produces"
        }

        fn solve<'a>(&'a self, _input: &'a str, _ctx: &'a SolveContext) -> Parts<'a> {
            Box::new(self.values.clone().into_iter())
        }
    }

    fn produces(
        year: u16,
        day: u8,
        values: Vec<Result<String, SolveError>>,
    ) -> &'static dyn Solver {
        Box::leak(Box::new(Produces { year, day, values }))
    }

    fn ok(value: &str) -> Result<String, SolveError> {
        Ok(value.to_string())
    }

    #[derive(Default)]
    struct Recording {
        events: Vec<String>,
        reports: Vec<RunReport>,
    }

    impl Reporter for Recording {
        fn year_banner(&mut self, year: u16) {
            self.events.push(format!("banner {year}"));
        }

        fn solver_header(&mut self, solver: &dyn Solver) {
            self.events
                .push(format!("solver {}-{}", solver.year(), solver.day()));
        }

        fn fixture_header(&mut self, label: &str) {
            self.events.push(format!("fixture {label}"));
        }

        fn part_report(&mut self, report: &RunReport) {
            self.events.push(format!("part {}", report.part));
            self.reports.push(report.clone());
        }

        fn fixture_aborted(&mut self, label: &str, error: &RunError) {
            self.events.push(format!("abort {label}: {error}"));
        }
    }

    fn write_fixture(root: &Path, year: u16, day: u8, name: &str, input: &[u8], refout: Option<&str>) {
        let dir = root.join(working_dir(year, day)).join("test");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{name}.in")), input).unwrap();
        if let Some(expected) = refout {
            fs::write(dir.join(format!("{name}.refout")), expected).unwrap();
        }
    }

    fn run(root: &Path, solvers: &[&'static dyn Solver], reporter: &mut Recording) -> RunSummary {
        let locator = FixtureLocator::new(vec![root.to_path_buf()]);
        SolverRunner::new(locator, reporter).run(solvers).unwrap()
    }

    #[test]
    fn matching_values_count_as_matched() {
        let root = TempDir::new().unwrap();
        write_fixture(root.path(), 2023, 5, "example", b"input\n", Some("4\n8\n"));
        let solver = produces(2023, 5, vec![ok("4"), ok("8")]);

        let mut reporter = Recording::default();
        let summary = run(root.path(), &[solver], &mut reporter);

        assert_eq!(summary.parts, 2);
        assert_eq!(summary.matched, 2);
        assert_eq!(summary.mismatched, 0);
        assert_eq!(summary.unknown, 0);
        assert!(reporter
            .reports
            .iter()
            .all(|report| report.status == MatchStatus::Matched));
    }

    #[test]
    fn reruns_reproduce_values_and_classifications() {
        let root = TempDir::new().unwrap();
        write_fixture(root.path(), 2023, 5, "example", b"input\n", Some("4\n9\n"));
        let solver = produces(2023, 5, vec![ok("4"), ok("8")]);

        let mut first = Recording::default();
        let mut second = Recording::default();
        let summary_one = run(root.path(), &[solver], &mut first);
        let summary_two = run(root.path(), &[solver], &mut second);

        assert_eq!(first.events, second.events);
        let observed = |reporter: &Recording| {
            reporter
                .reports
                .iter()
                .map(|report| (report.part, report.value.clone(), report.status.clone()))
                .collect::<Vec<_>>()
        };
        assert_eq!(observed(&first), observed(&second));
        assert_eq!(summary_one.matched, summary_two.matched);
        assert_eq!(summary_one.mismatched, summary_two.mismatched);
    }

    #[test]
    fn mismatch_message_names_line_and_values() {
        let root = TempDir::new().unwrap();
        write_fixture(root.path(), 2023, 5, "example", b"input\n", Some("4\n8\n"));
        let solver = produces(2023, 5, vec![ok("4"), ok("9")]);

        let mut reporter = Recording::default();
        let summary = run(root.path(), &[solver], &mut reporter);

        assert_eq!(summary.matched, 1);
        assert_eq!(summary.mismatched, 1);
        let MatchStatus::Mismatched { message } = &reporter.reports[1].status else {
            panic!("expected a mismatch, got {:?}", reporter.reports[1].status);
        };
        assert_eq!(message, "Day 5: In line 2 expected '8' but found '9'");
    }

    #[test]
    fn parts_without_reference_lines_are_unknown() {
        let root = TempDir::new().unwrap();
        write_fixture(root.path(), 2023, 5, "example", b"input\n", Some("4\n"));
        let solver = produces(2023, 5, vec![ok("4"), ok("8")]);

        let mut reporter = Recording::default();
        let summary = run(root.path(), &[solver], &mut reporter);

        assert_eq!(summary.matched, 1);
        assert_eq!(summary.unknown, 1);
        assert_eq!(reporter.reports[1].status, MatchStatus::Unknown);
    }

    #[test]
    fn missing_refout_leaves_every_part_unknown() {
        let root = TempDir::new().unwrap();
        write_fixture(root.path(), 2023, 5, "example", b"input\n", None);
        let solver = produces(2023, 5, vec![ok("4"), ok("8")]);

        let mut reporter = Recording::default();
        let summary = run(root.path(), &[solver], &mut reporter);

        assert_eq!(summary.unknown, 2);
        assert_eq!(summary.matched, 0);
    }

    #[test]
    fn whitespace_only_input_skips_the_fixture_silently() {
        let root = TempDir::new().unwrap();
        write_fixture(root.path(), 2023, 5, "example", b"\n  \n", Some("4\n"));
        let solver = produces(2023, 5, vec![ok("4")]);

        let mut reporter = Recording::default();
        let summary = run(root.path(), &[solver], &mut reporter);

        assert_eq!(summary.fixtures, 0);
        assert_eq!(summary.parts, 0);
        assert_eq!(reporter.events, ["banner 2023", "solver 2023-5"]);
    }

    #[test]
    fn solver_error_aborts_the_fixture_but_not_the_batch() {
        let root = TempDir::new().unwrap();
        write_fixture(root.path(), 2023, 5, "example", b"input\n", Some("4\n8\n"));
        write_fixture(root.path(), 2023, 6, "example", b"input\n", Some("288\n"));
        let failing = produces(
            2023,
            5,
            vec![ok("4"), Err(SolveError::Unsolvable("boom".into()))],
        );
        let healthy = produces(2023, 6, vec![ok("288")]);

        let mut reporter = Recording::default();
        let summary = run(root.path(), &[failing, healthy], &mut reporter);

        assert_eq!(summary.aborted, 1);
        assert_eq!(summary.matched, 2);
        assert_eq!(
            reporter.events,
            [
                "banner 2023",
                "solver 2023-5",
                "fixture example",
                "part 1",
                "abort example: part 2 failed: unsolvable: boom",
                "solver 2023-6",
                "fixture example",
                "part 1",
            ]
        );
    }

    #[test]
    fn unreadable_input_aborts_that_fixture_only() {
        let root = TempDir::new().unwrap();
        write_fixture(root.path(), 2023, 5, "example", &[0xff, 0xfe], Some("4\n"));
        write_fixture(root.path(), 2023, 6, "example", b"input\n", Some("288\n"));
        let skipped = produces(2023, 5, vec![ok("4")]);
        let healthy = produces(2023, 6, vec![ok("288")]);

        let mut reporter = Recording::default();
        let summary = run(root.path(), &[skipped, healthy], &mut reporter);

        assert_eq!(summary.aborted, 1);
        assert_eq!(summary.matched, 1);
        assert!(reporter
            .events
            .iter()
            .any(|event| event.starts_with("abort example: failed to read")));
        assert!(reporter.events.contains(&"solver 2023-6".to_string()));
    }

    #[test]
    fn one_banner_per_consecutive_year() {
        let root = TempDir::new().unwrap();
        write_fixture(root.path(), 2022, 1, "example", b"x\n", None);
        write_fixture(root.path(), 2022, 2, "example", b"x\n", None);
        write_fixture(root.path(), 2023, 1, "example", b"x\n", None);
        let solvers = [
            produces(2022, 1, vec![ok("1")]),
            produces(2022, 2, vec![ok("2")]),
            produces(2023, 1, vec![ok("3")]),
        ];

        let mut reporter = Recording::default();
        run(root.path(), &solvers, &mut reporter);

        let banners: Vec<_> = reporter
            .events
            .iter()
            .filter(|event| event.starts_with("banner"))
            .collect();
        assert_eq!(banners, ["banner 2022", "banner 2023"]);
    }

    struct Noisy;

    impl Solver for Noisy {
        fn year(&self) -> u16 {
            2023
        }

        fn day(&self) -> u8 {
            7
        }

        fn name(&self) -> &str {
            "noisy"
        }

        fn solve<'a>(&'a self, _input: &'a str, ctx: &'a SolveContext) -> Parts<'a> {
            parts![
                {
                    writeln!(ctx.diagnostics(1), "probe 7")?;
                    Ok::<_, SolveError>(7)
                },
                Ok::<_, SolveError>(8)
            ]
        }
    }

    #[test]
    fn diagnostics_attach_to_the_part_that_wrote_them() {
        let root = TempDir::new().unwrap();
        write_fixture(root.path(), 2023, 7, "example", b"input\n", None);

        let mut reporter = Recording::default();
        run(root.path(), &[&Noisy], &mut reporter);

        assert_eq!(reporter.reports[0].diagnostics, "probe 7\n");
        assert_eq!(reporter.reports[1].diagnostics, "");
    }

    struct Sleepy;

    impl Solver for Sleepy {
        fn year(&self) -> u16 {
            2023
        }

        fn day(&self) -> u8 {
            8
        }

        fn name(&self) -> &str {
            "sleepy"
        }

        fn solve<'a>(&'a self, _input: &'a str, _ctx: &'a SolveContext) -> Parts<'a> {
            parts![
                {
                    std::thread::sleep(Duration::from_millis(50));
                    Ok::<_, SolveError>(1)
                },
                Ok::<_, SolveError>(2)
            ]
        }
    }

    #[test]
    fn timing_is_attributed_to_the_part_doing_the_work() {
        let root = TempDir::new().unwrap();
        write_fixture(root.path(), 2023, 8, "example", b"input\n", None);

        let mut reporter = Recording::default();
        let summary = run(root.path(), &[&Sleepy], &mut reporter);

        assert!(reporter.reports[0].elapsed >= Duration::from_millis(50));
        assert!(reporter.reports[1].elapsed < Duration::from_millis(50));
        assert!(summary.solve_time >= Duration::from_millis(50));
    }

    #[test]
    fn time_bands_have_fixed_thresholds() {
        assert_eq!(TimeBand::classify(Duration::from_millis(499)), TimeBand::Nominal);
        assert_eq!(TimeBand::classify(Duration::from_millis(500)), TimeBand::Warning);
        assert_eq!(TimeBand::classify(Duration::from_millis(1000)), TimeBand::Warning);
        assert_eq!(TimeBand::classify(Duration::from_millis(1001)), TimeBand::Severe);
    }
}
