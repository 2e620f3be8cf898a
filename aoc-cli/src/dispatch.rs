//! Argument dispatch.
//!
//! Arguments are matched against a fixed, ordered pattern table; the first
//! entry whose shape and captures both work out wins. A capture that parses
//! badly (say a day that overflows `u8`) makes the entry a non-match and the
//! table keeps going, so `aoc 2023-300` ends at the usage text rather than in
//! an error. The one exception is `update last` outside December 1-25, which
//! is a fatal error by design: falling through to `update <year>-<day>` would
//! silently reinterpret the request.

use std::collections::HashMap;
use std::sync::OnceLock;

use chrono::{Datelike, NaiveDate};
use regex::Regex;

use aoc_runner::{Solver, SolverRegistry};

use crate::error::CliError;

/// What a matched argument vector asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Run solvers against their fixtures.
    Run(Scope),
    /// Download and scaffold one day.
    Update { year: u16, day: u8 },
    /// Print the registered solvers.
    List,
}

/// Which solvers a run covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Day { year: u16, day: u8 },
    Year { year: u16 },
    All,
    Latest,
}

/// Outcome of resolving a run scope against the registry.
pub enum Resolution {
    /// Solvers to run, in registry order.
    Run(Vec<&'static dyn Solver>),
    /// Nothing registered for the scope; the message is printed as-is.
    Miss(String),
}

type Build = fn(&[String], NaiveDate) -> Result<Option<Request>, CliError>;

/// One pattern per argument, applied positionally and anchored on both ends.
const PATTERNS: &[(&[&str], Build)] = &[
    (&["update", r"([0-9]+)[/-]([0-9]+)"], build_update_day),
    (&["update", "last"], build_update_last),
    (&[r"([0-9]+)[/-]([0-9]+)"], build_run_day),
    (&["[0-9]+"], build_run_year),
    (&[r"([0-9]+)[/-]all"], build_run_year_all),
    (&["all"], build_run_all),
    (&["last"], build_run_latest),
    (&["list"], build_list),
];

/// Match the argument vector against the pattern table.
///
/// `Ok(None)` means nothing matched; the caller prints usage and exits
/// successfully. `today` anchors the `update last` window.
pub fn dispatch(args: &[String], today: NaiveDate) -> Result<Option<Request>, CliError> {
    for (patterns, build) in PATTERNS {
        let Some(captures) = capture(args, patterns) else {
            continue;
        };
        if let Some(request) = build(&captures, today)? {
            return Ok(Some(request));
        }
    }
    Ok(None)
}

/// Capture groups of every argument, flattened in order.
///
/// An argument matched by a group-free pattern contributes itself, so the
/// builders see one string per meaningful token.
fn capture(args: &[String], patterns: &[&str]) -> Option<Vec<String>> {
    if args.len() != patterns.len() {
        return None;
    }
    let mut captured = Vec::new();
    for (arg, pattern) in args.iter().zip(patterns) {
        let caps = pattern_regex(pattern).captures(arg)?;
        if caps.len() > 1 {
            captured.extend(
                caps.iter()
                    .skip(1)
                    .flatten()
                    .map(|group| group.as_str().to_string()),
            );
        } else {
            captured.push(arg.clone());
        }
    }
    Some(captured)
}

/// Compiled, anchored form of one table pattern; the whole table is
/// compiled once on first use.
fn pattern_regex(pattern: &str) -> &'static Regex {
    static COMPILED: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();
    &COMPILED.get_or_init(|| {
        PATTERNS
            .iter()
            .flat_map(|(patterns, _)| patterns.iter())
            .map(|&pattern| (pattern, Regex::new(&format!("^(?:{pattern})$")).unwrap()))
            .collect()
    })[pattern]
}

fn parse_coordinate(year: &str, day: &str) -> Option<(u16, u8)> {
    Some((year.parse().ok()?, day.parse().ok()?))
}

fn build_update_day(captures: &[String], _today: NaiveDate) -> Result<Option<Request>, CliError> {
    let [_, year, day] = captures else {
        return Ok(None);
    };
    Ok(parse_coordinate(year, day).map(|(year, day)| Request::Update { year, day }))
}

fn build_update_last(_captures: &[String], today: NaiveDate) -> Result<Option<Request>, CliError> {
    if today.month() != 12 || !(1..=25).contains(&today.day()) {
        return Err(CliError::EventNotActive);
    }
    Ok(Some(Request::Update {
        year: today.year() as u16,
        day: today.day() as u8,
    }))
}

fn build_run_day(captures: &[String], _today: NaiveDate) -> Result<Option<Request>, CliError> {
    let [year, day] = captures else {
        return Ok(None);
    };
    Ok(parse_coordinate(year, day).map(|(year, day)| Request::Run(Scope::Day { year, day })))
}

fn build_run_year(captures: &[String], _today: NaiveDate) -> Result<Option<Request>, CliError> {
    let [year] = captures else {
        return Ok(None);
    };
    Ok(year.parse().ok().map(|year| Request::Run(Scope::Year { year })))
}

fn build_run_year_all(captures: &[String], today: NaiveDate) -> Result<Option<Request>, CliError> {
    build_run_year(captures, today)
}

fn build_run_all(_captures: &[String], _today: NaiveDate) -> Result<Option<Request>, CliError> {
    Ok(Some(Request::Run(Scope::All)))
}

fn build_run_latest(_captures: &[String], _today: NaiveDate) -> Result<Option<Request>, CliError> {
    Ok(Some(Request::Run(Scope::Latest)))
}

fn build_list(_captures: &[String], _today: NaiveDate) -> Result<Option<Request>, CliError> {
    Ok(Some(Request::List))
}

/// Solvers for a run scope, or the message to print when there are none.
pub fn resolve(registry: &SolverRegistry, scope: &Scope) -> Resolution {
    match scope {
        Scope::Day { year, day } => match registry.get(*year, *day) {
            Some(solver) => Resolution::Run(vec![solver]),
            None => Resolution::Miss(format!(
                "Unable to find a problem solver for {year}-{day}."
            )),
        },
        Scope::Year { year } => {
            let solvers = registry.for_year(*year);
            if solvers.is_empty() {
                Resolution::Miss(format!("Unable to find problem solvers for {year}."))
            } else {
                Resolution::Run(solvers)
            }
        }
        Scope::All => {
            let solvers = registry.all();
            if solvers.is_empty() {
                Resolution::Miss("Unable to find any problem solvers.".to_string())
            } else {
                Resolution::Run(solvers)
            }
        }
        Scope::Latest => match registry.latest() {
            Some(solver) => Resolution::Run(vec![solver]),
            None => Resolution::Miss("Unable to find a problem solver.".to_string()),
        },
    }
}

pub fn usage() -> &'static str {
    "\
Usage: aoc [arguments]
Supported arguments:

 [year]-[day|all]      Solve the specified problems
 [year]                Solve the whole year
 last                  Solve the last problem
 all                   Solve everything
 list                  List available solvers

To start working on new problems:

 update [year]-[day]   Prepares a folder for the given day: downloads the
                       input, writes the readme and creates a solution
                       template.
 update last           Same as above for the current day. Works in December
                       only.
"
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_runner::solver::{Parts, SolveContext};

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn summer() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn day_coordinates_accept_dash_and_slash() {
        for separator in ["-", "/"] {
            let request = dispatch(&[format!("2023{separator}4")], summer()).unwrap();
            assert_eq!(
                request,
                Some(Request::Run(Scope::Day { year: 2023, day: 4 }))
            );
        }
    }

    #[test]
    fn bare_year_runs_the_year() {
        let request = dispatch(&args(&["2023"]), summer()).unwrap();
        assert_eq!(request, Some(Request::Run(Scope::Year { year: 2023 })));
    }

    #[test]
    fn year_all_runs_the_year() {
        let request = dispatch(&args(&["2023-all"]), summer()).unwrap();
        assert_eq!(request, Some(Request::Run(Scope::Year { year: 2023 })));
    }

    #[test]
    fn keywords_map_to_their_scopes() {
        assert_eq!(
            dispatch(&args(&["all"]), summer()).unwrap(),
            Some(Request::Run(Scope::All))
        );
        assert_eq!(
            dispatch(&args(&["last"]), summer()).unwrap(),
            Some(Request::Run(Scope::Latest))
        );
        assert_eq!(
            dispatch(&args(&["list"]), summer()).unwrap(),
            Some(Request::List)
        );
    }

    #[test]
    fn update_takes_a_day_coordinate() {
        let request = dispatch(&args(&["update", "2023/4"]), summer()).unwrap();
        assert_eq!(request, Some(Request::Update { year: 2023, day: 4 }));
    }

    #[test]
    fn update_last_inside_december_targets_today() {
        let today = NaiveDate::from_ymd_opt(2023, 12, 5).unwrap();
        let request = dispatch(&args(&["update", "last"]), today).unwrap();
        assert_eq!(request, Some(Request::Update { year: 2023, day: 5 }));
    }

    #[test]
    fn update_last_outside_the_window_is_fatal() {
        for date in [(2023, 11, 30), (2023, 12, 26), (2024, 6, 15)] {
            let today = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
            let error = dispatch(&args(&["update", "last"]), today).unwrap_err();
            assert!(matches!(error, CliError::EventNotActive));
        }
    }

    #[test]
    fn overflowing_captures_fall_through_to_usage() {
        // Day over u8 and year over u16 both shape-match but fail to parse.
        assert_eq!(dispatch(&args(&["2023-300"]), summer()).unwrap(), None);
        assert_eq!(dispatch(&args(&["99999"]), summer()).unwrap(), None);
        assert_eq!(
            dispatch(&args(&["update", "2023-300"]), summer()).unwrap(),
            None
        );
    }

    #[test]
    fn unmatched_shapes_fall_through_to_usage() {
        assert_eq!(dispatch(&args(&[]), summer()).unwrap(), None);
        assert_eq!(dispatch(&args(&["update"]), summer()).unwrap(), None);
        assert_eq!(dispatch(&args(&["2023", "4"]), summer()).unwrap(), None);
        assert_eq!(dispatch(&args(&["solve-me"]), summer()).unwrap(), None);
    }

    struct Fake {
        year: u16,
        day: u8,
    }

    impl Solver for Fake {
        fn year(&self) -> u16 {
            self.year
        }

        fn day(&self) -> u8 {
            self.day
        }

        fn name(&self) -> &str {
            "fake"
        }

        fn solve<'a>(&'a self, _input: &'a str, _ctx: &'a SolveContext) -> Parts<'a> {
            Box::new(std::iter::empty())
        }
    }

    fn registry(coordinates: &[(u16, u8)]) -> SolverRegistry {
        SolverRegistry::from_solvers(coordinates.iter().map(|&(year, day)| {
            Box::leak(Box::new(Fake { year, day })) as &'static dyn Solver
        }))
        .unwrap()
    }

    fn resolved_coordinates(resolution: Resolution) -> Vec<(u16, u8)> {
        match resolution {
            Resolution::Run(solvers) => solvers
                .iter()
                .map(|solver| (solver.year(), solver.day()))
                .collect(),
            Resolution::Miss(message) => panic!("unexpected miss: {message}"),
        }
    }

    fn miss_message(resolution: Resolution) -> String {
        match resolution {
            Resolution::Miss(message) => message,
            Resolution::Run(_) => panic!("unexpected run"),
        }
    }

    #[test]
    fn day_scope_resolves_to_one_solver() {
        let registry = registry(&[(2023, 4), (2023, 6)]);
        let resolution = resolve(&registry, &Scope::Day { year: 2023, day: 6 });
        assert_eq!(resolved_coordinates(resolution), [(2023, 6)]);
    }

    #[test]
    fn day_miss_names_the_coordinate() {
        let registry = registry(&[(2023, 4)]);
        let resolution = resolve(&registry, &Scope::Day { year: 2023, day: 7 });
        assert_eq!(
            miss_message(resolution),
            "Unable to find a problem solver for 2023-7."
        );
    }

    #[test]
    fn year_scope_resolves_in_day_order() {
        let registry = registry(&[(2023, 15), (2023, 4), (2024, 1)]);
        let resolution = resolve(&registry, &Scope::Year { year: 2023 });
        assert_eq!(resolved_coordinates(resolution), [(2023, 4), (2023, 15)]);
    }

    #[test]
    fn empty_scopes_miss_with_a_message() {
        let registry = registry(&[]);
        assert_eq!(
            miss_message(resolve(&registry, &Scope::Year { year: 2023 })),
            "Unable to find problem solvers for 2023."
        );
        assert_eq!(
            miss_message(resolve(&registry, &Scope::All)),
            "Unable to find any problem solvers."
        );
        assert_eq!(
            miss_message(resolve(&registry, &Scope::Latest)),
            "Unable to find a problem solver."
        );
    }

    #[test]
    fn latest_scope_resolves_to_the_newest_solver() {
        let registry = registry(&[(2023, 15), (2024, 2), (2024, 1)]);
        let resolution = resolve(&registry, &Scope::Latest);
        assert_eq!(resolved_coordinates(resolution), [(2024, 2)]);
    }
}
