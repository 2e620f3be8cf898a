//! Plain-text rendering of run progress.

use std::time::Duration;

use aoc_runner::runner::{MatchStatus, Reporter, RunReport, RunSummary, TimeBand};
use aoc_runner::{RunError, Solver};

/// Streams run progress to stdout line by line.
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn year_banner(&mut self, year: u16) {
        println!();
        println!("{:=^44}", format!(" Advent of Code {year} "));
    }

    fn solver_header(&mut self, solver: &dyn Solver) {
        println!();
        println!("Day {}: {}", solver.day(), solver.name());
    }

    fn fixture_header(&mut self, label: &str) {
        println!("  {label}");
    }

    fn part_report(&mut self, report: &RunReport) {
        let glyph = match &report.status {
            MatchStatus::Matched => "✓",
            MatchStatus::Mismatched { .. } => "✗",
            MatchStatus::Unknown => "?",
        };
        let marker = match TimeBand::classify(report.elapsed) {
            TimeBand::Nominal => "",
            TimeBand::Warning => " !",
            TimeBand::Severe => " !!",
        };
        println!(
            "    {} {} {}  ({}{})",
            report.part,
            glyph,
            report.value,
            format_duration(report.elapsed),
            marker
        );
        if let MatchStatus::Mismatched { message } = &report.status {
            println!("      {message}");
        }
        for line in report.diagnostics.lines() {
            println!("      | {line}");
        }
    }

    fn fixture_aborted(&mut self, _label: &str, error: &RunError) {
        println!("    ! aborted: {error}");
    }
}

/// Closing totals, printed once the runner is done.
pub fn print_summary(summary: &RunSummary) {
    println!();
    println!("--- Summary ---");
    println!(
        "Solvers: {}, fixtures: {}, parts: {}",
        summary.solvers, summary.fixtures, summary.parts
    );
    println!(
        "Matched: {}, mismatched: {}, unknown: {}",
        summary.matched, summary.mismatched, summary.unknown
    );
    if summary.aborted > 0 {
        println!("Aborted fixtures: {}", summary.aborted);
    }
    println!("Total solve time: {}", format_duration(summary.solve_time));
}

fn format_duration(duration: Duration) -> String {
    let micros = duration.as_micros();
    if micros < 1000 {
        format!("{micros}µs")
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", duration.as_secs_f64())
    }
}
