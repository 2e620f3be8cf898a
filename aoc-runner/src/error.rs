//! Error types shared across the harness.

use std::path::PathBuf;

use thiserror::Error;

/// Error raised while building the solver registry.
///
/// Both variants are startup errors: a registration that trips one is a
/// programming mistake in a solution crate, not a runtime condition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Two solvers claimed the same (year, day) coordinate.
    #[error("duplicate solver registration for {year} day {day}")]
    Duplicate { year: u16, day: u8 },

    /// A solver reported a coordinate outside the event calendar.
    #[error("solver coordinate {year} day {day} is out of range")]
    OutOfRange { year: u16, day: u8 },
}

/// Error produced by a solver while working on one part.
#[derive(Error, Debug, Clone)]
pub enum SolveError {
    /// The input text does not have the shape the puzzle promises.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The solver reached a state the puzzle statement rules out.
    #[error("unsolvable: {0}")]
    Unsolvable(String),

    /// Writing to a diagnostic sink failed.
    #[error("diagnostic write failed")]
    Diagnostics(#[from] std::fmt::Error),
}

/// Error raised during fixture discovery or file access.
#[derive(Error, Debug)]
pub enum FixtureError {
    /// A fixture file or directory could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reason a single fixture run was cut short.
///
/// An abort ends that fixture only; the runner carries on with the next
/// fixture and the next solver.
#[derive(Error, Debug)]
pub enum RunError {
    /// The part stream produced an error instead of a value.
    #[error("part {part} failed: {source}")]
    Solve {
        part: usize,
        #[source]
        source: SolveError,
    },

    /// The fixture's input or reference file could not be read.
    #[error(transparent)]
    Fixture(#[from] FixtureError),
}
