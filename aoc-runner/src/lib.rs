//! Harness for personal Advent of Code solutions.
//!
//! The pieces, leaf to root:
//!
//! - [`solver`] defines the [`Solver`] contract: a solver turns input text
//!   into a lazy stream of part values, with a per-invocation
//!   [`SolveContext`] for diagnostic output.
//! - [`registry`] collects link-time [`Registration`]s into an immutable
//!   (year, day) table with ordered lookups.
//! - [`fixtures`] finds the input and reference-output file pairs for a day.
//! - [`runner`] executes solvers against their fixtures, timing every part
//!   and checking each value against its reference line.
//! - [`parsing`] holds small text helpers shared by solutions.
//!
//! Solution crates depend on this crate alone; `inventory` is re-exported
//! below so registration needs no extra dependency.

pub mod error;
pub mod fixtures;
pub mod parsing;
pub mod registry;
pub mod runner;
pub mod solver;

pub use error::{FixtureError, RegistryError, RunError, SolveError};
pub use registry::{Registration, SolverRegistry};
pub use solver::{Parts, SolveContext, Solver};

// Registration macro support; solution crates reach `inventory::submit!`
// through this re-export.
pub use inventory;
