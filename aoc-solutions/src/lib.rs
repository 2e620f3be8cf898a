//! Personal Advent of Code solutions.
//!
//! Each day is a unit struct implementing [`aoc_runner::Solver`], registered
//! at link time through the runner's `inventory` re-export. Linking this
//! crate into a binary is all it takes for the registry to see every day
//! below; nothing here is called by name.

pub mod y2023;
