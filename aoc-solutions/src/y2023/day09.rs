//! Day 9: Mirage Maintenance

use aoc_runner::parsing;
use aoc_runner::solver::{Parts, SolveContext, Solver};
use aoc_runner::{Registration, SolveError, parts};

pub struct Day09;

impl Solver for Day09 {
    fn year(&self) -> u16 {
        2023
    }

    fn day(&self) -> u8 {
        9
    }

    fn name(&self) -> &str {
        "Mirage Maintenance"
    }

    fn solve<'a>(&'a self, input: &'a str, _ctx: &'a SolveContext) -> Parts<'a> {
        parts![part_one(input), part_two(input)]
    }
}

aoc_runner::inventory::submit! {
    Registration { solver: &Day09 }
}

fn parse_histories(input: &str) -> Result<Vec<Vec<i64>>, SolveError> {
    let histories: Vec<Vec<i64>> = parsing::lines(input)
        .map(|line| parsing::integers(line).collect())
        .collect();
    if histories.iter().any(Vec::is_empty) {
        return Err(SolveError::InvalidInput("history without values".into()));
    }
    Ok(histories)
}

/// Next value is the last value plus the extrapolation of the difference
/// sequence, bottoming out when every difference is zero.
fn extrapolate(values: &[i64]) -> i64 {
    if values.iter().all(|&v| v == 0) {
        return 0;
    }
    let differences: Vec<i64> = values.windows(2).map(|pair| pair[1] - pair[0]).collect();
    values.last().copied().unwrap_or(0) + extrapolate(&differences)
}

fn part_one(input: &str) -> Result<i64, SolveError> {
    Ok(parse_histories(input)?
        .iter()
        .map(|history| extrapolate(history))
        .sum())
}

/// Extrapolating backwards is extrapolating the reversed history forwards.
fn part_two(input: &str) -> Result<i64, SolveError> {
    Ok(parse_histories(input)?
        .into_iter()
        .map(|mut history| {
            history.reverse();
            extrapolate(&history)
        })
        .sum())
}
