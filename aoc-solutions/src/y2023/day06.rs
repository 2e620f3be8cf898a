//! Day 6: Wait For It

use std::fmt::Write as _;

use aoc_runner::parsing;
use aoc_runner::solver::{Parts, SolveContext, Solver};
use aoc_runner::{Registration, SolveError, parts};

pub struct Day06;

impl Solver for Day06 {
    fn year(&self) -> u16 {
        2023
    }

    fn day(&self) -> u8 {
        6
    }

    fn name(&self) -> &str {
        "Wait For It"
    }

    fn solve<'a>(&'a self, input: &'a str, ctx: &'a SolveContext) -> Parts<'a> {
        parts![part_one(input), part_two(input, ctx)]
    }
}

aoc_runner::inventory::submit! {
    Registration { solver: &Day06 }
}

/// Pairs the time row with the distance row.
fn parse_races(input: &str) -> Result<Vec<(i64, i64)>, SolveError> {
    let mut lines = parsing::lines(input);
    let times: Vec<i64> = lines
        .next()
        .map(parsing::integers)
        .ok_or_else(|| SolveError::InvalidInput("missing time line".into()))?
        .collect();
    let records: Vec<i64> = lines
        .next()
        .map(parsing::integers)
        .ok_or_else(|| SolveError::InvalidInput("missing distance line".into()))?
        .collect();
    if times.len() != records.len() {
        return Err(SolveError::InvalidInput(format!(
            "{} times but {} distances",
            times.len(),
            records.len()
        )));
    }
    Ok(times.into_iter().zip(records).collect())
}

/// Holding the button for `hold` ms covers `hold * (time - hold)` mm.
fn ways_to_beat(time: i64, record: i64) -> usize {
    (1..time).filter(|hold| hold * (time - hold) > record).count()
}

fn part_one(input: &str) -> Result<usize, SolveError> {
    Ok(parse_races(input)?
        .into_iter()
        .map(|(time, record)| ways_to_beat(time, record))
        .product())
}

/// Ignoring the spaces merges every column into one long race.
fn concat_digits(line: &str) -> Result<i64, SolveError> {
    let digits: String = line.chars().filter(char::is_ascii_digit).collect();
    digits
        .parse()
        .map_err(|_| SolveError::InvalidInput(format!("no merged number in {line:?}")))
}

fn part_two(input: &str, ctx: &SolveContext) -> Result<usize, SolveError> {
    let mut lines = parsing::lines(input);
    let time = lines
        .next()
        .map(concat_digits)
        .ok_or_else(|| SolveError::InvalidInput("missing time line".into()))??;
    let record = lines
        .next()
        .map(concat_digits)
        .ok_or_else(|| SolveError::InvalidInput("missing distance line".into()))??;
    writeln!(ctx.diagnostics(2), "merged race: time {time}, record {record}")?;
    Ok(ways_to_beat(time, record))
}
