//! Day 4: Scratchcards

use std::collections::HashSet;

use aoc_runner::parsing;
use aoc_runner::solver::{Parts, SolveContext, Solver};
use aoc_runner::{Registration, SolveError, parts};

pub struct Day04;

impl Solver for Day04 {
    fn year(&self) -> u16 {
        2023
    }

    fn day(&self) -> u8 {
        4
    }

    fn name(&self) -> &str {
        "Scratchcards"
    }

    fn solve<'a>(&'a self, input: &'a str, _ctx: &'a SolveContext) -> Parts<'a> {
        parts![part_one(input), part_two(input)]
    }
}

aoc_runner::inventory::submit! {
    Registration { solver: &Day04 }
}

/// Winning-number hits per card, in card order. The number after "Card" is
/// ignored; position decides everything.
fn matches_per_card(input: &str) -> Result<Vec<usize>, SolveError> {
    let mut matches = Vec::new();
    for (index, line) in input.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let (_, numbers) = line.split_once(':').ok_or_else(|| {
            SolveError::InvalidInput(format!("line {}: missing ':'", index + 1))
        })?;
        let (winning, have) = numbers.split_once('|').ok_or_else(|| {
            SolveError::InvalidInput(format!("line {}: missing '|'", index + 1))
        })?;
        let winning: HashSet<i64> = parsing::integers(winning).collect();
        matches.push(parsing::integers(have).filter(|n| winning.contains(n)).count());
    }
    Ok(matches)
}

/// Points double per extra match: n matches are worth 2^(n-1).
fn part_one(input: &str) -> Result<u32, SolveError> {
    Ok(matches_per_card(input)?
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| 1u32 << (count - 1))
        .sum())
}

/// Each of a card's n matches wins a copy of each of the next n cards.
fn part_two(input: &str) -> Result<u64, SolveError> {
    let matches = matches_per_card(input)?;
    let mut copies = vec![1u64; matches.len()];
    for index in 0..matches.len() {
        let here = copies[index];
        for later in copies.iter_mut().skip(index + 1).take(matches[index]) {
            *later += here;
        }
    }
    Ok(copies.into_iter().sum())
}
