//! Day 1: Trebuchet?!

use aoc_runner::solver::{Parts, SolveContext, Solver};
use aoc_runner::{Registration, SolveError, parts};

pub struct Day01;

impl Solver for Day01 {
    fn year(&self) -> u16 {
        2023
    }

    fn day(&self) -> u8 {
        1
    }

    fn name(&self) -> &str {
        "Trebuchet?!"
    }

    fn solve<'a>(&'a self, input: &'a str, _ctx: &'a SolveContext) -> Parts<'a> {
        parts![part_one(input), part_two(input)]
    }
}

aoc_runner::inventory::submit! {
    Registration { solver: &Day01 }
}

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

fn digit_at(rest: &str, spelled: bool) -> Option<u32> {
    let first = rest.chars().next()?;
    if let Some(digit) = first.to_digit(10) {
        return Some(digit);
    }
    if spelled {
        SPELLED
            .iter()
            .position(|word| rest.starts_with(word))
            .map(|index| index as u32 + 1)
    } else {
        None
    }
}

/// First and last digit of the line combined into a two-digit value.
/// Occurrences may overlap, so the last digit is found by scanning suffixes
/// from the right rather than by repeating the forward search.
fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    let suffixes = || line.char_indices().map(|(index, _)| &line[index..]);
    let first = suffixes().find_map(|rest| digit_at(rest, spelled))?;
    let last = suffixes().rev().find_map(|rest| digit_at(rest, spelled))?;
    Some(first * 10 + last)
}

fn calibration_sum(input: &str, spelled: bool) -> Result<u32, SolveError> {
    let mut sum = 0;
    for (index, line) in input.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        sum += calibration_value(line, spelled).ok_or_else(|| {
            SolveError::InvalidInput(format!("line {}: no calibration digit", index + 1))
        })?;
    }
    Ok(sum)
}

fn part_one(input: &str) -> Result<u32, SolveError> {
    calibration_sum(input, false)
}

fn part_two(input: &str) -> Result<u32, SolveError> {
    calibration_sum(input, true)
}
