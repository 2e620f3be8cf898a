//! Day 15: Lens Library

use aoc_runner::solver::{Parts, SolveContext, Solver};
use aoc_runner::{Registration, SolveError, parts};

pub struct Day15;

impl Solver for Day15 {
    fn year(&self) -> u16 {
        2023
    }

    fn day(&self) -> u8 {
        15
    }

    fn name(&self) -> &str {
        "Lens Library"
    }

    fn solve<'a>(&'a self, input: &'a str, _ctx: &'a SolveContext) -> Parts<'a> {
        parts![part_one(input), part_two(input)]
    }
}

aoc_runner::inventory::submit! {
    Registration { solver: &Day15 }
}

fn hash(step: &str) -> usize {
    step.bytes().fold(0, |acc, byte| (acc + usize::from(byte)) * 17 % 256)
}

fn steps(input: &str) -> impl Iterator<Item = &str> {
    input.trim().split(',').map(str::trim)
}

fn part_one(input: &str) -> Result<usize, SolveError> {
    Ok(steps(input).map(hash).sum())
}

/// Runs the steps against 256 ordered boxes. `label=n` replaces the lens with
/// that label or appends it; `label-` removes it and closes the gap.
fn part_two(input: &str) -> Result<usize, SolveError> {
    let mut boxes: Vec<Vec<(&str, u32)>> = vec![Vec::new(); 256];
    for step in steps(input) {
        if let Some(label) = step.strip_suffix('-') {
            boxes[hash(label)].retain(|&(existing, _)| existing != label);
        } else if let Some((label, focal)) = step.split_once('=') {
            let focal: u32 = focal.parse().map_err(|_| {
                SolveError::InvalidInput(format!("bad focal length in {step:?}"))
            })?;
            let slots = &mut boxes[hash(label)];
            match slots.iter_mut().find(|(existing, _)| *existing == label) {
                Some(slot) => slot.1 = focal,
                None => slots.push((label, focal)),
            }
        } else {
            return Err(SolveError::InvalidInput(format!(
                "step {step:?} is neither 'label=n' nor 'label-'"
            )));
        }
    }
    Ok(boxes
        .iter()
        .enumerate()
        .flat_map(|(box_index, slots)| {
            slots
                .iter()
                .enumerate()
                .map(move |(slot, &(_, focal))| (box_index + 1) * (slot + 1) * focal as usize)
        })
        .sum())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "rn=1,cm-,qp=3,cm=2,qp-,pc=4,ot=9,ab=5,pc-,pc=6,ot=7";

    #[test]
    fn hash_of_the_word_hash_is_52() {
        assert_eq!(hash("HASH"), 52);
    }

    #[test]
    fn part_one_example() {
        assert_eq!(part_one(EXAMPLE).unwrap(), 1320);
    }

    #[test]
    fn part_two_example() {
        assert_eq!(part_two(EXAMPLE).unwrap(), 145);
    }

    #[test]
    fn removing_a_missing_lens_is_harmless() {
        assert_eq!(part_two("xy-").unwrap(), 0);
    }

    #[test]
    fn malformed_steps_are_rejected() {
        assert!(part_two("rn").is_err());
    }
}
