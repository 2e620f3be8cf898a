//! Small text helpers shared by solutions.

use std::str::FromStr;

use crate::error::SolveError;

/// Non-empty lines of the input, in order.
pub fn lines(input: &str) -> impl Iterator<Item = &str> {
    input.lines().filter(|line| !line.is_empty())
}

/// Every embedded integer in the text, signed, in order of appearance.
///
/// A `-` or `+` directly before a digit run is taken as its sign, so
/// `"x=-3 y=+14"` yields `-3` and `14`, and `"1-2"` yields `1` and `-2`.
pub fn integers(input: &str) -> impl Iterator<Item = i64> + '_ {
    let bytes = input.as_bytes();
    let mut index = 0;
    std::iter::from_fn(move || {
        while index < bytes.len() {
            let signed = matches!(bytes[index], b'+' | b'-')
                && bytes.get(index + 1).is_some_and(u8::is_ascii_digit);
            if signed || bytes[index].is_ascii_digit() {
                let start = index;
                index += 1;
                while index < bytes.len() && bytes[index].is_ascii_digit() {
                    index += 1;
                }
                if let Ok(value) = input[start..index].parse::<i64>() {
                    return Some(value);
                }
                // A digit run too long for i64; skip it and keep scanning.
                continue;
            }
            index += 1;
        }
        None
    })
}

/// Parse every non-empty line with `FromStr`, reporting the 1-based line
/// number of the first failure.
pub fn parse_lines<T>(input: &str) -> Result<Vec<T>, SolveError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(index, line)| {
            line.parse().map_err(|error: T::Err| {
                SolveError::InvalidInput(format!("line {}: {error}", index + 1))
            })
        })
        .collect()
}
