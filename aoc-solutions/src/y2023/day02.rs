//! Day 2: Cube Conundrum

use std::str::FromStr;

use aoc_runner::solver::{Parts, SolveContext, Solver};
use aoc_runner::{Registration, SolveError, parsing, parts};

pub struct Day02;

impl Solver for Day02 {
    fn year(&self) -> u16 {
        2023
    }

    fn day(&self) -> u8 {
        2
    }

    fn name(&self) -> &str {
        "Cube Conundrum"
    }

    fn solve<'a>(&'a self, input: &'a str, _ctx: &'a SolveContext) -> Parts<'a> {
        parts![part_one(input), part_two(input)]
    }
}

aoc_runner::inventory::submit! {
    Registration { solver: &Day02 }
}

#[derive(Debug, Default, Clone, Copy)]
struct Draw {
    red: u32,
    green: u32,
    blue: u32,
}

struct Game {
    id: u32,
    draws: Vec<Draw>,
}

fn parse_games(input: &str) -> Result<Vec<Game>, SolveError> {
    parsing::parse_lines(input)
}

impl FromStr for Game {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        parse_game(line).ok_or_else(|| "malformed game record".to_string())
    }
}

fn parse_game(line: &str) -> Option<Game> {
    let (head, rest) = line.split_once(':')?;
    let id = head.strip_prefix("Game ")?.trim().parse().ok()?;
    let draws = rest.split(';').map(parse_draw).collect::<Option<Vec<_>>>()?;
    Some(Game { id, draws })
}

fn parse_draw(text: &str) -> Option<Draw> {
    let mut draw = Draw::default();
    for cubes in text.split(',') {
        let (count, color) = cubes.trim().split_once(' ')?;
        let count = count.parse().ok()?;
        match color.trim() {
            "red" => draw.red = count,
            "green" => draw.green = count,
            "blue" => draw.blue = count,
            _ => return None,
        }
    }
    Some(draw)
}

/// Sum of IDs of games playable with 12 red, 13 green and 14 blue cubes.
fn part_one(input: &str) -> Result<u32, SolveError> {
    let games = parse_games(input)?;
    Ok(games
        .iter()
        .filter(|game| {
            game.draws
                .iter()
                .all(|draw| draw.red <= 12 && draw.green <= 13 && draw.blue <= 14)
        })
        .map(|game| game.id)
        .sum())
}

/// Sum of the power of the minimal cube set of every game.
fn part_two(input: &str) -> Result<u32, SolveError> {
    let games = parse_games(input)?;
    Ok(games
        .iter()
        .map(|game| {
            let mut needed = Draw::default();
            for draw in &game.draws {
                needed.red = needed.red.max(draw.red);
                needed.green = needed.green.max(draw.green);
                needed.blue = needed.blue.max(draw.blue);
            }
            needed.red * needed.green * needed.blue
        })
        .sum())
}
