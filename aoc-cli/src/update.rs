//! Day scaffolding and download.
//!
//! `update <year>-<day>` fetches the puzzle page and the personal input,
//! then lays out everything needed to start working on the day: the input
//! pair, empty example placeholders, the statement as a README, a solution
//! template and the module declarations hooking it into the solutions crate.
//! Files with personal work in them are never clobbered.

use std::fs;
use std::path::Path;

use zeroize::Zeroizing;

use aoc_client::{PuzzlePage, SiteClient};
use aoc_runner::fixtures::working_dir;

use crate::error::CliError;

/// Environment variable holding the adventofcode.com session cookie.
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Session cookie from the environment; checked before any network traffic.
pub fn session_from_env() -> Result<Zeroizing<String>, CliError> {
    std::env::var(SESSION_ENV)
        .ok()
        .filter(|session| !session.trim().is_empty())
        .map(Zeroizing::new)
        .ok_or(CliError::MissingSession(SESSION_ENV))
}

/// Download one day and scaffold its working tree under `root`.
pub fn update(root: &Path, year: u16, day: u8) -> Result<(), CliError> {
    let session = session_from_env()?;
    let client = SiteClient::new()?;

    let page_url = client.puzzle_url(year, day)?;
    println!("Downloading {page_url}");
    let page = client.puzzle_page(year, day, &session)?;

    println!("Downloading {}", client.input_url(year, day)?);
    let input = client.puzzle_input(year, day, &session)?;

    apply(root, year, day, page_url.as_str(), &page, &input)
}

/// Write everything derived from a downloaded day into the tree at `root`.
fn apply(
    root: &Path,
    year: u16,
    day: u8,
    url: &str,
    page: &PuzzlePage,
    input: &str,
) -> Result<(), CliError> {
    let day_dir = root.join(working_dir(year, day));

    write_file(&day_dir.join("input.in"), input)?;
    if !page.answers.is_empty() {
        let mut refout = page.answers.join("\n");
        refout.push('\n');
        write_file(&day_dir.join("input.refout"), &refout)?;
    }
    write_file_if_missing(&day_dir.join("test/example.in"), "")?;
    write_file_if_missing(&day_dir.join("test/example.refout"), "")?;

    let readme = format!("original source: [{url}]({url})\n\n{}", page.statement_md);
    write_file(&day_dir.join("README.md"), &readme)?;

    let solution_path = root
        .join("aoc-solutions/src")
        .join(format!("y{year}"))
        .join(format!("day{day:02}.rs"));
    if !solution_path.exists() {
        write_file(&solution_path, &solution_template(year, day, &page.title))?;
    }
    register_module(root, year, day)
}

fn write_file(path: &Path, content: &str) -> Result<(), CliError> {
    let io_error = |source| CliError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    println!("Writing {}", path.display());
    fs::write(path, content).map_err(io_error)
}

fn write_file_if_missing(path: &Path, content: &str) -> Result<(), CliError> {
    if path.exists() {
        return Ok(());
    }
    write_file(path, content)
}

/// Source for a fresh, not yet solved day.
fn solution_template(year: u16, day: u8, title: &str) -> String {
    format!(
        r#"//! Day {day}: {title}

use aoc_runner::solver::{{Parts, SolveContext, Solver}};
use aoc_runner::{{Registration, SolveError, parts}};

pub struct Day{day:02};

impl Solver for Day{day:02} {{
    fn year(&self) -> u16 {{
        {year}
    }}

    fn day(&self) -> u8 {{
        {day}
    }}

    fn name(&self) -> &str {{
        "{title}"
    }}

    fn solve<'a>(&'a self, input: &'a str, _ctx: &'a SolveContext) -> Parts<'a> {{
        parts![part_one(input), part_two(input)]
    }}
}}

aoc_runner::inventory::submit! {{
    Registration {{ solver: &Day{day:02} }}
}}

fn part_one(_input: &str) -> Result<u64, SolveError> {{
    Err(SolveError::Unsolvable("part 1 is not implemented yet".into()))
}}

fn part_two(_input: &str) -> Result<u64, SolveError> {{
    Err(SolveError::Unsolvable("part 2 is not implemented yet".into()))
}}
"#
    )
}

/// Hook the day into the solutions crate: a `mod` line in the year module, a
/// `pub mod` line in the crate root.
fn register_module(root: &Path, year: u16, day: u8) -> Result<(), CliError> {
    let year_module = root
        .join("aoc-solutions/src")
        .join(format!("y{year}"))
        .join("mod.rs");
    splice_declaration(&year_module, &format!("mod day{day:02};"), "mod day")?;

    let crate_root = root.join("aoc-solutions/src/lib.rs");
    splice_declaration(&crate_root, &format!("pub mod y{year};"), "pub mod y")
}

/// Insert `declaration` into the file, keeping the block of lines starting
/// with `sibling_prefix` sorted; creates the file when missing. Zero-padded
/// module names make the string sort chronological.
fn splice_declaration(
    path: &Path,
    declaration: &str,
    sibling_prefix: &str,
) -> Result<(), CliError> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(source) => {
            return Err(CliError::Write {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    if text.lines().any(|line| line.trim() == declaration) {
        return Ok(());
    }

    let mut lines: Vec<String> = text.lines().map(str::to_string).collect();
    let siblings: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.trim_start().starts_with(sibling_prefix))
        .map(|(index, _)| index)
        .collect();
    let position = match siblings.iter().find(|&&index| lines[index].trim() > declaration) {
        Some(&index) => index,
        None => siblings
            .last()
            .map(|&index| index + 1)
            .unwrap_or(lines.len()),
    };
    lines.insert(position, declaration.to_string());

    let mut content = lines.join("\n");
    content.push('\n');
    write_file(path, &content)
}
