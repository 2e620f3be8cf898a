//! Fixture discovery.
//!
//! A fixture is an input file (`.in`) with an optional reference output
//! (`.refout`) sitting beside it under the same name. For a given day the
//! locator probes a fixed list of directories: the day's `test` directory
//! under every search root first, then the day directory itself under every
//! root. Directories that do not exist are skipped silently; directories
//! reachable through more than one root are visited once.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::FixtureError;

/// Extension of fixture input files.
pub const INPUT_EXTENSION: &str = "in";

/// Extension of reference output files.
pub const REFOUT_EXTENSION: &str = "refout";

/// Relative directory that holds a day's fixtures, `solutions/y{year}/day{day:02}`.
pub fn working_dir(year: u16, day: u8) -> PathBuf {
    PathBuf::from("solutions")
        .join(format!("y{year}"))
        .join(format!("day{day:02}"))
}

/// Finds the fixtures for a (year, day) under a fixed set of search roots.
pub struct FixtureLocator {
    roots: Vec<PathBuf>,
}

impl FixtureLocator {
    /// A locator probing the given roots, in order.
    ///
    /// Typical roots are the current directory and the repository root, so
    /// runs behave the same from the workspace root and from a crate
    /// subdirectory.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    /// Every fixture for the given day, in discovery order.
    ///
    /// Within one directory files are taken in sorted name order. Labels are
    /// derived per batch, see [`Fixture::label`].
    pub fn locate(&self, year: u16, day: u8) -> Result<Vec<Fixture>, FixtureError> {
        let working_dir = working_dir(year, day);
        let mut candidates = Vec::new();
        for root in &self.roots {
            candidates.push(root.join(&working_dir).join("test"));
        }
        for root in &self.roots {
            candidates.push(root.join(&working_dir));
        }

        let mut visited = HashSet::new();
        let mut inputs = Vec::new();
        for dir in candidates {
            // Canonicalization doubles as the existence check and collapses
            // roots that alias the same directory.
            let Ok(canonical) = dir.canonicalize() else {
                continue;
            };
            if !visited.insert(canonical) {
                continue;
            }
            inputs.extend(input_files(&dir)?);
        }

        let shared = common_prefix_len(&inputs);
        Ok(inputs
            .into_iter()
            .map(|path| Fixture::new(path, shared))
            .collect())
    }
}

fn input_files(dir: &Path) -> Result<Vec<PathBuf>, FixtureError> {
    let entries = fs::read_dir(dir).map_err(|source| FixtureError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| FixtureError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == INPUT_EXTENSION) && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Number of leading path components shared by every path in the batch.
///
/// A path's final component never counts as shared, so even identical
/// single-file batches keep their file name in the label.
fn common_prefix_len(paths: &[PathBuf]) -> usize {
    let Some((first, rest)) = paths.split_first() else {
        return 0;
    };
    let reference: Vec<_> = first.components().collect();
    let mut shared = reference.len().saturating_sub(1);
    for path in rest {
        let components: Vec<_> = path.components().collect();
        let cap = components.len().saturating_sub(1);
        let mut common = 0;
        while common < shared && common < cap && components[common] == reference[common] {
            common += 1;
        }
        shared = common;
    }
    shared
}

fn derive_label(path: &Path, shared: usize) -> String {
    let mut parts: Vec<String> = path
        .components()
        .skip(shared)
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    if let Some(last) = parts.last_mut() {
        if let Some(stem) = Path::new(last.as_str()).file_stem() {
            *last = stem.to_string_lossy().into_owned();
        }
    }
    parts.join("/")
}

/// One input file and its reference-output sibling.
#[derive(Debug, Clone)]
pub struct Fixture {
    input_path: PathBuf,
    refout_path: PathBuf,
    label: String,
}

impl Fixture {
    fn new(input_path: PathBuf, shared_prefix: usize) -> Self {
        let refout_path = input_path.with_extension(REFOUT_EXTENSION);
        let label = derive_label(&input_path, shared_prefix);
        Self {
            input_path,
            refout_path,
            label,
        }
    }

    /// Short display name: the input path with the batch's common directory
    /// prefix and the `.in` extension stripped, components joined with `/`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Path of the `.in` file.
    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    /// Path the reference output is expected at, whether or not it exists.
    pub fn refout_path(&self) -> &Path {
        &self.refout_path
    }

    /// Input text with trailing whitespace removed; leading text is kept.
    pub fn read_input(&self) -> Result<String, FixtureError> {
        fs::read_to_string(&self.input_path)
            .map(|text| text.trim_end().to_string())
            .map_err(|source| FixtureError::Io {
                path: self.input_path.clone(),
                source,
            })
    }

    /// Reference output lines, or `None` when no `.refout` file exists.
    pub fn read_refout(&self) -> Result<Option<Vec<String>>, FixtureError> {
        match fs::read_to_string(&self.refout_path) {
            Ok(text) => Ok(Some(text.lines().map(str::to_string).collect())),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FixtureError::Io {
                path: self.refout_path.clone(),
                source,
            }),
        }
    }
}
