//! Error types for the CLI.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level CLI error; `main` prints it and exits non-zero.
#[derive(Error, Debug)]
pub enum CliError {
    /// A solver registration is invalid; raised at startup.
    #[error("registry error: {0}")]
    Registry(#[from] aoc_runner::RegistryError),

    /// Fixture discovery failed.
    #[error("fixture error: {0}")]
    Fixture(#[from] aoc_runner::FixtureError),

    /// `update last` invoked outside the event window.
    #[error("event is not active; `update last` works December 1-25 only")]
    EventNotActive,

    /// No session cookie in the environment; named variable is the remedy.
    #[error(
        "missing session cookie: set the {0} environment variable to your adventofcode.com session cookie"
    )]
    MissingSession(&'static str),

    /// A download or page parse failed.
    #[error("client error: {0}")]
    Client(#[from] aoc_client::ClientError),

    /// The updater could not write a file.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A run finished, but some fixtures were cut short by solver errors.
    #[error("{0} fixture run(s) aborted")]
    AbortedFixtures(usize),
}
