// verse_cli: command-line form checker for VerseCraft poems.
//
// Loads a poem from a file, stdin, a saved session file, or the bundled
// sample library, validates every line against the chosen form with
// `verse_prosody`, and renders the editor's gutter as text (or the full
// report as JSON). Optionally writes the poem back out as a session file.
//
// Module overview:
// - `config.rs`: Hand-rolled argument parsing into a `CliAction`.
// - `check.rs`:  Input loading, form resolution, report rendering, and
//                session export. Pure except for the reads/writes it is
//                asked to do.
//
// The binary (`main.rs`) only installs logging, parses arguments, and maps
// errors to exit codes.

pub mod check;
pub mod config;

pub use check::{CheckOutcome, run_action};
pub use config::{CheckConfig, CliAction, Input, parse_args};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Verse(#[from] verse_prosody::VerseError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
